//! Traits for the two weather data collaborators.
//!
//! The pipeline only sees sequences of [`DailyRecord`]; how a provider
//! fills them (HTTP shape, station selection, unit conversion) stays
//! behind these traits. Both fetches may legitimately return an empty
//! sequence — the pipeline decides what that means.

use anyhow::Result;

use crate::scoring::DailyRecord;

/// Provider of observed (past) daily weather.
#[async_trait::async_trait]
pub trait HistoricalDaily {
    /// Returns the daily records for the calendar year at the given
    /// coordinates, January 1st through December 31st. May be empty if
    /// the provider has no data for that location/year.
    async fn daily_for_year(&self, lat: f64, lon: f64, year: i32) -> Result<Vec<DailyRecord>>;
}

/// Provider of predicted (future, bounded-horizon) daily weather.
#[async_trait::async_trait]
pub trait ForecastDaily {
    /// Returns daily forecast records starting today for up to `days`
    /// days ahead. Implementations clamp `days` silently to their own
    /// maximum horizon.
    async fn daily_forecast(&self, lat: f64, lon: f64, days: u32) -> Result<Vec<DailyRecord>>;
}
