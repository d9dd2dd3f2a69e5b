//! End-to-end pipeline for one (city, year) request.
//!
//! Sequences retrieval, the optional summer-window restriction,
//! scoring, blending, and weekly aggregation. Request-scoped and
//! synchronous: every invocation derives its result from scratch, and
//! nothing is shared between requests.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::blending::merge::merge_and_label;
use crate::blending::types::{ScoredDailyRecord, WeeklyAggregate};
use crate::blending::weekly::top_weeks;
use crate::locations;
use crate::services::weather_api::{ForecastDaily, HistoricalDaily};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    Northern,
    Southern,
}

/// One (city, year, options) request.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// A name from the [`locations`] registry.
    pub city: String,
    pub year: i32,
    /// How many ranked weeks to keep. Must be positive.
    pub top_n: usize,
    /// Decides which months count as summer when `summer_only` is set.
    pub hemisphere: Hemisphere,
    /// Restrict historical records to the hemisphere's summer window
    /// before scoring.
    pub summer_only: bool,
    pub include_forecast: bool,
    /// Requested forecast horizon; the provider clamps it to its own
    /// maximum.
    pub forecast_days: u32,
}

/// Everything the display layer needs: the full scored day sequence for
/// preview and the ranked weeks.
#[derive(Debug, Clone, PartialEq)]
pub struct HolidayPlan {
    pub daily: Vec<ScoredDailyRecord>,
    pub weekly: Vec<WeeklyAggregate>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome {
    /// The historical provider had nothing for this city/year. An
    /// expected empty state, not a failure.
    NoData,
    Planned(HolidayPlan),
}

/// The summer date window for a hemisphere, both endpoints inclusive.
///
/// Northern summer is June through August of `year`; southern summer is
/// December of the previous year through February 28th of `year`.
pub fn summer_window(hemisphere: Hemisphere, year: i32) -> (NaiveDate, NaiveDate) {
    match hemisphere {
        Hemisphere::Northern => (ymd(year, 6, 1), ymd(year, 8, 31)),
        Hemisphere::Southern => (ymd(year - 1, 12, 1), ymd(year, 2, 28)),
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Runs the full recommendation pipeline.
///
/// `today` is the reference date separating historical from forecast
/// records; callers inject it rather than this function reading the
/// clock, so identical inputs always produce identical output.
///
/// Configuration problems (unknown city, non-positive `top_n`) fail
/// before either provider is contacted. A failed or empty forecast
/// fetch degrades to historical-only results; only an empty historical
/// year ends the request, as [`PlanOutcome::NoData`].
pub async fn recommend<H, F>(
    history: &H,
    forecast: &F,
    request: &PlanRequest,
    today: NaiveDate,
) -> Result<PlanOutcome>
where
    H: HistoricalDaily + ?Sized,
    F: ForecastDaily + ?Sized,
{
    let Some((lat, lon)) = locations::coords_for(&request.city) else {
        bail!(
            "Unknown city '{}'; run the list-cities command for supported names",
            request.city
        );
    };
    if request.top_n == 0 {
        bail!("top_n must be at least 1");
    }

    info!(city = %request.city, year = request.year, lat, lon, "Fetching historical records");
    let mut historical = history.daily_for_year(lat, lon, request.year).await?;

    if historical.is_empty() {
        info!(city = %request.city, year = request.year, "No historical data for this city/year");
        return Ok(PlanOutcome::NoData);
    }

    if request.summer_only {
        let (from, until) = summer_window(request.hemisphere, request.year);
        let before = historical.len();
        historical.retain(|day| day.date >= from && day.date <= until);
        debug!(
            kept = historical.len(),
            dropped = before - historical.len(),
            %from,
            %until,
            "Restricted to summer window"
        );
    }

    let forecast_records = if request.include_forecast {
        match forecast
            .daily_forecast(lat, lon, request.forecast_days)
            .await
        {
            Ok(records) => {
                info!(count = records.len(), "Forecast records fetched");
                records
            }
            Err(e) => {
                warn!(error = %e, "Forecast unavailable, continuing with historical data only");
                Vec::new()
            }
        }
    } else {
        Vec::new()
    };

    let daily = merge_and_label(historical, forecast_records, today);
    let weekly = top_weeks(&daily, request.top_n);

    info!(
        days = daily.len(),
        weeks = weekly.len(),
        "Recommendation pipeline complete"
    );
    Ok(PlanOutcome::Planned(HolidayPlan { daily, weekly }))
}
