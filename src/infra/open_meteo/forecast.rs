//! Near-term daily forecasts from the Open-Meteo forecast API.

use anyhow::Result;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use crate::fetch::{BasicClient, HttpClient, fetch_json};
use crate::scoring::DailyRecord;
use crate::services::weather_api::ForecastDaily;

use super::{column, midpoint, seconds_to_minutes};

const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// The forecast API serves at most 16 days ahead; longer horizons are
/// clamped silently.
pub const MAX_FORECAST_DAYS: u32 = 16;

const DAILY_VARIABLES: &str =
    "temperature_2m_max,temperature_2m_min,precipitation_sum,windspeed_10m_max,sunshine_duration";

/// Client for the Open-Meteo forecast endpoint.
pub struct ForecastClient {
    base_url: String,
    http: Box<dyn HttpClient>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: Option<ForecastDailyBlock>,
}

#[derive(Debug, Deserialize)]
struct ForecastDailyBlock {
    time: Vec<NaiveDate>,
    #[serde(default)]
    temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    precipitation_sum: Vec<Option<f64>>,
    #[serde(default)]
    windspeed_10m_max: Vec<Option<f64>>,
    #[serde(default)]
    sunshine_duration: Vec<Option<f64>>,
}

impl ForecastClient {
    /// Client for the public forecast endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_FORECAST_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Box::new(BasicClient::new()),
        }
    }

    /// Replaces the HTTP client, e.g. to wrap it with commercial-tier
    /// authentication.
    pub fn with_http(mut self, http: Box<dyn HttpClient>) -> Self {
        self.http = http;
        self
    }
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ForecastDaily for ForecastClient {
    async fn daily_forecast(&self, lat: f64, lon: f64, days: u32) -> Result<Vec<DailyRecord>> {
        let horizon = days.min(MAX_FORECAST_DAYS);
        let url = format!(
            "{}?latitude={lat:.4}&longitude={lon:.4}\
             &daily={DAILY_VARIABLES}&forecast_days={horizon}&timezone=auto",
            self.base_url
        );

        let response: ForecastResponse = fetch_json(self.http.as_ref(), &url).await?;

        let Some(daily) = response.daily else {
            return Ok(Vec::new());
        };

        // The daily mean is not among the forecast variables; derive it
        // from the day's extremes.
        let records: Vec<DailyRecord> = daily
            .time
            .iter()
            .enumerate()
            .map(|(i, &date)| DailyRecord {
                date,
                avg_temperature: midpoint(
                    column(&daily.temperature_2m_max, i),
                    column(&daily.temperature_2m_min, i),
                ),
                precipitation: column(&daily.precipitation_sum, i),
                sunshine_minutes: seconds_to_minutes(column(&daily.sunshine_duration, i)),
                wind_speed: column(&daily.windspeed_10m_max, i),
            })
            .collect();

        debug!(count = records.len(), horizon, "Forecast records received");
        Ok(records)
    }
}
