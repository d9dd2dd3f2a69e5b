//! Historical daily weather from the Open-Meteo archive API.

use anyhow::Result;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use crate::fetch::{BasicClient, HttpClient, fetch_json};
use crate::scoring::DailyRecord;
use crate::services::weather_api::HistoricalDaily;

use super::{column, seconds_to_minutes};

const DEFAULT_ARCHIVE_URL: &str = "https://archive-api.open-meteo.com/v1/archive";

const DAILY_VARIABLES: &str =
    "temperature_2m_mean,precipitation_sum,sunshine_duration,windspeed_10m_max";

/// Client for the Open-Meteo historical archive endpoint.
pub struct ArchiveClient {
    base_url: String,
    http: Box<dyn HttpClient>,
}

#[derive(Debug, Deserialize)]
struct ArchiveResponse {
    daily: Option<ArchiveDaily>,
}

#[derive(Debug, Deserialize)]
struct ArchiveDaily {
    time: Vec<NaiveDate>,
    #[serde(default)]
    temperature_2m_mean: Vec<Option<f64>>,
    #[serde(default)]
    precipitation_sum: Vec<Option<f64>>,
    #[serde(default)]
    sunshine_duration: Vec<Option<f64>>,
    #[serde(default)]
    windspeed_10m_max: Vec<Option<f64>>,
}

impl ArchiveClient {
    /// Client for the public archive endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_ARCHIVE_URL)
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

impl Default for ArchiveClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl HistoricalDaily for ArchiveClient {
    async fn daily_for_year(&self, lat: f64, lon: f64, year: i32) -> Result<Vec<DailyRecord>> {
        let url = format!(
            "{}?latitude={lat:.4}&longitude={lon:.4}\
             &start_date={year}-01-01&end_date={year}-12-31\
             &daily={DAILY_VARIABLES}&timezone=auto",
            self.base_url
        );

        let response: ArchiveResponse = fetch_json(self.http.as_ref(), &url).await?;

        let Some(daily) = response.daily else {
            return Ok(Vec::new());
        };

        let records: Vec<DailyRecord> = daily
            .time
            .iter()
            .enumerate()
            .map(|(i, &date)| DailyRecord {
                date,
                avg_temperature: column(&daily.temperature_2m_mean, i),
                precipitation: column(&daily.precipitation_sum, i),
                sunshine_minutes: seconds_to_minutes(column(&daily.sunshine_duration, i)),
                wind_speed: column(&daily.windspeed_10m_max, i),
            })
            .collect();

        debug!(count = records.len(), year, "Archive records received");
        Ok(records)
    }
}
