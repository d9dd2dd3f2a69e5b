//! Data types used by the blending and aggregation pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::scoring::DailyRecord;

/// Which provider a day's record came from, relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Source {
    Historical,
    Forecast,
}

impl Source {
    /// Labels a date relative to `today` (midnight-normalized reference
    /// date supplied by the caller): today and later is `Forecast`,
    /// everything earlier is `Historical`.
    pub fn for_date(date: NaiveDate, today: NaiveDate) -> Self {
        if date >= today {
            Source::Forecast
        } else {
            Source::Historical
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Historical => write!(f, "Historical"),
            Source::Forecast => write!(f, "Forecast"),
        }
    }
}

/// A scored, source-labeled day. Flat so it serializes directly to a
/// CSV row or JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDailyRecord {
    pub date: NaiveDate,
    pub avg_temperature: Option<f64>,
    pub precipitation: Option<f64>,
    pub sunshine_minutes: Option<f64>,
    pub wind_speed: Option<f64>,
    pub holiday_score: u8,
    pub source: Source,
}

impl ScoredDailyRecord {
    pub fn new(day: DailyRecord, holiday_score: u8, source: Source) -> Self {
        Self {
            date: day.date,
            avg_temperature: day.avg_temperature,
            precipitation: day.precipitation,
            sunshine_minutes: day.sunshine_minutes,
            wind_speed: day.wind_speed,
            holiday_score,
            source,
        }
    }
}

/// One ranked output row: the mean holiday score of all days that fall
/// into one (week, source) bucket. A week that contains both historical
/// and forecast days produces one row per source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyAggregate {
    /// The Monday that starts the week bucket.
    pub week_start: NaiveDate,
    pub mean_score: f64,
    pub source: Source,
}
