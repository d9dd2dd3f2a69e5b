//! Daily holiday-suitability scoring.
//!
//! One [`DailyRecord`] per calendar day and location; every weather
//! attribute is optional because neither provider guarantees complete
//! series. [`holiday_score`] folds the present attributes into a single
//! 0–7 integer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day's weather for one location.
///
/// `date` is the unique key within a location's series. A `None`
/// attribute means the provider had no measurement for that day; it
/// contributes nothing to the score, which is not the same as measuring
/// zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    /// Daily mean temperature, °C.
    pub avg_temperature: Option<f64>,
    /// Daily precipitation sum, mm.
    pub precipitation: Option<f64>,
    /// Daily sunshine duration, minutes. Providers reporting seconds
    /// must convert before constructing the record.
    pub sunshine_minutes: Option<f64>,
    /// Daily maximum wind speed, km/h.
    pub wind_speed: Option<f64>,
}

/// Scores one day's weather for holiday suitability.
///
/// Each attribute contributes independently and the contributions sum;
/// an absent attribute contributes 0. Total, pure, deterministic.
///
/// | Attribute        | Condition              | Points |
/// |------------------|------------------------|--------|
/// | avg_temperature  | 20 ≤ t ≤ 27            | 2      |
/// | avg_temperature  | 15 ≤ t < 20 or 28 ≤ t ≤ 30 | 1  |
/// | precipitation    | p ≤ 1                  | 2      |
/// | precipitation    | 1 < p ≤ 5              | 1      |
/// | sunshine_minutes | s > 300                | 2      |
/// | sunshine_minutes | 150 ≤ s ≤ 300          | 1      |
/// | wind_speed       | w < 20                 | 1      |
///
/// Maximum attainable score is 7.
pub fn holiday_score(record: &DailyRecord) -> u8 {
    let mut score = 0;

    if let Some(t) = record.avg_temperature {
        if (20.0..=27.0).contains(&t) {
            score += 2;
        } else if (15.0..20.0).contains(&t) || (28.0..=30.0).contains(&t) {
            score += 1;
        }
    }

    if let Some(p) = record.precipitation {
        if p <= 1.0 {
            score += 2;
        } else if p <= 5.0 {
            score += 1;
        }
    }

    if let Some(s) = record.sunshine_minutes {
        if s > 300.0 {
            score += 2;
        } else if s >= 150.0 {
            score += 1;
        }
    }

    if let Some(w) = record.wind_speed {
        if w < 20.0 {
            score += 1;
        }
    }

    score
}
