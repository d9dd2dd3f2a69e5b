//! Scoring and labeling of the two record streams into one sequence.

use chrono::NaiveDate;

use crate::blending::types::{ScoredDailyRecord, Source};
use crate::scoring::{DailyRecord, holiday_score};

/// Scores every record, labels it relative to `today`, and concatenates
/// historical records before forecast records.
///
/// The score of a day does not depend on which stream produced it, and
/// the weekly aggregation downstream buckets by date, so the
/// concatenation order never changes the ranked result.
pub fn merge_and_label(
    historical: Vec<DailyRecord>,
    forecast: Vec<DailyRecord>,
    today: NaiveDate,
) -> Vec<ScoredDailyRecord> {
    historical
        .into_iter()
        .chain(forecast)
        .map(|day| {
            let score = holiday_score(&day);
            let source = Source::for_date(day.date, today);
            ScoredDailyRecord::new(day, score, source)
        })
        .collect()
}
