//! Weekly aggregation and ranking of scored days.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::blending::types::{ScoredDailyRecord, Source, WeeklyAggregate};
use crate::blending::utility::mean;

/// Returns the Monday on or before `date`. Weeks run Monday through
/// Sunday; which Monday a day maps to decides which days aggregate
/// together, so this convention is part of the output contract.
pub fn week_start_monday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Aggregates scored days into ranked weekly rows.
///
/// Days are bucketed by `(week_start_monday(date), source)`, each bucket
/// reduced to its arithmetic mean score, and the rows sorted by mean
/// score descending. Equal means order by earlier `week_start` first,
/// then `Historical` before `Forecast`, so the ranking is reproducible
/// run to run. At most `top_n` rows are returned; a non-positive
/// `top_n` or empty input yields an empty result.
pub fn top_weeks(records: &[ScoredDailyRecord], top_n: usize) -> Vec<WeeklyAggregate> {
    let mut buckets: BTreeMap<(NaiveDate, Source), Vec<f64>> = BTreeMap::new();

    for record in records {
        buckets
            .entry((week_start_monday(record.date), record.source))
            .or_default()
            .push(f64::from(record.holiday_score));
    }

    let mut weeks: Vec<WeeklyAggregate> = buckets
        .into_iter()
        .map(|((week_start, source), scores)| WeeklyAggregate {
            week_start,
            mean_score: mean(&scores),
            source,
        })
        .collect();

    weeks.sort_by(|a, b| {
        b.mean_score
            .total_cmp(&a.mean_score)
            .then_with(|| a.week_start.cmp(&b.week_start))
            .then_with(|| a.source.cmp(&b.source))
    });
    weeks.truncate(top_n);

    weeks
}
