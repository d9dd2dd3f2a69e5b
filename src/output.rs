//! Output formatting for pipeline results.
//!
//! Supports CSV export of the ranked weeks and the daily preview, plus
//! logged tables for terminal use. Files are written fresh on every
//! run; results are re-derived per invocation and never accumulate.

use anyhow::Result;
use csv::Writer;
use tracing::{debug, info};

use crate::blending::types::{ScoredDailyRecord, WeeklyAggregate};

/// How many daily rows the logged preview shows.
const PREVIEW_ROWS: usize = 20;

/// Writes the ranked weekly rows to a CSV file with a header row.
pub fn write_weekly_csv(path: &str, weeks: &[WeeklyAggregate]) -> Result<()> {
    debug!(path, rows = weeks.len(), "Writing weekly CSV");

    let mut writer = Writer::from_path(path)?;
    for week in weeks {
        writer.serialize(week)?;
    }
    writer.flush()?;

    Ok(())
}

/// Writes the full merged daily sequence to a CSV file with a header row.
pub fn write_daily_csv(path: &str, days: &[ScoredDailyRecord]) -> Result<()> {
    debug!(path, rows = days.len(), "Writing daily CSV");

    let mut writer = Writer::from_path(path)?;
    for day in days {
        writer.serialize(day)?;
    }
    writer.flush()?;

    Ok(())
}

/// Logs the ranked weeks, best first.
pub fn log_weekly(weeks: &[WeeklyAggregate]) {
    for (i, week) in weeks.iter().enumerate() {
        info!(
            rank = i + 1,
            week_start = %week.week_start,
            mean_score = week.mean_score,
            source = %week.source,
            "Ranked week"
        );
    }
}

/// Logs the first [`PREVIEW_ROWS`] scored days.
pub fn log_daily_preview(days: &[ScoredDailyRecord]) {
    for day in days.iter().take(PREVIEW_ROWS) {
        info!(
            date = %day.date,
            score = day.holiday_score,
            source = %day.source,
            avg_temperature = day.avg_temperature,
            precipitation = day.precipitation,
            sunshine_minutes = day.sunshine_minutes,
            wind_speed = day.wind_speed,
            "Scored day"
        );
    }
    if days.len() > PREVIEW_ROWS {
        info!(shown = PREVIEW_ROWS, total = days.len(), "Daily preview truncated");
    }
}
