//! Clients for the Open-Meteo HTTP APIs.
//!
//! The archive endpoint serves observed history, the forecast endpoint
//! the near-term prediction; both return daily variables as parallel
//! JSON arrays under a `daily` object, with `null` for days a variable
//! was not measured. The helpers here normalize that shape into
//! [`crate::scoring::DailyRecord`] values: per-element nullability is
//! preserved, and sunshine (reported in seconds) is converted to the
//! minutes the scorer expects.

mod archive;
mod forecast;

pub use archive::ArchiveClient;
pub use forecast::{ForecastClient, MAX_FORECAST_DAYS};

/// Picks column `i` from a daily variable array, treating a short or
/// absent column the same as a `null` element.
fn column(values: &[Option<f64>], i: usize) -> Option<f64> {
    values.get(i).copied().flatten()
}

fn seconds_to_minutes(seconds: Option<f64>) -> Option<f64> {
    seconds.map(|s| s / 60.0)
}

/// Mean of two daily extremes; absent if either side is missing.
fn midpoint(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some((a + b) / 2.0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_in_range() {
        assert_eq!(column(&[Some(1.0), None, Some(3.0)], 0), Some(1.0));
        assert_eq!(column(&[Some(1.0), None, Some(3.0)], 1), None);
    }

    #[test]
    fn test_column_out_of_range() {
        assert_eq!(column(&[Some(1.0)], 5), None);
        assert_eq!(column(&[], 0), None);
    }

    #[test]
    fn test_seconds_to_minutes() {
        assert_eq!(seconds_to_minutes(Some(18000.0)), Some(300.0));
        assert_eq!(seconds_to_minutes(None), None);
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(midpoint(Some(30.0), Some(20.0)), Some(25.0));
        assert_eq!(midpoint(Some(30.0), None), None);
        assert_eq!(midpoint(None, Some(20.0)), None);
    }
}
