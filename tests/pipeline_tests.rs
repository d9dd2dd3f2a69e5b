//! End-to-end pipeline tests driven through the public API, with
//! in-memory provider implementations instead of live HTTP.

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use holiday_rater::blending::types::Source;
use holiday_rater::pipeline::{Hemisphere, PlanOutcome, PlanRequest, recommend};
use holiday_rater::scoring::DailyRecord;
use holiday_rater::services::weather_api::{ForecastDaily, HistoricalDaily};

struct FixedHistory {
    records: Vec<DailyRecord>,
    calls: AtomicUsize,
}

impl FixedHistory {
    fn new(records: Vec<DailyRecord>) -> Self {
        Self {
            records,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl HistoricalDaily for FixedHistory {
    async fn daily_for_year(&self, _lat: f64, _lon: f64, _year: i32) -> Result<Vec<DailyRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.clone())
    }
}

struct FixedForecast {
    records: Vec<DailyRecord>,
    calls: AtomicUsize,
}

impl FixedForecast {
    fn new(records: Vec<DailyRecord>) -> Self {
        Self {
            records,
            calls: AtomicUsize::new(0),
        }
    }

    fn empty() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait::async_trait]
impl ForecastDaily for FixedForecast {
    async fn daily_forecast(&self, _lat: f64, _lon: f64, _days: u32) -> Result<Vec<DailyRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.clone())
    }
}

struct FailingForecast;

#[async_trait::async_trait]
impl ForecastDaily for FailingForecast {
    async fn daily_forecast(&self, _lat: f64, _lon: f64, _days: u32) -> Result<Vec<DailyRecord>> {
        Err(anyhow!("forecast provider unreachable"))
    }
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// A day that scores the maximum of 7.
fn sunny(date: NaiveDate) -> DailyRecord {
    DailyRecord {
        date,
        avg_temperature: Some(22.0),
        precipitation: Some(0.0),
        sunshine_minutes: Some(400.0),
        wind_speed: Some(5.0),
    }
}

/// A day that scores 0.
fn dreadful(date: NaiveDate) -> DailyRecord {
    DailyRecord {
        date,
        avg_temperature: Some(5.0),
        precipitation: Some(12.0),
        sunshine_minutes: Some(30.0),
        wind_speed: Some(40.0),
    }
}

fn request(top_n: usize) -> PlanRequest {
    PlanRequest {
        city: "London (Heathrow)".to_string(),
        year: 2024,
        top_n,
        hemisphere: Hemisphere::Northern,
        summer_only: false,
        include_forecast: false,
        forecast_days: 16,
    }
}

#[tokio::test]
async fn perfect_historical_week_ranks_first_with_mean_seven() {
    // 2024-07-15 is a Monday; seven sunny days cover that whole week
    let week: Vec<_> = (15..=21).map(|day| sunny(d(2024, 7, day))).collect();
    let history = FixedHistory::new(week);
    let forecast = FixedForecast::empty();

    let outcome = recommend(&history, &forecast, &request(1), d(2024, 8, 1))
        .await
        .unwrap();

    let PlanOutcome::Planned(plan) = outcome else {
        panic!("expected a planned outcome");
    };
    assert_eq!(plan.daily.len(), 7);
    assert_eq!(plan.weekly.len(), 1);
    assert_eq!(plan.weekly[0].week_start, d(2024, 7, 15));
    assert_eq!(plan.weekly[0].mean_score, 7.0);
    assert_eq!(plan.weekly[0].source, Source::Historical);
}

#[tokio::test]
async fn empty_historical_year_short_circuits_to_no_data() {
    let history = FixedHistory::new(Vec::new());
    let forecast = FixedForecast::new(vec![sunny(d(2024, 8, 2))]);

    let mut req = request(3);
    req.include_forecast = true;

    let outcome = recommend(&history, &forecast, &req, d(2024, 8, 1))
        .await
        .unwrap();

    assert_eq!(outcome, PlanOutcome::NoData);
    // The pipeline never reaches the forecast stage
    assert_eq!(forecast.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn disabled_forecast_produces_no_forecast_rows() {
    let history = FixedHistory::new(vec![sunny(d(2024, 7, 15)), sunny(d(2024, 7, 16))]);
    let forecast = FixedForecast::new(vec![sunny(d(2024, 8, 2)), sunny(d(2024, 8, 3))]);

    let outcome = recommend(&history, &forecast, &request(5), d(2024, 8, 1))
        .await
        .unwrap();

    let PlanOutcome::Planned(plan) = outcome else {
        panic!("expected a planned outcome");
    };
    assert!(plan.daily.iter().all(|day| day.source == Source::Historical));
    assert!(plan.weekly.iter().all(|week| week.source == Source::Historical));
    assert_eq!(forecast.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn failing_forecast_degrades_to_historical_only() {
    let history = FixedHistory::new(vec![sunny(d(2024, 7, 15)), sunny(d(2024, 7, 16))]);

    let mut req = request(5);
    req.include_forecast = true;

    let outcome = recommend(&history, &FailingForecast, &req, d(2024, 8, 1))
        .await
        .unwrap();

    let PlanOutcome::Planned(plan) = outcome else {
        panic!("expected a planned outcome");
    };
    assert_eq!(plan.daily.len(), 2);
    assert!(plan.weekly.iter().all(|week| week.source == Source::Historical));
}

#[tokio::test]
async fn week_straddling_reference_date_yields_one_row_per_source() {
    // Monday through Wednesday observed, Thursday and Friday forecast,
    // with the reference date on the Thursday
    let history = FixedHistory::new(vec![
        sunny(d(2024, 7, 15)),
        sunny(d(2024, 7, 16)),
        sunny(d(2024, 7, 17)),
    ]);
    let forecast = FixedForecast::new(vec![dreadful(d(2024, 7, 18)), dreadful(d(2024, 7, 19))]);

    let mut req = request(5);
    req.include_forecast = true;

    let outcome = recommend(&history, &forecast, &req, d(2024, 7, 18))
        .await
        .unwrap();

    let PlanOutcome::Planned(plan) = outcome else {
        panic!("expected a planned outcome");
    };
    assert_eq!(plan.weekly.len(), 2);
    assert!(plan.weekly.iter().all(|w| w.week_start == d(2024, 7, 15)));
    assert_eq!(plan.weekly[0].source, Source::Historical);
    assert_eq!(plan.weekly[0].mean_score, 7.0);
    assert_eq!(plan.weekly[1].source, Source::Forecast);
    assert_eq!(plan.weekly[1].mean_score, 0.0);
}

#[tokio::test]
async fn summer_filter_drops_historical_days_outside_the_window() {
    let history = FixedHistory::new(vec![
        sunny(d(2024, 5, 20)),
        sunny(d(2024, 6, 1)),
        sunny(d(2024, 8, 31)),
        sunny(d(2024, 9, 1)),
    ]);
    let forecast = FixedForecast::empty();

    let mut req = request(5);
    req.summer_only = true;

    let outcome = recommend(&history, &forecast, &req, d(2025, 1, 1))
        .await
        .unwrap();

    let PlanOutcome::Planned(plan) = outcome else {
        panic!("expected a planned outcome");
    };
    let dates: Vec<_> = plan.daily.iter().map(|day| day.date).collect();
    assert_eq!(dates, vec![d(2024, 6, 1), d(2024, 8, 31)]);
}

#[tokio::test]
async fn pipeline_is_idempotent_for_identical_inputs() {
    let history = FixedHistory::new(vec![
        sunny(d(2024, 7, 15)),
        dreadful(d(2024, 7, 22)),
        sunny(d(2024, 7, 29)),
    ]);
    let forecast = FixedForecast::new(vec![sunny(d(2024, 8, 2))]);

    let mut req = request(3);
    req.include_forecast = true;
    let today = d(2024, 8, 1);

    let first = recommend(&history, &forecast, &req, today).await.unwrap();
    let second = recommend(&history, &forecast, &req, today).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn unknown_city_is_rejected_before_any_fetch() {
    let history = FixedHistory::new(vec![sunny(d(2024, 7, 15))]);
    let forecast = FixedForecast::empty();

    let mut req = request(3);
    req.city = "Atlantis".to_string();

    let err = recommend(&history, &forecast, &req, d(2024, 8, 1))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Atlantis"));
    assert_eq!(history.calls.load(Ordering::SeqCst), 0);
    assert_eq!(forecast.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn non_positive_top_n_is_rejected_before_any_fetch() {
    let history = FixedHistory::new(vec![sunny(d(2024, 7, 15))]);
    let forecast = FixedForecast::empty();

    let err = recommend(&history, &forecast, &request(0), d(2024, 8, 1))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("top_n"));
    assert_eq!(history.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn ranking_respects_top_n_across_sources() {
    let history = FixedHistory::new(vec![
        sunny(d(2024, 7, 1)),
        sunny(d(2024, 7, 8)),
        dreadful(d(2024, 7, 22)),
    ]);
    let forecast = FixedForecast::new(vec![sunny(d(2024, 8, 2))]);

    let mut req = request(2);
    req.include_forecast = true;

    let outcome = recommend(&history, &forecast, &req, d(2024, 8, 1))
        .await
        .unwrap();

    let PlanOutcome::Planned(plan) = outcome else {
        panic!("expected a planned outcome");
    };
    assert_eq!(plan.weekly.len(), 2);
    for pair in plan.weekly.windows(2) {
        assert!(pair[0].mean_score >= pair[1].mean_score);
    }
    // The dreadful week is ranked out
    assert!(plan.weekly.iter().all(|week| week.mean_score == 7.0));
}
