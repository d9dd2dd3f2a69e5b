//! CLI entry point for the holiday week rater.
//!
//! Provides subcommands for ranking the best holiday weeks of a city's
//! year and for listing the supported cities.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use holiday_rater::fetch::auth::UrlParam;
use holiday_rater::fetch::{BasicClient, HttpClient};
use holiday_rater::infra::open_meteo::{ArchiveClient, ForecastClient, MAX_FORECAST_DAYS};
use holiday_rater::locations;
use holiday_rater::output;
use holiday_rater::pipeline::{self, Hemisphere, PlanOutcome, PlanRequest};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "holiday_rater")]
#[command(about = "Rank the best holiday weeks for a city from daily weather data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum HemisphereArg {
    Northern,
    Southern,
}

impl From<HemisphereArg> for Hemisphere {
    fn from(arg: HemisphereArg) -> Self {
        match arg {
            HemisphereArg::Northern => Hemisphere::Northern,
            HemisphereArg::Southern => Hemisphere::Southern,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the best holiday weeks for a city and year
    Recommend {
        /// Registered city name (see list-cities)
        #[arg(value_name = "CITY")]
        city: String,

        /// Year of historical data to rate
        #[arg(short, long)]
        year: i32,

        /// How many top weeks to keep
        #[arg(short = 'n', long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=5))]
        top_n: u8,

        /// Hemisphere deciding which months count as summer
        #[arg(long, value_enum, default_value_t = HemisphereArg::Northern)]
        hemisphere: HemisphereArg,

        /// Rate the whole year instead of only the summer months
        #[arg(long)]
        full_year: bool,

        /// Skip the forecast provider entirely
        #[arg(long)]
        no_forecast: bool,

        /// Forecast horizon in days, clamped to the provider maximum
        #[arg(long, default_value_t = MAX_FORECAST_DAYS)]
        forecast_days: u32,

        /// Reference date separating historical from forecast rows
        /// (defaults to the current local date)
        #[arg(long, value_name = "YYYY-MM-DD")]
        reference_date: Option<NaiveDate>,

        /// Write the ranked weeks to this CSV file
        #[arg(short, long)]
        output: Option<String>,

        /// Write the full scored daily data to this CSV file
        #[arg(long)]
        daily_output: Option<String>,
    },
    /// List the supported cities and their coordinates
    ListCities,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/holiday_rater.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("holiday_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Recommend {
            city,
            year,
            top_n,
            hemisphere,
            full_year,
            no_forecast,
            forecast_days,
            reference_date,
            output,
            daily_output,
        } => {
            let request = PlanRequest {
                city,
                year,
                top_n: usize::from(top_n),
                hemisphere: hemisphere.into(),
                summer_only: !full_year,
                include_forecast: !no_forecast,
                forecast_days,
            };
            let today = reference_date.unwrap_or_else(|| Local::now().date_naive());

            let history = archive_client();
            let forecast = forecast_client();

            match pipeline::recommend(&history, &forecast, &request, today).await? {
                PlanOutcome::NoData => {
                    warn!(
                        city = %request.city,
                        year = request.year,
                        "No data available for this city/year"
                    );
                }
                PlanOutcome::Planned(plan) => {
                    info!(
                        city = %request.city,
                        year = request.year,
                        top_n = request.top_n,
                        "Top holiday weeks"
                    );
                    if plan.weekly.is_empty() {
                        info!("No weekly scores available");
                    } else {
                        output::log_weekly(&plan.weekly);
                    }
                    output::log_daily_preview(&plan.daily);

                    if let Some(path) = output {
                        output::write_weekly_csv(&path, &plan.weekly)?;
                        info!(path = %path, "Weekly CSV written");
                    }
                    if let Some(path) = daily_output {
                        output::write_daily_csv(&path, &plan.daily)?;
                        info!(path = %path, "Daily CSV written");
                    }
                }
            }
        }
        Commands::ListCities => {
            for &(name, lat, lon) in locations::CITIES {
                info!(city = %name, lat, lon, "Supported city");
            }
            info!(total = locations::CITIES.len(), "City registry");
        }
    }

    Ok(())
}

/// Wraps the HTTP client with commercial-tier authentication when an
/// API key is configured.
fn commercial_http() -> Option<Box<dyn HttpClient>> {
    std::env::var("OPEN_METEO_API_KEY")
        .ok()
        .map(|key| Box::new(UrlParam::api_key(BasicClient::new(), key)) as Box<dyn HttpClient>)
}

fn archive_client() -> ArchiveClient {
    let mut client = match std::env::var("OPEN_METEO_ARCHIVE_URL") {
        Ok(url) => ArchiveClient::with_base_url(url),
        Err(_) => ArchiveClient::new(),
    };
    if let Some(http) = commercial_http() {
        client = client.with_http(http);
    }
    client
}

fn forecast_client() -> ForecastClient {
    let mut client = match std::env::var("OPEN_METEO_FORECAST_URL") {
        Ok(url) => ForecastClient::with_base_url(url),
        Err(_) => ForecastClient::new(),
    };
    if let Some(http) = commercial_http() {
        client = client.with_http(http);
    }
    client
}
