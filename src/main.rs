//! CLI entry point for the pedestrian hot-spot reporter.
//!
//! Fetches sensor locations and pre-aggregated pedestrian counts from the
//! Melbourne open-data portal, ranks the busiest sensors, and publishes
//! top-N reports for the day and month granularities to S3.

use anyhow::Result;
use clap::Parser;
use pedestrian_hotspots::config::{
    DEFAULT_BUCKET, DEFAULT_OUTPUT_PREFIX, DEFAULT_TOP_N, ReportConfig,
};
use pedestrian_hotspots::infra::melbourne::MelbourneOpenData;
use pedestrian_hotspots::infra::s3::S3Sink;
use pedestrian_hotspots::report::run_report;
use pedestrian_hotspots::services::open_data::Granularity;
use std::ffi::OsStr;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "pedestrian_hotspots")]
#[command(about = "Publish top-N pedestrian hot-spot reports to S3", long_about = None)]
struct Cli {
    /// Target S3 bucket
    #[arg(long, default_value = DEFAULT_BUCKET)]
    bucket: String,

    /// Key prefix for all report artifacts
    #[arg(long, default_value = DEFAULT_OUTPUT_PREFIX)]
    output_prefix: String,

    /// Rows to keep per report
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    top_n: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/pedestrian_hotspots.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("pedestrian_hotspots.log"));

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
    let config = ReportConfig {
        bucket: cli.bucket,
        output_prefix: cli.output_prefix,
        top_n: cli.top_n,
    };

    let aws_config = aws_config::load_from_env().await;
    let sink = S3Sink::new(&aws_config);
    let api = MelbourneOpenData::new();

    info!(bucket = %config.bucket, prefix = %config.output_prefix, top_n = config.top_n, "starting report run");

    // The two granularities are independent; a failure in one must not
    // suppress the other's artifact.
    let mut failed = false;
    for granularity in [Granularity::Day, Granularity::Month] {
        if let Err(e) = run_report(&api, &sink, &config, granularity).await {
            error!(%granularity, error = %e, "report failed");
            failed = true;
        }
    }

    if failed {
        anyhow::bail!("one or more reports failed");
    }

    Ok(())
}
