//! Storm Alert Evaluation - CLI
//!
//! Downloads a station's hourly history and prints how well a 3-hour
//! pressure drop predicts a wind increase over the chosen forecast horizon.
//!
//! Usage:
//!   cargo run --release                                  # Konstanz, 1h forecast
//!   cargo run --release -- --forecast 6 --station 06240  # Schiphol, 6h forecast
//!   cargo run --release -- --input 10929.csv.gz          # Use a downloaded archive
//!   cargo run --release -- --config storm_eval.toml --format json
//!
//! Environment:
//!   RUST_LOG - log verbosity (default: info), logs go to stderr

use clap::{Parser, ValueEnum};
use std::process;
use tracing::info;

use storm_eval::config::{load_config, EvaluationConfig};
use storm_eval::logging::init_logging;
use storm_eval::model::StormError;
use storm_eval::pipeline::{run, RunOptions};
use storm_eval::report::{render_json, render_table};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "storm_eval",
    about = "Evaluate a pressure-drop storm alert against historical wind"
)]
struct Cli {
    /// Forecast horizon in hours
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    forecast: u32,

    /// Meteostat station identifier (default: 10929, Konstanz)
    #[arg(long)]
    station: Option<String>,

    /// TOML file with source and threshold settings
    #[arg(long)]
    config: Option<String>,

    /// Read a local .csv.gz archive instead of downloading
    #[arg(long)]
    input: Option<String>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Abort unless consecutive rows are verifiably one hour apart
    #[arg(long)]
    strict_spacing: bool,
}

fn build_options(cli: &Cli) -> Result<RunOptions, StormError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => EvaluationConfig::default(),
    };

    if let Some(station) = &cli.station {
        config.source.station = station.clone();
    }

    let mut options = RunOptions::new(config, cli.forecast as usize);
    options.input = cli.input.clone();
    options.strict_spacing = cli.strict_spacing;
    Ok(options)
}

fn execute(cli: &Cli) -> Result<String, StormError> {
    let options = build_options(cli)?;
    info!(
        station = %options.config.source.station,
        forecast_hours = options.forecast_hours,
        "evaluating storm rule"
    );

    let outcome = run(&options)?;

    match cli.format {
        OutputFormat::Text => Ok(render_table(&outcome.grid)),
        OutputFormat::Json => render_json(
            &outcome.grid,
            &options.config.source.station,
            options.forecast_hours,
            outcome.skipped,
        ),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    match execute(&cli) {
        Ok(report) => print!("{}", report),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
