//! Storm Alert Baseline
//!
//! Fixed-parameter run of the storm rule evaluation: station 10929
//! (Konstanz), one-hour forecast, stock threshold grid. Takes no arguments.
//!
//! Usage:
//!   cargo run --bin storm_baseline
//!
//! Environment:
//!   RUST_LOG - log verbosity (default: info), logs go to stderr

use storm_eval::config::EvaluationConfig;
use storm_eval::logging::init_logging;
use storm_eval::pipeline::{run, RunOptions};
use storm_eval::report::render_table;

const FORECAST_HOURS: usize = 1;

fn main() {
    init_logging();

    let options = RunOptions::new(EvaluationConfig::default(), FORECAST_HOURS);
    match run(&options) {
        Ok(outcome) => print!("{}", render_table(&outcome.grid)),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
