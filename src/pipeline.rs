/// End-to-end evaluation run: archive → observations → samples → grid.
///
/// Both binaries go through `run`. Retrieval happens first and completes
/// before any parsing; `evaluate_archive` is the pure remainder and is what
/// the tests drive.

use tracing::{info, warn};

use crate::analysis::grid::{evaluate_grid, ThresholdGrid};
use crate::analysis::samples::{build_samples, SkipCounts};
use crate::config::{EvaluationConfig, ThresholdConfig};
use crate::ingest::meteostat::{
    audit_hourly_spacing, decompress_archive, fetch_station_archive, parse_records,
    read_archive_file, SpacingReport,
};
use crate::model::StormError;

/// Everything a single run needs. Built by the CLI from flags + config.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub config: EvaluationConfig,
    pub forecast_hours: usize,
    /// Local `.csv.gz` to read instead of downloading
    pub input: Option<String>,
    /// Treat any irregular or unverifiable hourly step as fatal
    pub strict_spacing: bool,
}

impl RunOptions {
    pub fn new(config: EvaluationConfig, forecast_hours: usize) -> Self {
        RunOptions {
            config,
            forecast_hours,
            input: None,
            strict_spacing: false,
        }
    }
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub grid: ThresholdGrid,
    pub records: usize,
    pub skipped: SkipCounts,
    pub spacing: SpacingReport,
}

/// Parses decompressed archive text and evaluates the threshold grid.
pub fn evaluate_archive(
    text: &str,
    forecast_hours: usize,
    thresholds: &ThresholdConfig,
    strict_spacing: bool,
) -> Result<RunOutcome, StormError> {
    let observations = parse_records(text);

    let spacing = audit_hourly_spacing(&observations);
    if !spacing.is_regular() {
        if strict_spacing {
            return Err(StormError::IrregularSpacing {
                gaps: spacing.gaps,
                first_row: spacing.first_gap_row.unwrap_or_default(),
            });
        }
        warn!(
            gaps = spacing.gaps,
            first_row = ?spacing.first_gap_row,
            "archive has irregular hourly steps; deltas assume fixed spacing"
        );
    }
    if spacing.unverified > 0 {
        if strict_spacing {
            return Err(StormError::UnverifiedSpacing {
                pairs: spacing.unverified,
            });
        }
        info!(pairs = spacing.unverified, "rows without a parseable timestamp");
    }

    let samples = build_samples(&observations, forecast_hours)?;
    info!(
        samples = samples.len(),
        skipped = samples.skipped().total(),
        forecast_hours,
        "built samples"
    );

    let grid = evaluate_grid(&samples, thresholds);

    Ok(RunOutcome {
        grid,
        records: observations.len(),
        skipped: samples.skipped(),
        spacing,
    })
}

/// Retrieves the archive (download or local file) and evaluates it.
pub fn run(options: &RunOptions) -> Result<RunOutcome, StormError> {
    if options.forecast_hours == 0 {
        return Err(StormError::InvalidForecast(options.forecast_hours));
    }

    let compressed = match &options.input {
        Some(path) => read_archive_file(path)?,
        None => {
            let client = reqwest::blocking::Client::new();
            fetch_station_archive(
                &client,
                &options.config.source.base_url,
                &options.config.source.station,
            )?
        }
    };

    let text = decompress_archive(&compressed)?;

    evaluate_archive(
        &text,
        options.forecast_hours,
        &options.config.thresholds,
        options.strict_spacing,
    )
}
