/// Shared data types for the storm-alert evaluation harness.
///
/// `Observation` is one hourly row from a station archive, reduced to the
/// two readings the rule cares about. `StormError` is the single error type
/// returned by every fallible library function.

use chrono::NaiveDateTime;
use thiserror::Error;

/// One hourly observation from the record source.
///
/// Readings are `None` when the archive field was empty or unparseable.
/// Position in the containing slice is the only notion of time used by the
/// sample builder; `timestamp` exists for the spacing audit.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub timestamp: Option<NaiveDateTime>,
    /// Wind speed in km/h
    pub wind_speed_kmh: Option<f64>,
    /// Pressure in hPa
    pub pressure_hpa: Option<f64>,
}

impl Observation {
    pub fn new(pressure_hpa: Option<f64>, wind_speed_kmh: Option<f64>) -> Self {
        Observation {
            timestamp: None,
            wind_speed_kmh,
            pressure_hpa,
        }
    }
}

/// Errors that abort an evaluation run.
///
/// Per-row and per-sample problems never show up here; those are dropped
/// where they occur.
#[derive(Debug, Error)]
pub enum StormError {
    #[error("failed to download station archive: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("archive request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decompress station archive: {0}")]
    Decompress(#[source] std::io::Error),

    #[error("station archive is not ASCII text (first bad byte at offset {offset})")]
    Encoding { offset: usize },

    #[error("invalid configuration in {path}: {message}")]
    Config { path: String, message: String },

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("forecast horizon must be at least 1 hour, got {0}")]
    InvalidForecast(usize),

    #[error(
        "station has insufficient history: {records} usable records produced no samples \
         with a 3h lookback and {forecast_hours}h forecast"
    )]
    InsufficientData { records: usize, forecast_hours: usize },

    #[error("archive is not evenly hourly: {gaps} irregular step(s), first after row {first_row}")]
    IrregularSpacing { gaps: usize, first_row: usize },

    #[error("cannot check hourly spacing: {pairs} adjacent row pair(s) lack a parseable date and hour")]
    UnverifiedSpacing { pairs: usize },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
