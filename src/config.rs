/// Evaluation configuration loader - parses storm_eval.toml
///
/// The threshold grid and the archive location are plain values handed to
/// the pipeline, never module-level state. Every field has a default, so
/// running without a config file reproduces the stock grid for Konstanz.

use serde::Deserialize;
use std::fs;

use crate::model::StormError;

pub const DEFAULT_BASE_URL: &str = "https://open.meteostat.net/hourly/";

/// Konstanz, Germany
pub const DEFAULT_STATION: &str = "10929";

/// Pressure drop over the last three hours (hPa). Values match the storm
/// alarm steps of a Garmin Instinct watch; 5.0 appears twice on purpose.
pub const DEFAULT_PRESSURE_DELTAS_HPA: [f64; 9] = [2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 5.0, 5.0, 6.0];

/// Rise in wind speed over the forecast window (km/h).
pub const DEFAULT_WIND_DELTAS_KMH: [f64; 10] =
    [5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0];

/// Root configuration structure for TOML parsing
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct EvaluationConfig {
    pub source: SourceConfig,
    pub thresholds: ThresholdConfig,
}

/// Where the hourly archive comes from
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub base_url: String,
    pub station: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            station: DEFAULT_STATION.to_string(),
        }
    }
}

/// Threshold grid, evaluated in declaration order (no sorting, duplicates kept)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    pub pressure_deltas_hpa: Vec<f64>,
    pub wind_deltas_kmh: Vec<f64>,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        ThresholdConfig {
            pressure_deltas_hpa: DEFAULT_PRESSURE_DELTAS_HPA.to_vec(),
            wind_deltas_kmh: DEFAULT_WIND_DELTAS_KMH.to_vec(),
        }
    }
}

impl EvaluationConfig {
    /// Parses a TOML document. Missing tables and keys fall back to defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, StormError> {
        Ok(toml::from_str(contents)?)
    }

    /// Rejects grids that cannot produce a meaningful report.
    pub fn validate(&self, origin: &str) -> Result<(), StormError> {
        let invalid = |message: String| StormError::Config {
            path: origin.to_string(),
            message,
        };

        if self.source.station.trim().is_empty() {
            return Err(invalid("source.station must not be empty".to_string()));
        }
        if self.source.base_url.trim().is_empty() {
            return Err(invalid("source.base_url must not be empty".to_string()));
        }

        let lists = [
            ("thresholds.pressure_deltas_hpa", &self.thresholds.pressure_deltas_hpa),
            ("thresholds.wind_deltas_kmh", &self.thresholds.wind_deltas_kmh),
        ];
        for (name, values) in lists {
            if values.is_empty() {
                return Err(invalid(format!("{} must list at least one threshold", name)));
            }
            if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
                return Err(invalid(format!("{} contains non-finite value {}", name, bad)));
            }
        }

        Ok(())
    }
}

/// Loads and validates an evaluation config file.
///
/// Unlike the registry files this is opt-in: callers without a `--config`
/// path use `EvaluationConfig::default()` directly.
pub fn load_config(path: &str) -> Result<EvaluationConfig, StormError> {
    let contents = fs::read_to_string(path).map_err(|source| StormError::Io {
        path: path.to_string(),
        source,
    })?;

    let config = EvaluationConfig::from_toml_str(&contents)?;
    config.validate(path)?;

    Ok(config)
}
