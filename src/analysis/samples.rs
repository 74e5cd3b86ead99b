/// Sample construction: turns an hourly observation sequence into paired
/// (pressure delta, wind delta) samples.
///
/// For each anchor row `i`:
///   pressure_delta = pressure[i - 3] - pressure[i]        (positive = falling)
///   wind_delta     = max(wind[i+1 ..= i+forecast]) - wind[i] (positive = rising)
///
/// Anchors run from `LOOKBACK_HOURS` up to (not including)
/// `len - forecast_hours`, so every window lies inside the sequence.
/// Rows are assumed to be exactly one hour apart; no timestamp is consulted.
///
/// An anchor contributes a sample only when both deltas can be computed.
/// Inside the lookahead window, missing wind readings are skipped for the
/// maximum; if the whole window is missing the anchor is skipped.
///
/// Archive readings carry one decimal, so deltas are snapped to tenths.
/// Without that, 1024.4 - 1019.9 comes out a hair above 4.5 and a tie with
/// the threshold would count as a positive prediction.

use serde::Serialize;
use tracing::debug;

use crate::model::{Observation, StormError};

/// Pressure tendency is measured over the last three hours.
pub const LOOKBACK_HOURS: usize = 3;

/// Resolution of the archive readings (one decimal).
const TENTHS_PER_UNIT: f64 = 10.0;

/// Difference of two readings, rounded to the archive resolution.
fn reading_delta(from: f64, to: f64) -> f64 {
    ((from - to) * TENTHS_PER_UNIT).round() / TENTHS_PER_UNIT
}

/// Why anchors were dropped, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SkipCounts {
    /// Pressure missing at the anchor or three hours earlier
    pub missing_pressure: usize,
    /// Wind speed missing at the anchor itself
    pub missing_wind: usize,
    /// No valid wind reading anywhere in the lookahead window
    pub empty_window: usize,
}

impl SkipCounts {
    pub fn total(&self) -> usize {
        self.missing_pressure + self.missing_wind + self.empty_window
    }
}

/// Two parallel, equal-length delta sequences. Index `j` of both belongs to
/// the same anchor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleSet {
    pressure_deltas: Vec<f64>,
    wind_deltas: Vec<f64>,
    skipped: SkipCounts,
}

impl SampleSet {
    /// Builds a set from already-computed (pressure_delta, wind_delta) pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (pressure_deltas, wind_deltas) = pairs.into_iter().unzip();
        SampleSet {
            pressure_deltas,
            wind_deltas,
            skipped: SkipCounts::default(),
        }
    }

    fn push(&mut self, pressure_delta: f64, wind_delta: f64) {
        self.pressure_deltas.push(pressure_delta);
        self.wind_deltas.push(wind_delta);
    }

    pub fn pressure_deltas(&self) -> &[f64] {
        &self.pressure_deltas
    }

    pub fn wind_deltas(&self) -> &[f64] {
        &self.wind_deltas
    }

    pub fn len(&self) -> usize {
        self.pressure_deltas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pressure_deltas.is_empty()
    }

    pub fn skipped(&self) -> SkipCounts {
        self.skipped
    }

    /// Iterates (pressure_delta, wind_delta) pairs in anchor order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.pressure_deltas
            .iter()
            .copied()
            .zip(self.wind_deltas.iter().copied())
    }
}

/// Pressure three hours before `anchor` minus pressure at `anchor`.
fn pressure_delta(observations: &[Observation], anchor: usize) -> Option<f64> {
    let earlier = observations[anchor - LOOKBACK_HOURS].pressure_hpa?;
    let now = observations[anchor].pressure_hpa?;
    Some(reading_delta(earlier, now))
}

/// Peak wind over `anchor+1 ..= anchor+forecast_hours`, ignoring missing
/// readings. `None` if the window has no valid reading at all.
fn window_peak_wind(
    observations: &[Observation],
    anchor: usize,
    forecast_hours: usize,
) -> Option<f64> {
    observations[anchor + 1..=anchor + forecast_hours]
        .iter()
        .filter_map(|obs| obs.wind_speed_kmh)
        .fold(None, |peak: Option<f64>, wind| {
            Some(peak.map_or(wind, |p| p.max(wind)))
        })
}

/// Derives the paired samples for one forecast horizon.
///
/// # Errors
/// - `InvalidForecast` if `forecast_hours` is zero
/// - `InsufficientData` if no anchor yields a sample (too few rows, or
///   every candidate anchor is missing data)
pub fn build_samples(
    observations: &[Observation],
    forecast_hours: usize,
) -> Result<SampleSet, StormError> {
    if forecast_hours == 0 {
        return Err(StormError::InvalidForecast(forecast_hours));
    }

    let mut samples = SampleSet::default();
    let end = observations.len().saturating_sub(forecast_hours);

    for anchor in LOOKBACK_HOURS..end {
        let Some(p_delta) = pressure_delta(observations, anchor) else {
            samples.skipped.missing_pressure += 1;
            continue;
        };

        let Some(peak) = window_peak_wind(observations, anchor, forecast_hours) else {
            samples.skipped.empty_window += 1;
            continue;
        };

        let Some(current) = observations[anchor].wind_speed_kmh else {
            samples.skipped.missing_wind += 1;
            continue;
        };

        samples.push(p_delta, reading_delta(peak, current));
    }

    debug!(
        samples = samples.len(),
        skipped = samples.skipped.total(),
        missing_pressure = samples.skipped.missing_pressure,
        missing_wind = samples.skipped.missing_wind,
        empty_window = samples.skipped.empty_window,
        "built samples"
    );

    if samples.is_empty() {
        return Err(StormError::InsufficientData {
            records: observations.len(),
            forecast_hours,
        });
    }

    Ok(samples)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
