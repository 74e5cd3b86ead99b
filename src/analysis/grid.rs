/// Threshold grid evaluation.
///
/// Treats the storm rule as a binary classifier and scores it against the
/// observed wind. For every wind threshold `w` (ground truth) and pressure
/// threshold `p` (predictor):
///
///   label      = wind_delta > w
///   prediction = pressure_delta > p
///
/// Both comparisons are strict. The false-positive rate is taken over the
/// predicted-positive samples and the false-negative rate over the
/// predicted-negative samples, both as percentages. A rate whose
/// denominator is empty is `None` rather than NaN.
///
/// Row order follows the wind list and column order the pressure list
/// exactly as given; nothing is sorted or deduplicated.

use serde::Serialize;

use crate::analysis::samples::SampleSet;
use crate::config::ThresholdConfig;

/// Outcome of one (wind threshold, pressure threshold) combination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridCell {
    pub wind_threshold: f64,
    pub pressure_threshold: f64,
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
    /// Percentage of predicted-positive samples that were wrong
    pub fp_rate: Option<f64>,
    /// Percentage of predicted-negative samples that were wrong
    pub fn_rate: Option<f64>,
}

impl GridCell {
    pub fn predicted_positive(&self) -> usize {
        self.true_positives + self.false_positives
    }

    pub fn predicted_negative(&self) -> usize {
        self.true_negatives + self.false_negatives
    }
}

/// Full m x k result grid: one row per wind threshold, one column per
/// pressure threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdGrid {
    pub pressure_thresholds: Vec<f64>,
    pub wind_thresholds: Vec<f64>,
    pub sample_count: usize,
    pub rows: Vec<Vec<GridCell>>,
}

impl ThresholdGrid {
    pub fn cell(&self, row: usize, col: usize) -> Option<&GridCell> {
        self.rows.get(row)?.get(col)
    }
}

/// `100 * numerator / denominator`, or `None` when nothing was counted.
fn percentage(numerator: usize, denominator: usize) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64 * 100.0)
    }
}

/// Scores one threshold pair against precomputed labels.
fn score(
    labels: &[bool],
    pressure_deltas: &[f64],
    wind_threshold: f64,
    pressure_threshold: f64,
) -> GridCell {
    let mut cell = GridCell {
        wind_threshold,
        pressure_threshold,
        true_positives: 0,
        false_positives: 0,
        true_negatives: 0,
        false_negatives: 0,
        fp_rate: None,
        fn_rate: None,
    };

    for (&actual, &delta) in labels.iter().zip(pressure_deltas) {
        let predicted = delta > pressure_threshold;
        match (predicted, actual) {
            (true, true) => cell.true_positives += 1,
            (true, false) => cell.false_positives += 1,
            (false, false) => cell.true_negatives += 1,
            (false, true) => cell.false_negatives += 1,
        }
    }

    cell.fp_rate = percentage(cell.false_positives, cell.predicted_positive());
    cell.fn_rate = percentage(cell.false_negatives, cell.predicted_negative());
    cell
}

/// Evaluates every (wind, pressure) threshold combination.
pub fn evaluate_grid(samples: &SampleSet, thresholds: &ThresholdConfig) -> ThresholdGrid {
    let rows = thresholds
        .wind_deltas_kmh
        .iter()
        .map(|&wind_threshold| {
            let labels: Vec<bool> = samples
                .wind_deltas()
                .iter()
                .map(|&delta| delta > wind_threshold)
                .collect();

            thresholds
                .pressure_deltas_hpa
                .iter()
                .map(|&pressure_threshold| {
                    score(&labels, samples.pressure_deltas(), wind_threshold, pressure_threshold)
                })
                .collect()
        })
        .collect();

    ThresholdGrid {
        pressure_thresholds: thresholds.pressure_deltas_hpa.clone(),
        wind_thresholds: thresholds.wind_deltas_kmh.clone(),
        sample_count: samples.len(),
        rows,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
