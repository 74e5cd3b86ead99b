/// Report rendering for a finished threshold grid.
///
/// The text table is tab-separated for terminal viewing:
///
/// ```text
/// Pressure delta in 3h:	2.0		2.5		...
///                      	fp/fn		fp/fn		...
/// Wind 5.0 km/h delta:	41.2/12.0	38.9/13.1	...
/// ```
///
/// Header cells are joined with two tabs so they line up over the wider
/// `fp/fn` cells below. Undefined rates print as `na`, which keeps the
/// `/` separator unambiguous.

use serde::Serialize;

use crate::analysis::grid::{GridCell, ThresholdGrid};
use crate::analysis::samples::SkipCounts;
use crate::model::StormError;

pub const UNDEFINED_RATE: &str = "na";

const PRESSURE_HEADER: &str = "Pressure delta in 3h:";

fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(value) => format!("{:.1}", value),
        None => UNDEFINED_RATE.to_string(),
    }
}

fn format_cell(cell: &GridCell) -> String {
    format!("{}/{}", format_rate(cell.fp_rate), format_rate(cell.fn_rate))
}

/// Renders the grid as the tab-separated text table.
pub fn render_table(grid: &ThresholdGrid) -> String {
    let mut out = String::new();

    let thresholds: Vec<String> = grid
        .pressure_thresholds
        .iter()
        .map(|p| format!("{:.1}", p))
        .collect();
    out.push_str(&format!("{}\t{}\n", PRESSURE_HEADER, thresholds.join("\t\t")));

    let labels = vec!["fp/fn"; grid.pressure_thresholds.len()];
    out.push_str(&format!(
        "{}\t{}\n",
        " ".repeat(PRESSURE_HEADER.len()),
        labels.join("\t\t")
    ));

    for (wind_threshold, row) in grid.wind_thresholds.iter().zip(&grid.rows) {
        let cells: Vec<String> = row.iter().map(format_cell).collect();
        out.push_str(&format!(
            "Wind {:.1} km/h delta:\t{}\n",
            wind_threshold,
            cells.join("\t")
        ));
    }

    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    station: &'a str,
    forecast_hours: usize,
    skipped_anchors: SkipCounts,
    #[serde(flatten)]
    grid: &'a ThresholdGrid,
}

/// Renders the grid plus run metadata as pretty-printed JSON. Undefined
/// rates are `null`.
pub fn render_json(
    grid: &ThresholdGrid,
    station: &str,
    forecast_hours: usize,
    skipped_anchors: SkipCounts,
) -> Result<String, StormError> {
    let report = JsonReport {
        station,
        forecast_hours,
        skipped_anchors,
        grid,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
