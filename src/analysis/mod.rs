/// Offline evaluation of the pressure-drop storm rule.
///
/// Submodules:
/// - `samples` — derives (pressure delta, wind delta) pairs from hourly rows.
/// - `grid`    — scores the rule over a cross product of thresholds.

pub mod grid;
pub mod samples;
