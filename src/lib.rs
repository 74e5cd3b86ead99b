/// storm_eval: offline evaluation of a pressure-drop storm alert rule.
///
/// Given a station's hourly history, measures how well "pressure fell by
/// more than P hPa over the last 3 hours" predicts "wind speed rises by
/// more than W km/h within the next N hours", across a grid of P and W.
///
/// # Module structure
///
/// ```text
/// storm_eval
/// ├── model     — shared data types (Observation, StormError)
/// ├── config    — threshold grid + archive source (storm_eval.toml)
/// ├── logging   — tracing subscriber setup for the binaries
/// ├── ingest
/// │   ├── meteostat — hourly bulk archive: download, gunzip, row parsing,
/// │   │               hourly spacing audit
/// │   └── fixtures (test only) — representative archive rows
/// ├── analysis
/// │   ├── samples — (pressure delta, wind delta) sample construction
/// │   └── grid    — false-positive / false-negative rates per threshold pair
/// ├── report    — text table and JSON rendering
/// └── pipeline  — archive → samples → grid for one run
/// ```

pub mod analysis;
pub mod config;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;
