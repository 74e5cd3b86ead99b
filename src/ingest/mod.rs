/// Data-source clients.
///
/// - `meteostat` — Meteostat hourly bulk archive: download, gunzip, row parsing
/// - `fixtures` (test only) — representative archive rows
///
/// Other archive providers get their own file here rather than growing
/// `meteostat`.

pub mod meteostat;

#[cfg(test)]
pub(crate) mod fixtures;
