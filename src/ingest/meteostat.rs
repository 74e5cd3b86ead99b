/// Meteostat hourly bulk archive client.
///
/// Each station's full hourly history is published as one gzip-compressed
/// CSV file:
///   <base_url>/<station>.csv.gz
///
/// Rows carry 14 comma-separated fields. Only a few are used here:
///   0  — date (YYYY-MM-DD)
///   1  — hour of day (0-23)
///   8  — wind speed (km/h)
///   12 — sea-level pressure (hPa)
/// Rows with any other field count are dropped without comment. Empty
/// fields are common (sensor outages) and become `None` readings.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use flate2::read::MultiGzDecoder;
use std::fs;
use std::io::Read;
use tracing::{debug, info};

use crate::model::{Observation, StormError};

pub const FIELD_COUNT: usize = 14;
pub const DATE_FIELD: usize = 0;
pub const HOUR_FIELD: usize = 1;
pub const WIND_SPEED_FIELD: usize = 8;
pub const PRESSURE_FIELD: usize = 12;

// ---------------------------------------------------------------------------
// Retrieval
// ---------------------------------------------------------------------------

/// Builds the archive URL for a station. A trailing slash on `base_url`
/// is not doubled.
pub fn archive_url(base_url: &str, station_id: &str) -> String {
    format!("{}/{}.csv.gz", base_url.trim_end_matches('/'), station_id)
}

/// Downloads the compressed archive for a station.
///
/// Blocks until the whole body is in memory. Any transport failure or
/// non-success status is fatal for the run; there is no retry.
pub fn fetch_station_archive(
    client: &reqwest::blocking::Client,
    base_url: &str,
    station_id: &str,
) -> Result<Vec<u8>, StormError> {
    let url = archive_url(base_url, station_id);
    info!(%url, "fetching station archive");

    let response = client.get(&url).send()?;

    if !response.status().is_success() {
        return Err(StormError::HttpStatus {
            url,
            status: response.status().as_u16(),
        });
    }

    let bytes = response.bytes()?.to_vec();
    info!(bytes = bytes.len(), "downloaded station archive");

    Ok(bytes)
}

/// Reads a previously downloaded `.csv.gz` archive from disk.
pub fn read_archive_file(path: &str) -> Result<Vec<u8>, StormError> {
    let bytes = fs::read(path).map_err(|source| StormError::Io {
        path: path.to_string(),
        source,
    })?;
    info!(path, bytes = bytes.len(), "read local station archive");
    Ok(bytes)
}

/// Gunzips an archive and checks that the result is ASCII text.
pub fn decompress_archive(compressed: &[u8]) -> Result<String, StormError> {
    let mut raw = Vec::new();
    MultiGzDecoder::new(compressed)
        .read_to_end(&mut raw)
        .map_err(StormError::Decompress)?;

    if let Some(offset) = raw.iter().position(|b| !b.is_ascii()) {
        return Err(StormError::Encoding { offset });
    }

    // ASCII is always valid UTF-8
    String::from_utf8(raw).map_err(|e| StormError::Encoding {
        offset: e.utf8_error().valid_up_to(),
    })
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parses a numeric field. Empty, non-numeric and non-finite values are
/// treated as missing.
pub fn parse_reading(field: &str) -> Option<f64> {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Combines the date and hour fields into a timestamp, if both are valid.
fn parse_timestamp(date: &str, hour: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    let hour = hour.trim().parse::<u32>().ok()?;
    date.and_hms_opt(hour, 0, 0)
}

/// Parses one archive line. Returns `None` for malformed rows (wrong field
/// count); individual bad readings only blank out that reading.
pub fn parse_record_line(line: &str) -> Option<Observation> {
    let line = line.trim_end_matches(['\r', '\n']);
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != FIELD_COUNT {
        return None;
    }

    Some(Observation {
        timestamp: parse_timestamp(fields[DATE_FIELD], fields[HOUR_FIELD]),
        wind_speed_kmh: parse_reading(fields[WIND_SPEED_FIELD]),
        pressure_hpa: parse_reading(fields[PRESSURE_FIELD]),
    })
}

/// Parses a decompressed archive into time-ordered observations.
///
/// Row order is preserved exactly; the sample builder relies on index
/// arithmetic over this sequence.
pub fn parse_records(text: &str) -> Vec<Observation> {
    let mut observations = Vec::new();
    let mut dropped = 0usize;

    for line in text.lines() {
        match parse_record_line(line) {
            Some(obs) => observations.push(obs),
            None => dropped += 1,
        }
    }

    info!(kept = observations.len(), dropped, "parsed station archive");
    observations
}

// ---------------------------------------------------------------------------
// Spacing audit
// ---------------------------------------------------------------------------

/// Result of checking that consecutive rows are exactly one hour apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpacingReport {
    /// Adjacent pairs with known timestamps not exactly one hour apart
    pub gaps: usize,
    /// Adjacent pairs where at least one timestamp was unparseable
    pub unverified: usize,
    /// Index of the earlier row of the first irregular pair
    pub first_gap_row: Option<usize>,
}

impl SpacingReport {
    pub fn is_regular(&self) -> bool {
        self.gaps == 0
    }
}

/// Counts irregular steps between consecutive observations.
///
/// Purely diagnostic: the sample builder keeps assuming hourly spacing
/// whatever this reports.
pub fn audit_hourly_spacing(observations: &[Observation]) -> SpacingReport {
    let mut report = SpacingReport::default();
    let one_hour = Duration::hours(1);

    for (i, pair) in observations.windows(2).enumerate() {
        match (pair[0].timestamp, pair[1].timestamp) {
            (Some(earlier), Some(later)) => {
                if later - earlier != one_hour {
                    debug!(row = i, %earlier, %later, "irregular hourly step");
                    report.gaps += 1;
                    report.first_gap_row.get_or_insert(i);
                }
            }
            _ => report.unverified += 1,
        }
    }

    report
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
