/// Integration tests for the archive → report pipeline
///
/// These tests verify:
/// 1. A gzip archive written to disk goes through `run` end to end
/// 2. The text report has the expected header, rows and rate cells
/// 3. Missing data shrinks the sample count instead of failing the run
/// 4. Structural failures surface as errors, never as an empty report
///
/// No network access: archives are gzipped in memory from the rows below.
///
/// Run with: cargo test --test pipeline_integration

use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use storm_eval::config::{EvaluationConfig, ThresholdConfig};
use storm_eval::ingest::meteostat::decompress_archive;
use storm_eval::model::StormError;
use storm_eval::pipeline::{evaluate_archive, run, RunOptions};
use storm_eval::report::{render_json, render_table};

// Twelve hourly rows (Konstanz, Feb 2021 shape) with a storm passing through:
// pressure falls ~6 hPa over hours 2-6 while wind ramps from 9 to 48 km/h.
// Also carries a header-like malformed line that must be dropped.
const TEST_ARCHIVE: &str = "date,hour,temp,dwpt,rhum,prcp,snow,wdir,wspd,wpgt,pres,tsun,coco
2021-02-01,0,4.2,1.0,80,0.0,,230,9.0,18.0,,,1016.0,2
2021-02-01,1,4.0,1.1,82,0.0,,235,10.0,20.5,,,1015.5,3
2021-02-01,2,3.9,1.2,84,0.1,,240,11.0,22.0,,,1015.0,7
2021-02-01,3,3.7,1.4,86,0.3,,245,13.0,27.8,,,1013.5,8
2021-02-01,4,3.5,1.6,89,0.8,,250,18.0,38.9,,,1011.5,8
2021-02-01,5,3.1,1.9,92,1.6,,255,29.0,55.6,,,1010.0,9
2021-02-01,6,2.8,1.7,90,0.9,,260,48.0,46.3,,,1009.0,8
2021-02-01,7,2.6,1.3,87,0.2,,265,35.0,33.3,,,1009.5,7
2021-02-01,8,2.5,1.2,85,0.0,,270,22.0,30.0,,,1010.5,3
2021-02-01,9,2.4,1.0,83,0.0,,270,15.0,25.0,,,1011.5,2
2021-02-01,10,2.4,0.9,81,0.0,,275,12.0,20.0,,,1012.0,2
2021-02-01,11,2.3,0.8,80,0.0,,280,10.0,18.0,,,1012.5,2
";

fn gzip(text: &str) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes()).expect("gzip write");
    encoder.finish().expect("gzip finish")
}

fn write_archive(name: &str, text: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "storm_eval_{}_{}.csv.gz",
        name,
        std::process::id()
    ));
    fs::write(&path, gzip(text)).expect("write temp archive");
    path
}

#[test]
fn test_run_from_local_archive() {
    let path = write_archive("run_local", TEST_ARCHIVE);

    let mut options = RunOptions::new(EvaluationConfig::default(), 1);
    options.input = Some(path.to_string_lossy().into_owned());
    options.strict_spacing = true;

    let outcome = run(&options).expect("local archive should evaluate");
    fs::remove_file(&path).ok();

    // Header line is dropped: 14 fields expected, it has 13
    assert_eq!(outcome.records, 12);
    // Anchors 3..11
    assert_eq!(outcome.grid.sample_count, 8);
    assert_eq!(outcome.skipped.total(), 0);
    assert!(outcome.spacing.is_regular());
}

#[test]
fn test_text_report_shape() {
    let text = decompress_archive(&gzip(TEST_ARCHIVE)).unwrap();
    let outcome = evaluate_archive(&text, 3, &ThresholdConfig::default(), false).unwrap();
    let table = render_table(&outcome.grid);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 12, "2 header lines + 10 wind rows");
    assert_eq!(
        lines[0],
        "Pressure delta in 3h:\t2.0\t\t2.5\t\t3.0\t\t3.5\t\t4.0\t\t4.5\t\t5.0\t\t5.0\t\t6.0"
    );
    assert!(lines[1].trim_start().starts_with("fp/fn"));
    assert_eq!(lines[1].matches("fp/fn").count(), 9);
    assert!(lines[2].starts_with("Wind 5.0 km/h delta:\t"));
    assert!(lines[11].starts_with("Wind 50.0 km/h delta:\t"));
}

#[test]
fn test_storm_anchor_is_predicted() {
    // Anchor 5: pressure 1015.0 -> 1010.0 (delta 5.0), wind 29 -> 48 (delta 19.0)
    let thresholds = ThresholdConfig {
        pressure_deltas_hpa: vec![4.5],
        wind_deltas_kmh: vec![15.0],
    };
    let text = decompress_archive(&gzip(TEST_ARCHIVE)).unwrap();
    let outcome = evaluate_archive(&text, 1, &thresholds, false).unwrap();
    let cell = outcome.grid.cell(0, 0).unwrap();

    assert_eq!(cell.true_positives, 1, "the storm hour is caught");
    assert_eq!(cell.false_negatives, 0);
    assert_eq!(cell.fp_rate, Some(0.0));
    assert_eq!(cell.fn_rate, Some(0.0));
}

#[test]
fn test_threshold_tie_from_one_decimal_readings_is_negative() {
    // 1024.4 -> 1019.9 is a 4.5 hPa drop and 20.9 -> 25.9 a 5.0 km/h rise,
    // both equal to their thresholds, so neither prediction nor label fires.
    let text = "\
2021-03-01,0,5.0,1.0,80,0.0,,230,20.9,30.0,,,1024.4,2
2021-03-01,1,5.0,1.0,80,0.0,,230,20.9,30.0,,,1024.4,2
2021-03-01,2,5.0,1.0,80,0.0,,230,20.9,30.0,,,1024.4,2
2021-03-01,3,5.0,1.0,80,0.0,,230,20.9,30.0,,,1019.9,2
2021-03-01,4,5.0,1.0,80,0.0,,230,25.9,30.0,,,1019.9,2
";
    let thresholds = ThresholdConfig {
        pressure_deltas_hpa: vec![4.5],
        wind_deltas_kmh: vec![5.0],
    };
    let outcome = evaluate_archive(text, 1, &thresholds, true).unwrap();
    let cell = outcome.grid.cell(0, 0).unwrap();

    assert_eq!(outcome.grid.sample_count, 1);
    assert_eq!(cell.predicted_positive(), 0, "a delta equal to the threshold is not positive");
    assert_eq!(cell.true_negatives, 1, "a wind rise equal to the threshold is not a storm");
}

#[test]
fn test_missing_lookahead_reduces_sample_count() {
    // Blank the wind at hour 7: anchor 6 loses its whole 1h window and
    // anchor 7 loses its current wind reading.
    let holed = TEST_ARCHIVE.replace(
        "2021-02-01,7,2.6,1.3,87,0.2,,265,35.0,",
        "2021-02-01,7,2.6,1.3,87,0.2,,265,,",
    );
    let clean = evaluate_archive(TEST_ARCHIVE, 1, &ThresholdConfig::default(), false).unwrap();
    let missing = evaluate_archive(&holed, 1, &ThresholdConfig::default(), false).unwrap();

    assert_eq!(missing.records, clean.records);
    assert_eq!(missing.grid.sample_count, clean.grid.sample_count - 2);
    assert_eq!(missing.skipped.empty_window, 1);
    assert_eq!(missing.skipped.missing_wind, 1);
}

#[test]
fn test_json_report_round_trips_through_serde() {
    let outcome = evaluate_archive(TEST_ARCHIVE, 2, &ThresholdConfig::default(), false).unwrap();
    let json = render_json(&outcome.grid, "10929", 2, outcome.skipped).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["rows"].as_array().unwrap().len(), 10);
    assert_eq!(value["rows"][0].as_array().unwrap().len(), 9);
    assert_eq!(value["sample_count"], 7);
}

#[test]
fn test_history_too_short_is_fatal() {
    let short: String = TEST_ARCHIVE.lines().take(4).map(|l| format!("{}\n", l)).collect();
    let result = evaluate_archive(&short, 1, &ThresholdConfig::default(), false);
    assert!(matches!(result, Err(StormError::InsufficientData { records: 3, .. })));
}

#[test]
fn test_corrupt_archive_is_fatal() {
    let path = std::env::temp_dir().join(format!("storm_eval_corrupt_{}.csv.gz", std::process::id()));
    fs::write(&path, TEST_ARCHIVE).unwrap();

    let mut options = RunOptions::new(EvaluationConfig::default(), 1);
    options.input = Some(path.to_string_lossy().into_owned());
    let result = run(&options);
    fs::remove_file(&path).ok();

    assert!(matches!(result, Err(StormError::Decompress(_))));
}
