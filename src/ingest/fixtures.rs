/// Test fixtures: representative rows from the Meteostat hourly bulk archive.
///
/// Rows follow the archive's 14-field layout with the fields we don't use
/// filled in plausibly so the parser sees realistic input:
///   date,hour,temp,dwpt,rhum,prcp,snow,wdir,wspd,wpgt,-,-,pres,coco
///
/// Only `wspd` (field 8, km/h) and `pres` (field 12, hPa) feed the analysis.
/// The archive has no header row. Values were chosen so hand-computed deltas
/// are exact in f64.

/// Eight clean, strictly hourly rows of a pressure fall with building wind.
///
/// hour  pres    wspd
///   0   1015.0  10.0
///   1   1014.0  12.0
///   2   1012.5  11.0
///   3   1011.0  14.0
///   4   1009.0  20.0
///   5   1008.0  30.0
///   6   1008.5  25.0
///   7   1009.0  18.0
#[cfg(test)]
pub(crate) fn fixture_clean_archive() -> &'static str {
    "2021-02-01,0,4.2,1.0,80,0.0,,230,10.0,18.0,,,1015.0,2
2021-02-01,1,4.0,1.1,82,0.0,,235,12.0,20.5,,,1014.0,3
2021-02-01,2,3.9,1.2,84,0.1,,240,11.0,22.0,,,1012.5,7
2021-02-01,3,3.7,1.4,86,0.3,,245,14.0,27.8,,,1011.0,8
2021-02-01,4,3.5,1.6,89,0.8,,250,20.0,38.9,,,1009.0,8
2021-02-01,5,3.1,1.9,92,1.6,,255,30.0,55.6,,,1008.0,9
2021-02-01,6,2.8,1.7,90,0.9,,260,25.0,46.3,,,1008.5,8
2021-02-01,7,2.6,1.3,87,0.2,,265,18.0,33.3,,,1009.0,7
"
}

/// Five valid rows interleaved with a truncated row and a 15-field row.
#[cfg(test)]
pub(crate) fn fixture_archive_with_malformed_rows() -> &'static str {
    "2021-02-01,0,4.2,1.0,80,0.0,,230,10.0,18.0,,,1012.0,2
2021-02-01,1,4.0,1.1,82,0.0,,235,12.0,20.5,,,1011.0,3
2021-02-01,2,3.9,1.2
2021-02-01,2,3.9,1.2,84,0.1,,240,11.0,22.0,,,1010.0,7
2021-02-01,3,3.7,1.4,86,0.3,,245,14.0,27.8,,,1007.0,8
2021-02-01,4,3.5,1.6,89,0.8,,250,20.0,38.9,,,1006.0,8,extra
2021-02-01,4,3.5,1.6,89,0.8,,250,20.0,38.9,,,1006.5,8
"
}

/// Six rows where every anchor loses a reading it needs.
///
/// Row 1 has no pressure; rows 4 and 5 have no wind speed. With a one-hour
/// forecast the only anchors are rows 3 and 4: row 3's lookahead window is
/// all missing wind, and row 4 looks back to the missing pressure in row 1.
#[cfg(test)]
pub(crate) fn fixture_archive_with_missing_readings() -> &'static str {
    "2021-02-01,0,4.2,1.0,80,0.0,,230,5.0,9.0,,,1010.0,2
2021-02-01,1,4.0,1.1,82,0.0,,235,6.0,9.5,,,,3
2021-02-01,2,3.9,1.2,84,0.1,,240,7.0,11.0,,,1009.0,7
2021-02-01,3,3.7,1.4,86,0.3,,245,8.0,13.0,,,1008.0,8
2021-02-01,4,3.5,1.6,89,0.8,,250,,,,,1007.0,8
2021-02-01,5,3.1,1.9,92,1.6,,255,---,,,,1006.0,9
"
}

/// Hourly rows with 03:00 missing between rows 2 and 3.
#[cfg(test)]
pub(crate) fn fixture_archive_with_gap() -> &'static str {
    "2021-02-01,0,4.2,1.0,80,0.0,,230,10.0,18.0,,,1015.0,2
2021-02-01,1,4.0,1.1,82,0.0,,235,12.0,20.5,,,1014.0,3
2021-02-01,2,3.9,1.2,84,0.1,,240,11.0,22.0,,,1012.5,7
2021-02-01,4,3.5,1.6,89,0.8,,250,20.0,38.9,,,1009.0,8
2021-02-01,5,3.1,1.9,92,1.6,,255,30.0,55.6,,,1008.0,9
"
}
