//! Test utilities for satellite result file parsing
//!
//! Fixtures are written into a temporary directory under their real SIMU-CIC
//! basenames, since the file kind is derived from the name.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// Test modules
mod accessor_tests;

/// Build a complete satellite result file with the given comment, content tag and rows
pub fn sat_file_content(comment: &str, content: &str, rows: &[&str]) -> String {
    let mut text = format!(
        "CIC_MEM_VERS = 2.0
CREATION_DATE = 2021-06-23T09:52:26.000
ORIGINATOR = CNES

META_START

COMMENT = {comment}

OBJECT_NAME = Sat
OBJECT_ID = Sat
USER_DEFINED_PROTOCOL = CIC
USER_DEFINED_CONTENT = {content}
TIME_SYSTEM = UTC
START_TIME = 2021-06-22T00:00:00.000
STOP_TIME = 2022-06-22T00:00:00.000

META_STOP

"
    );
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    text
}

/// Distance file as written for ground station 1
pub fn distance_content() -> String {
    sat_file_content(
        "days (MJD), sec (UTC), distance (km)",
        "DISTANCE_GROUND_STATION_1",
        &[
            "59409 1020.00000 1096.411",
            "59409 1030.00000 1052.271",
            "59409 1040.00000 1010.944",
        ],
    )
}

/// Write `content` as `basename` inside `dir`
pub fn write_fixture(dir: &TempDir, basename: &str, content: &str) -> PathBuf {
    let path = dir.path().join(basename);
    fs::write(&path, content).unwrap();
    path
}

/// Install a test subscriber so `tracing` output shows up with `--nocapture`
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
