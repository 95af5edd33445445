//! Tests for the per-kind accessors

use super::super::SatFileParser;
use super::super::accessors::{
    OrbitNumber, SatAltitude, SatDistanceToGroundStation, SatEclipse, SatGeographicalCoordinates,
    SatPosition, SatVisibility,
};
use super::{distance_content, sat_file_content, write_fixture};
use crate::app::services::file_kind::{FileCategory, FileKind};
use crate::constants::filenames;
use crate::ErrorKind;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "{} is not close to {}",
        actual,
        expected
    );
}

#[test]
fn test_distance_in_metres() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, filenames::DISTANCE_GROUND_STATION_1, &distance_content());

    let distances = SatDistanceToGroundStation::open(&path).unwrap();
    assert_close(distances.distance_m(0).unwrap(), 1_096_411.0);
    assert_eq!(distances.distance_m(3), None);
    // Generic getters through Deref
    assert_eq!(distances.len(), 3);
    assert_eq!(distances.comment(), ["Date", "distance (km)"]);
}

#[test]
fn test_distance_accepts_second_ground_station() {
    let dir = TempDir::new().unwrap();
    let content = distance_content().replace("GROUND_STATION_1", "GROUND_STATION_2");
    let path = write_fixture(&dir, filenames::DISTANCE_GROUND_STATION_2, &content);

    let distances = SatDistanceToGroundStation::open(&path).unwrap();
    assert_eq!(distances.kind().ground_station(), Some(2));
}

#[test]
fn test_orbit_number() {
    let dir = TempDir::new().unwrap();
    let content = sat_file_content(
        "days (MJD), sec (UTC), orbit number",
        "ORBIT_NUMBER",
        &["59409 0.00000 1.000", "59409 6000.00000 2.000"],
    );
    let path = write_fixture(&dir, filenames::ORBIT_NUMBER, &content);

    let orbits = OrbitNumber::open(&path).unwrap();
    assert_eq!(orbits.orbit_number(0), Some(1));
    assert_eq!(orbits.orbit_number(1), Some(2));
    assert_eq!(orbits.orbit_number(2), None);
}

#[test]
fn test_orbit_number_rejects_non_finite_values() {
    let dir = TempDir::new().unwrap();
    let content = sat_file_content(
        "days (MJD), sec (UTC), orbit number",
        "ORBIT_NUMBER",
        &[
            "59409 0.00000 nan",
            "59409 10.00000 inf",
            "59409 20.00000 -inf",
            "59409 30.00000 1e300",
            "59409 40.00000 -3.7",
        ],
    );
    let path = write_fixture(&dir, filenames::ORBIT_NUMBER, &content);

    let orbits = OrbitNumber::open(&path).unwrap();
    assert_eq!(orbits.orbit_number(0), None);
    assert_eq!(orbits.orbit_number(1), None);
    assert_eq!(orbits.orbit_number(2), None);
    assert_eq!(orbits.orbit_number(3), None);
    assert_eq!(orbits.orbit_number(4), Some(-3));
}

type Opener = fn(&Path) -> Option<ErrorKind>;

/// Every wrapper with the category it accepts
fn openers() -> [(FileCategory, Opener); 7] {
    [
        (FileCategory::OrbitNumber, |p| OrbitNumber::open(p).err().map(|e| e.kind())),
        (FileCategory::Direction, |p| SatPosition::open(p).err().map(|e| e.kind())),
        (FileCategory::Visibility, |p| SatVisibility::open(p).err().map(|e| e.kind())),
        (FileCategory::Distance, |p| {
            SatDistanceToGroundStation::open(p).err().map(|e| e.kind())
        }),
        (FileCategory::Altitude, |p| SatAltitude::open(p).err().map(|e| e.kind())),
        (FileCategory::Eclipse, |p| SatEclipse::open(p).err().map(|e| e.kind())),
        (FileCategory::GeographicalCoordinates, |p| {
            SatGeographicalCoordinates::open(p).err().map(|e| e.kind())
        }),
    ]
}

#[test]
fn test_every_other_kind_rejected_before_reading() {
    let dir = TempDir::new().unwrap();

    for kind in FileKind::ALL {
        // Empty and malformed content must not change the outcome
        for content in ["", "COMMENT = broken\nMETA_STOP\nnot numbers\n"] {
            let path = write_fixture(&dir, kind.basename(), content);

            for (category, open) in openers() {
                if kind.category() == category {
                    continue;
                }
                assert_eq!(
                    open(&path),
                    Some(ErrorKind::InvalidArgument),
                    "{} opened as {:?}",
                    kind,
                    category
                );
            }
        }
    }
}

#[test]
fn test_wrong_kind_rejected() {
    let dir = TempDir::new().unwrap();
    let content = sat_file_content(
        "days (MJD), sec (UTC), eclipse (%)",
        "SATELLITE_ECLIPSE",
        &["59409 0.00000 100.0"],
    );
    let path = write_fixture(&dir, filenames::ECLIPSE, &content);

    let err = OrbitNumber::open(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let parser = SatFileParser::open(&path).unwrap();
    let err = SatAltitude::from_parser(parser.clone()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let eclipse = SatEclipse::from_parser(parser).unwrap();
    assert_eq!(eclipse.eclipse(0), Some(100.0));
}

#[test]
fn test_position_columns() {
    let dir = TempDir::new().unwrap();
    let content = sat_file_content(
        "days (MJD), sec (UTC), azimuth (deg), elevation (deg)",
        "SATELLITE_DIRECTION",
        &["59409 0.00000 123.45 -12.5", "59409 10.00000 124.00 -11.0"],
    );
    let path = write_fixture(&dir, filenames::DIRECTION_GROUND_STATION_1, &content);

    let position = SatPosition::open(&path).unwrap();
    assert_eq!(position.azimuth(0), Some(123.45));
    assert_eq!(position.elevation(0), Some(-12.5));
    assert_eq!(position.elevation(1), Some(-11.0));
    assert_eq!(position.azimuth(2), None);
    assert_eq!(
        position.comment(),
        ["Date", "azimuth (deg)", "elevation (deg)"]
    );
}

#[test]
fn test_visibility_flag() {
    let dir = TempDir::new().unwrap();
    let content = sat_file_content(
        "days (MJD), sec (UTC), visibility",
        "GEOMETRICAL_VISIBILITY",
        &["59409 0.00000 0", "59409 10.00000 1"],
    );
    let path = write_fixture(&dir, filenames::VISIBILITY_GROUND_STATION_1, &content);

    let visibility = SatVisibility::open(&path).unwrap();
    assert_eq!(visibility.visibility(1), Some(1.0));
    assert_eq!(visibility.is_visible(0), Some(false));
    assert_eq!(visibility.is_visible(1), Some(true));
}

#[test]
fn test_altitude_in_metres() {
    let dir = TempDir::new().unwrap();
    let content = sat_file_content(
        "days (MJD), sec (UTC), altitude (km)",
        "SATELLITE_ALTITUDE",
        &["59409 0.00000 607.942"],
    );
    let path = write_fixture(&dir, filenames::ALTITUDE, &content);

    let altitude = SatAltitude::open(&path).unwrap();
    assert_close(altitude.altitude_m(0).unwrap(), 607_942.0);
}

#[test]
fn test_geographical_coordinates() {
    let dir = TempDir::new().unwrap();
    let content = sat_file_content(
        "days (MJD), sec (UTC), longitude (deg), latitude (deg)",
        "GEOGRAPHICAL_COORDINATES",
        &["59409 0.00000 6.9216 43.7546"],
    );
    let path = write_fixture(&dir, filenames::GEOGRAPHICAL_COORDINATES, &content);

    let coordinates = SatGeographicalCoordinates::open(&path).unwrap();
    assert_eq!(coordinates.longitude(0), Some(6.9216));
    assert_eq!(coordinates.latitude(0), Some(43.7546));

    let inner = coordinates.into_inner();
    assert_eq!(inner.len(), 1);
}

#[test]
fn test_file_released_after_construction() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, filenames::DISTANCE_GROUND_STATION_1, &distance_content());

    let distances = SatDistanceToGroundStation::open(&path).unwrap();
    fs::remove_file(&path).unwrap();

    // Data is owned; nothing is read lazily from disk
    assert_close(distances.distance_m(2).unwrap(), 1_010_944.0);
}
