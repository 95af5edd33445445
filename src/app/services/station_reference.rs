//! Ground-station reference table (`Stations_ref.txt`)
//!
//! The table lists one station per block of `KEY = VALUE` lines:
//!
//! ```text
//! Name = Grasse
//! Longitude = 6.9216
//! Latitude = 43.7546
//! Altitude = 1323.0
//! ```
//!
//! Keys are matched case-insensitively and stations are kept in file order,
//! keyed by name.

use crate::app::models::GroundStationRecord;
use crate::app::services::file_kind::{FileCategory, FileKind};
use crate::app::services::path_validator::ValidatedPath;
use crate::app::services::record_formatter::RecordFormatter;
use crate::app::services::sectioned_reader::read_station_blocks;
use crate::{Error, Result};
use indexmap::IndexMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

/// Ground stations indexed by name
#[derive(Debug, Clone)]
pub struct GroundStationTable {
    path: ValidatedPath,
    stations: IndexMap<String, GroundStationRecord>,
}

impl GroundStationTable {
    /// Validate and load a `Stations_ref.txt` file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = ValidatedPath::new(path)?;
        FileKind::from_basename(path.basename())?.expect_category(FileCategory::StationsReference)?;

        let file = File::open(path.as_path()).map_err(|e| {
            Error::io(
                format!("Failed to open {}", path.as_path().display()),
                e,
            )
        })?;
        let stations = parse_ground_stations(BufReader::new(file))?;

        info!(
            "Loaded {} ground stations from {}",
            stations.len(),
            path.as_path().display()
        );

        Ok(Self { path, stations })
    }

    pub fn path(&self) -> &ValidatedPath {
        &self.path
    }

    /// All stations in file order
    pub fn stations(&self) -> &IndexMap<String, GroundStationRecord> {
        &self.stations
    }

    pub fn station(&self, name: &str) -> Option<&GroundStationRecord> {
        self.stations.get(name)
    }

    pub fn contains_station(&self, name: &str) -> bool {
        self.stations.contains_key(name)
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Station names in file order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.stations.keys().map(String::as_str)
    }

    /// Longitude in decimal degrees
    pub fn longitude(&self, name: &str) -> Option<f64> {
        self.station(name).map(|station| station.longitude)
    }

    /// Latitude in decimal degrees
    pub fn latitude(&self, name: &str) -> Option<f64> {
        self.station(name).map(|station| station.latitude)
    }

    /// Altitude in metres
    pub fn altitude(&self, name: &str) -> Option<f64> {
        self.station(name).map(|station| station.altitude)
    }

    /// Stations whose name contains `pattern`, ignoring case
    pub fn find_stations_by_name(&self, pattern: &str) -> Vec<&GroundStationRecord> {
        let pattern_lower = pattern.to_lowercase();
        self.stations
            .values()
            .filter(|station| station.name.to_lowercase().contains(&pattern_lower))
            .collect()
    }
}

/// Read and format station blocks from any reader
pub fn parse_ground_stations<R: BufRead>(
    reader: R,
) -> Result<IndexMap<String, GroundStationRecord>> {
    let blocks = read_station_blocks(reader)?;
    RecordFormatter::default().format_ground_stations(&blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::constants::filenames;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    const STATIONS: &str = "Name = Grasse
Longitude = 6.9216
Latitude = 43.7546
Altitude = 1323.0

NAME = Kourou
LONGITUDE = -52.8047
LATITUDE = 5.2515
ALTITUDE = 14.0
";

    fn write_table(dir: &TempDir, basename: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(basename);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_open_station_table() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, filenames::STATIONS_REF, STATIONS);

        let table = GroundStationTable::open(&path).unwrap();
        assert_eq!(table.station_count(), 2);
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["Grasse", "Kourou"]);
        assert_eq!(table.longitude("Grasse"), Some(6.9216));
        assert_eq!(table.latitude("Kourou"), Some(5.2515));
        assert_eq!(table.altitude("Kourou"), Some(14.0));
        assert!(table.contains_station("Grasse"));
        assert_eq!(table.station("Paris"), None);
        assert_eq!(table.longitude("Paris"), None);
    }

    #[test]
    fn test_find_stations_by_name() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, filenames::STATIONS_REF, STATIONS);
        let table = GroundStationTable::open(&path).unwrap();

        let found = table.find_stations_by_name("kour");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Kourou");
        assert_eq!(table.find_stations_by_name("").len(), 2);
    }

    #[test]
    fn test_blocks_without_blank_separator() {
        let content = "Name = A\nLongitude = 1\nLatitude = 2\nAltitude = 3\nName = B\nLongitude = 4\nLatitude = 5\nAltitude = 6\n";
        let stations = parse_ground_stations(Cursor::new(content)).unwrap();
        assert_eq!(stations.len(), 2);
        assert_eq!(stations["B"].latitude, 5.0);
    }

    #[test]
    fn test_wrong_basename_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, "stations.txt", STATIONS);
        let err = GroundStationTable::open(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let path = write_table(&dir, filenames::ORBIT_NUMBER, STATIONS);
        let err = GroundStationTable::open(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_missing_coordinate_rejected() {
        let dir = TempDir::new().unwrap();
        let content = STATIONS.replace("LATITUDE = 5.2515\n", "");
        let path = write_table(&dir, filenames::STATIONS_REF, &content);

        let err = GroundStationTable::open(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
    }

    #[test]
    fn test_out_of_range_latitude_rejected() {
        let content = STATIONS.replace("43.7546", "143.7546");
        let err = parse_ground_stations(Cursor::new(content)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_empty_table() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, filenames::STATIONS_REF, "");
        let table = GroundStationTable::open(&path).unwrap();
        assert_eq!(table.station_count(), 0);
    }
}
