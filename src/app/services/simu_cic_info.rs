//! Simulation-info table (`simu_cic_info.txt`)
//!
//! A `[Section]`-headed file describing the run: its name and time span,
//! the satellite, its initial orbital conditions and the ground stations
//! used. Unknown sections and fields are kept as text and stay reachable
//! through [`SimuCicInfo::section`].

use crate::app::models::{InfoSection, InfoValue, SimuCicInfoRecord};
use crate::app::services::file_kind::{FileCategory, FileKind};
use crate::app::services::path_validator::ValidatedPath;
use crate::app::services::record_formatter::RecordFormatter;
use crate::app::services::sectioned_reader::read_bracket_sections;
use crate::constants::{info_fields, info_sections};
use crate::{Error, Result};
use chrono::NaiveDateTime;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

/// Parsed simulation-info table
#[derive(Debug, Clone)]
pub struct SimuCicInfo {
    path: ValidatedPath,
    record: SimuCicInfoRecord,
}

impl SimuCicInfo {
    /// Validate and load a `simu_cic_info.txt` file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = ValidatedPath::new(path)?;
        FileKind::from_basename(path.basename())?.expect_category(FileCategory::SimulationInfo)?;

        let file = File::open(path.as_path()).map_err(|e| {
            Error::io(
                format!("Failed to open {}", path.as_path().display()),
                e,
            )
        })?;
        let record = parse_simu_cic_info(BufReader::new(file))?;

        info!(
            "Loaded {} simulation-info sections from {}",
            record.sections().len(),
            path.as_path().display()
        );

        Ok(Self { path, record })
    }

    pub fn path(&self) -> &ValidatedPath {
        &self.path
    }

    pub fn record(&self) -> &SimuCicInfoRecord {
        &self.record
    }

    /// Fields of any section; empty when the section is absent
    pub fn section(&self, name: &str) -> &InfoSection {
        self.record.section(name)
    }

    pub fn simulation_synthesis(&self) -> &InfoSection {
        self.section(info_sections::SIMULATION_SYNTHESIS)
    }

    pub fn simulation_name(&self) -> Result<&str> {
        self.text(info_sections::SIMULATION_SYNTHESIS, info_fields::SIMULATION_NAME)
    }

    pub fn simulation_start(&self) -> Result<NaiveDateTime> {
        self.timestamp(info_sections::SIMULATION_SYNTHESIS, info_fields::START_UTC)
    }

    pub fn simulation_stop(&self) -> Result<NaiveDateTime> {
        self.timestamp(info_sections::SIMULATION_SYNTHESIS, info_fields::END_UTC)
    }

    pub fn satellite_name(&self) -> Result<&str> {
        self.text(info_sections::SATELLITE_1, info_fields::SATELLITE_NAME)
    }

    pub fn initial_conditions(&self) -> &InfoSection {
        self.section(info_sections::INITIAL_CONDITIONS)
    }

    pub fn initial_conditions_date(&self) -> Result<NaiveDateTime> {
        self.timestamp(info_sections::INITIAL_CONDITIONS, info_fields::DATE_UTC)
    }

    /// Initial altitude in kilometres
    pub fn initial_altitude(&self) -> Result<f64> {
        self.initial_number(info_fields::ALTITUDE_KM)
    }

    pub fn initial_eccentricity(&self) -> Result<f64> {
        self.initial_number(info_fields::ECCENTRICITY)
    }

    /// Initial inclination in degrees
    pub fn initial_inclination(&self) -> Result<f64> {
        self.initial_number(info_fields::INCLINATION_DEG)
    }

    /// Initial argument of perigee in degrees
    pub fn initial_argument_of_perigee(&self) -> Result<f64> {
        self.initial_number(info_fields::ARGUMENT_OF_PERIGEE_DEG)
    }

    /// Mean local time of the ascending node, in hours
    pub fn initial_mltan(&self) -> Result<f64> {
        self.initial_number(info_fields::MLTAN_H)
    }

    /// Initial argument of latitude in degrees
    pub fn initial_argument_of_latitude(&self) -> Result<f64> {
        self.initial_number(info_fields::ARGUMENT_OF_LATITUDE_DEG)
    }

    /// Mean J2 orbital period in hours
    pub fn initial_mean_j2_orbital_period(&self) -> Result<f64> {
        self.initial_number(info_fields::MEAN_J2_ORBITAL_PERIOD_H)
    }

    /// Station names listed in the `Stations` section, in file order
    pub fn stations(&self) -> Vec<&str> {
        self.section(info_sections::STATIONS)
            .values()
            .filter_map(InfoValue::as_text)
            .collect()
    }

    fn field(&self, section: &str, field: &str) -> Result<&InfoValue> {
        self.record
            .value(section, field)
            .ok_or_else(|| Error::missing_field(field, format!("[{}]", section)))
    }

    fn text(&self, section: &str, field: &str) -> Result<&str> {
        self.field(section, field)?
            .as_text()
            .ok_or_else(|| Error::format(format!("[{}] {} is not text", section, field)))
    }

    fn timestamp(&self, section: &str, field: &str) -> Result<NaiveDateTime> {
        self.field(section, field)?
            .as_timestamp()
            .ok_or_else(|| Error::format(format!("[{}] {} is not a timestamp", section, field)))
    }

    fn initial_number(&self, field: &str) -> Result<f64> {
        let section = info_sections::INITIAL_CONDITIONS;
        self.field(section, field)?
            .as_number()
            .ok_or_else(|| Error::format(format!("[{}] {} is not a number", section, field)))
    }
}

/// Read and format a simulation-info table from any reader
pub fn parse_simu_cic_info<R: BufRead>(reader: R) -> Result<SimuCicInfoRecord> {
    let sections = read_bracket_sections(reader)?;
    RecordFormatter::default().format_simu_cic_info(&sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::constants::filenames;
    use chrono::NaiveDate;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    const INFO: &str = "[Simulation synthesis]
Simulation name = simu
Start (UTC) = 2021/01/01 00:00:00.000
End (UTC) = 2021/01/02 00:00:00.000

[Satellite 1]
Name = Sat

[Initial conditions]
Date (UTC) = 2021/01/01 00:00:00.000
Altitude (km) = 607.942
Eccentricity = 0.001
Inclination (deg) = 97.8
Argument of perigee (deg) = 90.0
Mean local time of ascending node (h) = 10.5
Argument of latitude (deg) = 0.0
Mean J2 orbital period (h) = 1.6

[Stations]
1 = Grasse
2 = Kourou
";

    fn open_info(content: &str) -> SimuCicInfo {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(filenames::SIMU_CIC_INFO);
        fs::write(&path, content).unwrap();
        SimuCicInfo::open(&path).unwrap()
    }

    fn jan(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 1, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_simulation_synthesis() {
        let info = open_info(INFO);
        assert_eq!(info.simulation_name().unwrap(), "simu");
        assert_eq!(info.simulation_start().unwrap(), jan(1));
        assert_eq!(info.simulation_stop().unwrap(), jan(2));
        assert_eq!(info.simulation_synthesis().len(), 3);
        assert_eq!(info.satellite_name().unwrap(), "Sat");
    }

    #[test]
    fn test_initial_conditions() {
        let info = open_info(INFO);
        assert_eq!(info.initial_conditions_date().unwrap(), jan(1));
        assert_eq!(info.initial_altitude().unwrap(), 607.942);
        assert_eq!(info.initial_eccentricity().unwrap(), 0.001);
        assert_eq!(info.initial_inclination().unwrap(), 97.8);
        assert_eq!(info.initial_argument_of_perigee().unwrap(), 90.0);
        assert_eq!(info.initial_mltan().unwrap(), 10.5);
        assert_eq!(info.initial_argument_of_latitude().unwrap(), 0.0);
        assert_eq!(info.initial_mean_j2_orbital_period().unwrap(), 1.6);
        assert_eq!(info.initial_conditions().len(), 8);
    }

    #[test]
    fn test_stations_in_file_order() {
        let info = open_info(INFO);
        assert_eq!(info.stations(), vec!["Grasse", "Kourou"]);
    }

    #[test]
    fn test_missing_section_is_empty() {
        let info = open_info("[Simulation synthesis]\nSimulation name = simu\n");
        assert!(info.section("Initial conditions").is_empty());
        assert!(info.stations().is_empty());

        let err = info.initial_altitude().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
        let err = info.simulation_start().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
    }

    #[test]
    fn test_bad_initial_condition_rejected() {
        let content = INFO.replace("Eccentricity = 0.001", "Eccentricity = low");
        let err = parse_simu_cic_info(Cursor::new(content)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_wrong_basename_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(filenames::STATIONS_REF);
        fs::write(&path, INFO).unwrap();

        let err = SimuCicInfo::open(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
