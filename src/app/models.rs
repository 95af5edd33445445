//! Data models for SIMU-CIC processing
//!
//! This module contains the core data structures produced by the parsers:
//! raw and formatted header metadata, time-stamped result rows, ground-station
//! records and the section-oriented simulation-info record.
//!
//! Two kinds of absolute time coexist here. Header dates (`CREATION_DATE`,
//! `START_TIME`, `STOP_TIME`) and simulation-info dates are naive
//! [`NaiveDateTime`] values, exactly as written in the file. Row timestamps
//! are computed from MJD and are anchored to UTC as [`DateTime<Utc>`]. Compare
//! them through [`NaiveDateTime::and_utc`] when needed.

use crate::{Error, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

// =============================================================================
// Satellite Result Files
// =============================================================================

/// Raw header of a satellite result file: trimmed key to trimmed value,
/// in file order
pub type MetadataBlock = IndexMap<String, String>;

/// One data line split on whitespace, before numeric conversion
pub type RawRow = Vec<String>;

/// Header metadata with the recognized keys converted to typed values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedMetadata {
    /// Column labels; the two raw time columns are collapsed into `"Date"`
    pub comment: Vec<String>,

    /// File creation date (naive)
    pub creation_date: NaiveDateTime,

    /// Simulation start (naive)
    pub start_time: NaiveDateTime,

    /// Simulation stop (naive)
    pub stop_time: NaiveDateTime,

    /// Every header entry as read, in file order
    pub raw: MetadataBlock,
}

impl FormattedMetadata {
    /// Raw string value of a header key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.raw.get(key).map(String::as_str)
    }
}

/// A single time-stamped data row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResultRow {
    /// MJD day + seconds-of-day, UTC-anchored
    pub timestamp: DateTime<Utc>,

    /// Remaining numeric columns in file order
    pub values: Vec<f64>,
}

impl SimulationResultRow {
    pub fn new(timestamp: DateTime<Utc>, values: Vec<f64>) -> Self {
        Self { timestamp, values }
    }

    /// Value column by zero-based index (0 is the first column after the time)
    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }
}

/// Formatted header plus every data row of one satellite result file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationData {
    #[serde(flatten)]
    pub metadata: FormattedMetadata,

    #[serde(rename = "SIMULATION_RESULTS")]
    pub results: Vec<SimulationResultRow>,
}

// =============================================================================
// Ground-Station Reference Table
// =============================================================================

/// A ground station as listed in the reference table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundStationRecord {
    /// Station name, also the lookup key
    pub name: String,

    /// Longitude in decimal degrees
    pub longitude: f64,

    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Altitude above the reference ellipsoid in metres
    pub altitude: f64,
}

impl GroundStationRecord {
    /// Create a new record with validation
    pub fn new(name: String, longitude: f64, latitude: f64, altitude: f64) -> Result<Self> {
        let record = Self {
            name,
            longitude,
            latitude,
            altitude,
        };

        record.validate()?;
        Ok(record)
    }

    /// Validate coordinates and name
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::format("Ground station name cannot be empty"));
        }

        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(Error::format(format!(
                "Invalid latitude {} for station '{}': must be between -90 and 90 degrees",
                self.latitude, self.name
            )));
        }

        // SIMU-CIC accepts both signed and 0..360 longitudes
        if !(-180.0..=360.0).contains(&self.longitude) {
            return Err(Error::format(format!(
                "Invalid longitude {} for station '{}': must be between -180 and 360 degrees",
                self.longitude, self.name
            )));
        }

        if !self.altitude.is_finite() {
            return Err(Error::format(format!(
                "Invalid altitude {} for station '{}'",
                self.altitude, self.name
            )));
        }

        Ok(())
    }
}

// =============================================================================
// Simulation-Info Table
// =============================================================================

/// A field value of the simulation-info table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InfoValue {
    Number(f64),
    Timestamp(NaiveDateTime),
    Text(String),
}

impl InfoValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            InfoValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            InfoValue::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            InfoValue::Timestamp(timestamp) => Some(*timestamp),
            _ => None,
        }
    }
}

/// Field name to value, in file order
pub type InfoSection = IndexMap<String, InfoValue>;

static EMPTY_SECTION: LazyLock<InfoSection> = LazyLock::new(InfoSection::new);

/// Section name to fields, in file order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimuCicInfoRecord {
    sections: IndexMap<String, InfoSection>,
}

impl SimuCicInfoRecord {
    pub fn new(sections: IndexMap<String, InfoSection>) -> Self {
        Self { sections }
    }

    /// Fields of a section; an absent section yields an empty mapping, never an error
    pub fn section(&self, name: &str) -> &InfoSection {
        self.sections.get(name).unwrap_or(&EMPTY_SECTION)
    }

    /// Whether the section was present in the file
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Section names in file order
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Single field lookup
    pub fn value(&self, section: &str, field: &str) -> Option<&InfoValue> {
        self.section(section).get(field)
    }

    pub fn sections(&self) -> &IndexMap<String, InfoSection> {
        &self.sections
    }
}
