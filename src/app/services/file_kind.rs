//! Registry of the SIMU-CIC output files this crate understands
//!
//! The file kind is decided by basename alone. Each kind fixes the number
//! of value columns that follow the two time columns of a data row, which
//! the record formatter uses to reject malformed rows.

use crate::constants::{filenames, is_sat_result_file};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every recognized output file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FileKind {
    DistanceGroundStation1,
    DistanceGroundStation2,
    OrbitNumber,
    DirectionGroundStation1,
    DirectionGroundStation2,
    Altitude,
    Eclipse,
    VisibilityGroundStation1,
    GeographicalCoordinates,
    StationsReference,
    SimulationInfo,
}

/// What a file measures, independent of which ground station it refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileCategory {
    Distance,
    OrbitNumber,
    Direction,
    Altitude,
    Eclipse,
    Visibility,
    GeographicalCoordinates,
    StationsReference,
    SimulationInfo,
}

impl FileKind {
    pub const ALL: [FileKind; 11] = [
        FileKind::DistanceGroundStation1,
        FileKind::DistanceGroundStation2,
        FileKind::OrbitNumber,
        FileKind::DirectionGroundStation1,
        FileKind::DirectionGroundStation2,
        FileKind::Altitude,
        FileKind::Eclipse,
        FileKind::VisibilityGroundStation1,
        FileKind::GeographicalCoordinates,
        FileKind::StationsReference,
        FileKind::SimulationInfo,
    ];

    /// Look up the kind of a basename such as `Sat_ORBIT_NUMBER.txt`
    pub fn from_basename(basename: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.basename() == basename)
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "'{}' is not a recognized SIMU-CIC output file",
                    basename
                ))
            })
    }

    /// Look up a satellite result file kind; table files are rejected
    pub fn sat_result_from_basename(basename: &str) -> Result<Self> {
        let kind = Self::from_basename(basename)?;
        if !kind.is_sat_result() {
            return Err(Error::invalid_argument(format!(
                "'{}' is not a satellite result file; expected one of {:?}",
                basename,
                filenames::SAT_RESULT_FILES
            )));
        }
        Ok(kind)
    }

    /// Canonical file name written by SIMU-CIC
    pub fn basename(&self) -> &'static str {
        match self {
            FileKind::DistanceGroundStation1 => filenames::DISTANCE_GROUND_STATION_1,
            FileKind::DistanceGroundStation2 => filenames::DISTANCE_GROUND_STATION_2,
            FileKind::OrbitNumber => filenames::ORBIT_NUMBER,
            FileKind::DirectionGroundStation1 => filenames::DIRECTION_GROUND_STATION_1,
            FileKind::DirectionGroundStation2 => filenames::DIRECTION_GROUND_STATION_2,
            FileKind::Altitude => filenames::ALTITUDE,
            FileKind::Eclipse => filenames::ECLIPSE,
            FileKind::VisibilityGroundStation1 => filenames::VISIBILITY_GROUND_STATION_1,
            FileKind::GeographicalCoordinates => filenames::GEOGRAPHICAL_COORDINATES,
            FileKind::StationsReference => filenames::STATIONS_REF,
            FileKind::SimulationInfo => filenames::SIMU_CIC_INFO,
        }
    }

    pub fn category(&self) -> FileCategory {
        match self {
            FileKind::DistanceGroundStation1 | FileKind::DistanceGroundStation2 => {
                FileCategory::Distance
            }
            FileKind::OrbitNumber => FileCategory::OrbitNumber,
            FileKind::DirectionGroundStation1 | FileKind::DirectionGroundStation2 => {
                FileCategory::Direction
            }
            FileKind::Altitude => FileCategory::Altitude,
            FileKind::Eclipse => FileCategory::Eclipse,
            FileKind::VisibilityGroundStation1 => FileCategory::Visibility,
            FileKind::GeographicalCoordinates => FileCategory::GeographicalCoordinates,
            FileKind::StationsReference => FileCategory::StationsReference,
            FileKind::SimulationInfo => FileCategory::SimulationInfo,
        }
    }

    /// Whether the file uses the header + MJD table layout
    pub fn is_sat_result(&self) -> bool {
        is_sat_result_file(self.basename())
    }

    /// Number of value columns after the two time columns, `None` for table files
    pub fn value_columns(&self) -> Option<usize> {
        match self.category() {
            FileCategory::Direction | FileCategory::GeographicalCoordinates => Some(2),
            FileCategory::Distance
            | FileCategory::OrbitNumber
            | FileCategory::Altitude
            | FileCategory::Eclipse
            | FileCategory::Visibility => Some(1),
            FileCategory::StationsReference | FileCategory::SimulationInfo => None,
        }
    }

    /// Ground station the file refers to, for per-station kinds
    pub fn ground_station(&self) -> Option<u8> {
        match self {
            FileKind::DistanceGroundStation1
            | FileKind::DirectionGroundStation1
            | FileKind::VisibilityGroundStation1 => Some(1),
            FileKind::DistanceGroundStation2 | FileKind::DirectionGroundStation2 => Some(2),
            _ => None,
        }
    }

    /// Fail with [`Error::InvalidArgument`] unless this kind belongs to `expected`
    pub fn expect_category(&self, expected: FileCategory) -> Result<()> {
        if self.category() == expected {
            Ok(())
        } else {
            Err(Error::invalid_argument(format!(
                "'{}' is a {:?} file, expected a {:?} file",
                self.basename(),
                self.category(),
                expected
            )))
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.basename())
    }
}
