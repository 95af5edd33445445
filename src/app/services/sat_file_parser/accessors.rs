//! Per-kind facades over [`SatFileParser`]
//!
//! Each wrapper checks at construction that the file belongs to its
//! category and then exposes named getters. Index getters are zero-based
//! and return `None` past the last row. All generic header getters stay
//! reachable through `Deref<Target = SatFileParser>`.

use super::SatFileParser;
use crate::app::services::file_kind::{FileCategory, FileKind};
use crate::app::services::path_validator::ValidatedPath;
use crate::config::ParserConfig;
use crate::constants::METERS_PER_KILOMETER;
use crate::Result;
use std::ops::Deref;
use std::path::Path;

macro_rules! sat_accessor {
    ($(#[$meta:meta])* $name:ident, $category:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            parser: SatFileParser,
        }

        impl $name {
            /// Open with default settings
            pub fn open(path: impl AsRef<Path>) -> Result<Self> {
                Self::open_with_config(path, &ParserConfig::default())
            }

            /// Check the kind from the basename, then read the file
            pub fn open_with_config(path: impl AsRef<Path>, config: &ParserConfig) -> Result<Self> {
                let path = ValidatedPath::new(path)?;
                let kind = FileKind::sat_result_from_basename(path.basename())?;
                kind.expect_category($category)?;
                Self::from_parser(SatFileParser::read_validated(path, kind, config)?)
            }

            /// Wrap an already parsed file, rejecting files of another kind
            pub fn from_parser(parser: SatFileParser) -> Result<Self> {
                parser.kind().expect_category($category)?;
                Ok(Self { parser })
            }

            pub fn into_inner(self) -> SatFileParser {
                self.parser
            }
        }

        impl Deref for $name {
            type Target = SatFileParser;

            fn deref(&self) -> &SatFileParser {
                &self.parser
            }
        }
    };
}

sat_accessor!(
    /// `Sat_ORBIT_NUMBER.txt`
    OrbitNumber,
    FileCategory::OrbitNumber
);

impl OrbitNumber {
    /// Orbit count at row `index` (fractional part dropped)
    ///
    /// `None` when the stored value is not finite or does not fit an `i64`.
    pub fn orbit_number(&self, index: usize) -> Option<i64> {
        self.value(index, 0)
            .map(f64::trunc)
            .filter(|orbit| (i64::MIN as f64..i64::MAX as f64).contains(orbit))
            .map(|orbit| orbit as i64)
    }
}

sat_accessor!(
    /// `Sat_SATELLITE_DIRECTION-GROUND_STATION_{1,2}_FRAME.txt`
    SatPosition,
    FileCategory::Direction
);

impl SatPosition {
    /// Azimuth in degrees
    pub fn azimuth(&self, index: usize) -> Option<f64> {
        self.value(index, 0)
    }

    /// Elevation in degrees
    pub fn elevation(&self, index: usize) -> Option<f64> {
        self.value(index, 1)
    }
}

sat_accessor!(
    /// `Sat_GEOMETRICAL_VISIBILITY_GROUND_STATION_1.txt`
    SatVisibility,
    FileCategory::Visibility
);

impl SatVisibility {
    /// Visibility flag as written in the file
    pub fn visibility(&self, index: usize) -> Option<f64> {
        self.value(index, 0)
    }

    /// Whether the flag is non-zero
    pub fn is_visible(&self, index: usize) -> Option<bool> {
        self.visibility(index).map(|flag| flag != 0.0)
    }
}

sat_accessor!(
    /// `Sat_DISTANCE_GROUND_STATION_{1,2}.txt`
    SatDistanceToGroundStation,
    FileCategory::Distance
);

impl SatDistanceToGroundStation {
    /// Distance in metres (the file stores kilometres)
    pub fn distance_m(&self, index: usize) -> Option<f64> {
        self.value(index, 0).map(|km| km * METERS_PER_KILOMETER)
    }
}

sat_accessor!(
    /// `Sat_SATELLITE_ALTITUDE.txt`
    SatAltitude,
    FileCategory::Altitude
);

impl SatAltitude {
    /// Altitude in metres (the file stores kilometres)
    pub fn altitude_m(&self, index: usize) -> Option<f64> {
        self.value(index, 0).map(|km| km * METERS_PER_KILOMETER)
    }
}

sat_accessor!(
    /// `Sat_SATELLITE_ECLIPSE.txt`
    SatEclipse,
    FileCategory::Eclipse
);

impl SatEclipse {
    /// Eclipse percentage, unconverted
    pub fn eclipse(&self, index: usize) -> Option<f64> {
        self.value(index, 0)
    }
}

sat_accessor!(
    /// `Sat_GEOGRAPHICAL_COORDINATES.txt`
    SatGeographicalCoordinates,
    FileCategory::GeographicalCoordinates
);

impl SatGeographicalCoordinates {
    pub fn longitude(&self, index: usize) -> Option<f64> {
        self.value(index, 0)
    }

    pub fn latitude(&self, index: usize) -> Option<f64> {
        self.value(index, 1)
    }
}
