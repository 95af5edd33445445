//! Application constants for the SIMU-CIC parser
//!
//! This module contains the file names, header keys, section names, time
//! formats and unit factors used throughout the parser.

// =============================================================================
// File Names
// =============================================================================

/// Satellite result files written by SIMU-CIC, one per computed quantity
pub mod filenames {
    pub const DISTANCE_GROUND_STATION_1: &str = "Sat_DISTANCE_GROUND_STATION_1.txt";
    pub const DISTANCE_GROUND_STATION_2: &str = "Sat_DISTANCE_GROUND_STATION_2.txt";
    pub const ORBIT_NUMBER: &str = "Sat_ORBIT_NUMBER.txt";
    pub const DIRECTION_GROUND_STATION_1: &str =
        "Sat_SATELLITE_DIRECTION-GROUND_STATION_1_FRAME.txt";
    pub const DIRECTION_GROUND_STATION_2: &str =
        "Sat_SATELLITE_DIRECTION-GROUND_STATION_2_FRAME.txt";
    pub const ALTITUDE: &str = "Sat_SATELLITE_ALTITUDE.txt";
    pub const ECLIPSE: &str = "Sat_SATELLITE_ECLIPSE.txt";
    pub const VISIBILITY_GROUND_STATION_1: &str = "Sat_GEOMETRICAL_VISIBILITY_GROUND_STATION_1.txt";
    pub const GEOGRAPHICAL_COORDINATES: &str = "Sat_GEOGRAPHICAL_COORDINATES.txt";

    /// Ground-station reference table
    pub const STATIONS_REF: &str = "Stations_ref.txt";

    /// Simulation-info table
    pub const SIMU_CIC_INFO: &str = "simu_cic_info.txt";

    /// All satellite result files accepted by the generic parser
    pub const SAT_RESULT_FILES: &[&str] = &[
        DISTANCE_GROUND_STATION_1,
        DISTANCE_GROUND_STATION_2,
        ORBIT_NUMBER,
        DIRECTION_GROUND_STATION_1,
        DIRECTION_GROUND_STATION_2,
        ALTITUDE,
        ECLIPSE,
        VISIBILITY_GROUND_STATION_1,
        GEOGRAPHICAL_COORDINATES,
    ];
}

/// Only extension accepted for SIMU-CIC output files
pub const TXT_EXTENSION: &str = "txt";

// =============================================================================
// Sectioned File Format
// =============================================================================

/// Line that ends the metadata header of a satellite result file
pub const META_STOP_SENTINEL: &str = "META_STOP";

/// Separator between a header key and its value
pub const KEY_VALUE_SEPARATOR: &str = " = ";

/// Label replacing the two raw time columns in the formatted comment
pub const DATE_COLUMN_LABEL: &str = "Date";

/// Number of raw leading columns (MJD day, seconds of day) per data row
pub const TIME_COLUMN_COUNT: usize = 2;

/// Header keys of satellite result files
pub mod header_keys {
    pub const CIC_MEM_VERS: &str = "CIC_MEM_VERS";
    pub const CREATION_DATE: &str = "CREATION_DATE";
    pub const ORIGINATOR: &str = "ORIGINATOR";
    pub const COMMENT: &str = "COMMENT";
    pub const OBJECT_NAME: &str = "OBJECT_NAME";
    pub const OBJECT_ID: &str = "OBJECT_ID";
    pub const USER_DEFINED_PROTOCOL: &str = "USER_DEFINED_PROTOCOL";
    pub const USER_DEFINED_CONTENT: &str = "USER_DEFINED_CONTENT";
    pub const TIME_SYSTEM: &str = "TIME_SYSTEM";
    pub const START_TIME: &str = "START_TIME";
    pub const STOP_TIME: &str = "STOP_TIME";

    /// Keys that must be present for the header to be formatted at all
    pub const REQUIRED_FOR_FORMATTING: &[&str] = &[COMMENT, CREATION_DATE, START_TIME, STOP_TIME];

    /// Every key a complete SIMU-CIC header carries
    pub const ALL: &[&str] = &[
        CIC_MEM_VERS,
        CREATION_DATE,
        ORIGINATOR,
        COMMENT,
        OBJECT_NAME,
        OBJECT_ID,
        USER_DEFINED_PROTOCOL,
        USER_DEFINED_CONTENT,
        TIME_SYSTEM,
        START_TIME,
        STOP_TIME,
    ];
}

// =============================================================================
// Simulation-Info Sections
// =============================================================================

pub mod info_sections {
    pub const SIMULATION_SYNTHESIS: &str = "Simulation synthesis";
    pub const SATELLITE_1: &str = "Satellite 1";
    pub const INITIAL_CONDITIONS: &str = "Initial conditions";
    pub const STATIONS: &str = "Stations";
}

pub mod info_fields {
    pub const SIMULATION_NAME: &str = "Simulation name";
    pub const START_UTC: &str = "Start (UTC)";
    pub const END_UTC: &str = "End (UTC)";
    pub const SATELLITE_NAME: &str = "Name";
    pub const DATE_UTC: &str = "Date (UTC)";
    pub const ALTITUDE_KM: &str = "Altitude (km)";
    pub const ECCENTRICITY: &str = "Eccentricity";
    pub const INCLINATION_DEG: &str = "Inclination (deg)";
    pub const ARGUMENT_OF_PERIGEE_DEG: &str = "Argument of perigee (deg)";
    pub const MLTAN_H: &str = "Mean local time of ascending node (h)";
    pub const ARGUMENT_OF_LATITUDE_DEG: &str = "Argument of latitude (deg)";
    pub const MEAN_J2_ORBITAL_PERIOD_H: &str = "Mean J2 orbital period (h)";
}

/// Ground-station reference table keys (matched case-insensitively)
pub mod station_fields {
    pub const NAME: &str = "name";
    pub const LONGITUDE: &str = "longitude";
    pub const LATITUDE: &str = "latitude";
    pub const ALTITUDE: &str = "altitude";
}

// =============================================================================
// Time Constants
// =============================================================================

/// Header timestamp format, e.g. `2021-06-23T09:52:26.000`
pub const CALENDAR_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.%3f";

/// Simulation-info timestamp format, e.g. `2021/01/01 00:00:00.000`
pub const ALTERNATE_TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S.%3f";

/// Modified Julian Day epoch (1858-11-17T00:00:00 UTC)
pub const MJD_EPOCH_YEAR: i32 = 1858;
pub const MJD_EPOCH_MONTH: u32 = 11;
pub const MJD_EPOCH_DAY: u32 = 17;

pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

// =============================================================================
// Unit Conversions
// =============================================================================

/// Kilometres to metres, applied by the distance and altitude accessors
pub const METERS_PER_KILOMETER: f64 = 1e3;

// =============================================================================
// Helper Functions
// =============================================================================

/// Check if a basename is one of the satellite result files
pub fn is_sat_result_file(basename: &str) -> bool {
    filenames::SAT_RESULT_FILES.contains(&basename)
}
