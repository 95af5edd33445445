//! SIMU-CIC Output Parser Library
//!
//! A Rust library for reading the text files produced by the SIMU-CIC
//! satellite simulation tool into typed, queryable records.
//!
//! This library provides tools for:
//! - Validating output file paths before anything is read
//! - Splitting files into a `KEY = VALUE` header and a whitespace-separated data table
//! - Converting MJD day + seconds-of-day pairs into absolute UTC timestamps
//! - Typed accessors per file kind (orbit number, distance, altitude, eclipse, ...)
//! - Loading the ground-station reference table and the simulation-info table
//! - Discovering every recognized output file in a simulation directory
//!
//! ## Example
//!
//! ```no_run
//! use simucic_parser::SatDistanceToGroundStation;
//!
//! # fn example() -> simucic_parser::Result<()> {
//! let distances = SatDistanceToGroundStation::open("out/Sat_DISTANCE_GROUND_STATION_1.txt")?;
//! if let Some(metres) = distances.distance_m(0) {
//!     println!("first distance: {metres} m");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod discovery;
        pub mod file_kind;
        pub mod path_validator;
        pub mod record_formatter;
        pub mod sat_file_parser;
        pub mod sectioned_reader;
        pub mod simu_cic_info;
        pub mod station_reference;
        pub mod time_codec;
    }
}

// Re-export commonly used types
pub use app::models::{
    FormattedMetadata, GroundStationRecord, InfoValue, MetadataBlock, SimuCicInfoRecord,
    SimulationData, SimulationResultRow,
};
pub use app::services::discovery::{DiscoveredOutputs, OutputDiscovery};
pub use app::services::file_kind::FileKind;
pub use app::services::path_validator::ValidatedPath;
pub use app::services::sat_file_parser::SatFileParser;
pub use app::services::sat_file_parser::accessors::{
    OrbitNumber, SatAltitude, SatDistanceToGroundStation, SatEclipse,
    SatGeographicalCoordinates, SatPosition, SatVisibility,
};
pub use app::services::simu_cic_info::SimuCicInfo;
pub use app::services::station_reference::GroundStationTable;
pub use config::ParserConfig;

/// Result type alias for the SIMU-CIC parser
pub type Result<T> = std::result::Result<T, Error>;

/// Broad failure categories, independent of the message carried by [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    MissingField,
    Format,
    Io,
}

/// Error types for SIMU-CIC parsing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Caller supplied an unusable path or a file of the wrong kind
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Path passed validation syntactically but no file exists there
    #[error("File not found: {path}")]
    NotFound { path: String },

    /// A required header key or record field is absent
    #[error("Missing field '{field}' in {context}")]
    MissingField { field: String, context: String },

    /// A numeric token, row layout or timestamp could not be decoded
    #[error("Format error: {message}")]
    Format { message: String },

    /// Date/time parsing error
    #[error("Date/time parsing error: {message}")]
    DateTimeParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
            context: context.into(),
        }
    }

    /// Create a format error
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    /// Create a date/time parsing error
    pub fn datetime_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Category of this error. Timestamp failures count as format errors.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::MissingField { .. } => ErrorKind::MissingField,
            Self::Format { .. } | Self::DateTimeParsing { .. } => ErrorKind::Format,
            Self::Io { .. } => ErrorKind::Io,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: "Date/time parsing failed".to_string(),
            source: error,
        }
    }
}
