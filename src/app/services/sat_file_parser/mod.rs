//! Generic parser for SIMU-CIC satellite result files
//!
//! This module reads any of the recognized `Sat_*.txt` files into a
//! [`SimulationData`] in a single pass. The file is opened, fully read and
//! closed inside [`SatFileParser::open`]; the parser afterwards only holds
//! immutable, owned data.
//!
//! ## Architecture
//!
//! - [`SatFileParser`] - validation, reading and formatting, plus the header getters
//! - [`accessors`] - one thin wrapper per file kind with named, unit-aware getters
//!
//! ## Usage
//!
//! ```no_run
//! use simucic_parser::SatFileParser;
//!
//! # fn example() -> simucic_parser::Result<()> {
//! let parser = SatFileParser::open("out/Sat_SATELLITE_ECLIPSE.txt")?;
//! println!("{} rows from {}", parser.len(), parser.kind());
//! # Ok(())
//! # }
//! ```

pub mod accessors;

#[cfg(test)]
pub mod tests;

use crate::app::models::{FormattedMetadata, SimulationData, SimulationResultRow};
use crate::app::services::file_kind::FileKind;
use crate::app::services::path_validator::ValidatedPath;
use crate::app::services::record_formatter::RecordFormatter;
use crate::app::services::sectioned_reader::read_sectioned;
use crate::config::ParserConfig;
use crate::constants::header_keys;
use crate::{Error, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Parsed satellite result file
#[derive(Debug, Clone)]
pub struct SatFileParser {
    path: ValidatedPath,
    kind: FileKind,
    data: SimulationData,
}

impl SatFileParser {
    /// Validate, read and format a satellite result file with default settings
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_config(path, &ParserConfig::default())
    }

    /// Validate, read and format a satellite result file
    pub fn open_with_config(path: impl AsRef<Path>, config: &ParserConfig) -> Result<Self> {
        let path = ValidatedPath::new(path)?;
        let kind = FileKind::sat_result_from_basename(path.basename())?;
        Self::read_validated(path, kind, config)
    }

    /// Read a file whose path and kind were already checked
    pub(crate) fn read_validated(
        path: ValidatedPath,
        kind: FileKind,
        config: &ParserConfig,
    ) -> Result<Self> {
        info!("Parsing SIMU-CIC file: {}", path.as_path().display());

        let file = File::open(path.as_path()).map_err(|e| {
            Error::io(
                format!("Failed to open {}", path.as_path().display()),
                e,
            )
        })?;
        let data = parse_simulation_data(BufReader::new(file), kind, config)?;

        info!(
            "Parsed {} rows from {} ({} to {})",
            data.results.len(),
            kind,
            data.metadata.start_time,
            data.metadata.stop_time
        );

        Ok(Self { path, kind, data })
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    pub fn path(&self) -> &ValidatedPath {
        &self.path
    }

    pub fn data(&self) -> &SimulationData {
        &self.data
    }

    pub fn metadata(&self) -> &FormattedMetadata {
        &self.data.metadata
    }

    pub fn results(&self) -> &[SimulationResultRow] {
        &self.data.results
    }

    pub fn result(&self, index: usize) -> Option<&SimulationResultRow> {
        self.data.results.get(index)
    }

    /// Timestamp of the row at `index`
    pub fn result_date(&self, index: usize) -> Option<DateTime<Utc>> {
        self.result(index).map(|row| row.timestamp)
    }

    /// Value column `column` of the row at `index`
    pub fn value(&self, index: usize, column: usize) -> Option<f64> {
        self.result(index).and_then(|row| row.value(column))
    }

    pub fn len(&self) -> usize {
        self.data.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.results.is_empty()
    }

    /// Raw header value for any key
    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.data.metadata.get(key)
    }

    pub fn version(&self) -> Option<&str> {
        self.metadata_value(header_keys::CIC_MEM_VERS)
    }

    pub fn creation_date(&self) -> NaiveDateTime {
        self.data.metadata.creation_date
    }

    pub fn originator(&self) -> Option<&str> {
        self.metadata_value(header_keys::ORIGINATOR)
    }

    /// Column labels, `"Date"` first
    pub fn comment(&self) -> &[String] {
        &self.data.metadata.comment
    }

    pub fn object_name(&self) -> Option<&str> {
        self.metadata_value(header_keys::OBJECT_NAME)
    }

    pub fn object_id(&self) -> Option<&str> {
        self.metadata_value(header_keys::OBJECT_ID)
    }

    pub fn user_defined_protocol(&self) -> Option<&str> {
        self.metadata_value(header_keys::USER_DEFINED_PROTOCOL)
    }

    pub fn user_defined_content(&self) -> Option<&str> {
        self.metadata_value(header_keys::USER_DEFINED_CONTENT)
    }

    pub fn time_system(&self) -> Option<&str> {
        self.metadata_value(header_keys::TIME_SYSTEM)
    }

    pub fn start_time(&self) -> NaiveDateTime {
        self.data.metadata.start_time
    }

    pub fn stop_time(&self) -> NaiveDateTime {
        self.data.metadata.stop_time
    }
}

/// Read and format satellite result content of a known kind
pub fn parse_simulation_data<R: BufRead>(
    reader: R,
    kind: FileKind,
    config: &ParserConfig,
) -> Result<SimulationData> {
    let content = read_sectioned(reader)?;
    debug!(
        "Split {} into {} header entries and {} rows",
        kind,
        content.metadata.len(),
        content.rows.len()
    );

    let formatter = RecordFormatter::new(config.clone());
    let metadata = formatter.format_metadata(&content.metadata, kind.basename())?;
    let results = formatter.format_results(&content.rows, kind.value_columns())?;

    Ok(SimulationData { metadata, results })
}
