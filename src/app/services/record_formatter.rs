//! Conversion of raw strings into typed records
//!
//! The readers in [`sectioned_reader`](super::sectioned_reader) only split
//! text. This module turns those strings into dates, floats and typed rows,
//! and is where malformed content is rejected.

use crate::app::models::{
    FormattedMetadata, GroundStationRecord, InfoSection, InfoValue, MetadataBlock, RawRow,
    SimuCicInfoRecord, SimulationResultRow,
};
use crate::app::services::time_codec::{
    parse_alternate_calendar_timestamp, parse_calendar_timestamp, row_timestamp,
};
use crate::config::ParserConfig;
use crate::constants::{
    DATE_COLUMN_LABEL, TIME_COLUMN_COUNT, header_keys, info_fields, info_sections, station_fields,
};
use crate::{Error, Result};
use indexmap::IndexMap;
use tracing::{debug, warn};

/// Typed conversion of header, rows and table files
#[derive(Debug, Clone, Default)]
pub struct RecordFormatter {
    config: ParserConfig,
}

impl RecordFormatter {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Convert a raw header into [`FormattedMetadata`]
    ///
    /// `source` names the file in error messages.
    pub fn format_metadata(&self, block: &MetadataBlock, source: &str) -> Result<FormattedMetadata> {
        let required: &[&str] = if self.config.require_full_header {
            header_keys::ALL
        } else {
            header_keys::REQUIRED_FOR_FORMATTING
        };

        let context = format!("{} header", source);
        for key in required {
            if !block.contains_key(*key) {
                return Err(Error::missing_field(*key, context));
            }
        }

        Ok(FormattedMetadata {
            comment: format_comment(required_field(block, header_keys::COMMENT, &context)?),
            creation_date: parse_calendar_timestamp(required_field(
                block,
                header_keys::CREATION_DATE,
                &context,
            )?)?,
            start_time: parse_calendar_timestamp(required_field(
                block,
                header_keys::START_TIME,
                &context,
            )?)?,
            stop_time: parse_calendar_timestamp(required_field(
                block,
                header_keys::STOP_TIME,
                &context,
            )?)?,
            raw: block.clone(),
        })
    }

    /// Convert raw rows into time-stamped rows, preserving order
    ///
    /// `expected_values` is the number of value columns after the two time
    /// columns; it is enforced only when strict row width is configured.
    pub fn format_results(
        &self,
        rows: &[RawRow],
        expected_values: Option<usize>,
    ) -> Result<Vec<SimulationResultRow>> {
        let mut formatted = Vec::with_capacity(rows.len());

        for (index, row) in rows.iter().enumerate() {
            let row_number = index + 1;
            let numbers = parse_numeric_row(row, row_number)?;

            if numbers.len() < TIME_COLUMN_COUNT {
                return Err(Error::format(format!(
                    "Row {} has {} field(s); at least {} time fields are required",
                    row_number,
                    numbers.len(),
                    TIME_COLUMN_COUNT
                )));
            }

            let values = numbers[TIME_COLUMN_COUNT..].to_vec();
            if let Some(expected) = expected_values {
                if self.config.strict_row_width && values.len() != expected {
                    return Err(Error::format(format!(
                        "Row {} has {} value column(s), expected {}",
                        row_number,
                        values.len(),
                        expected
                    )));
                }
            }

            let timestamp = row_timestamp(numbers[0], numbers[1])?;
            formatted.push(SimulationResultRow::new(timestamp, values));
        }

        debug!("Formatted {} result rows", formatted.len());
        Ok(formatted)
    }

    /// Convert raw simulation-info sections into a typed record
    ///
    /// `Initial conditions` fields become numbers (its date becomes a
    /// timestamp); the start and end of `Simulation synthesis` become
    /// timestamps. Everything else stays text.
    pub fn format_simu_cic_info(
        &self,
        sections: &IndexMap<String, IndexMap<String, String>>,
    ) -> Result<SimuCicInfoRecord> {
        let mut formatted = IndexMap::with_capacity(sections.len());

        for (section_name, fields) in sections {
            let mut section = InfoSection::with_capacity(fields.len());
            for (field, raw) in fields {
                let value = format_info_value(section_name, field, raw)?;
                section.insert(field.clone(), value);
            }
            formatted.insert(section_name.clone(), section);
        }

        Ok(SimuCicInfoRecord::new(formatted))
    }

    /// Convert station blocks into records keyed by station name
    pub fn format_ground_stations(
        &self,
        blocks: &[IndexMap<String, String>],
    ) -> Result<IndexMap<String, GroundStationRecord>> {
        let mut stations = IndexMap::with_capacity(blocks.len());

        for (index, block) in blocks.iter().enumerate() {
            let context = format!("station block {}", index + 1);
            let number = |key: &str| -> Result<f64> {
                parse_float(required_field(block, key, &context)?, key)
            };

            let name = required_field(block, station_fields::NAME, &context)?.to_string();
            let longitude = number(station_fields::LONGITUDE)?;
            let latitude = number(station_fields::LATITUDE)?;
            let altitude = number(station_fields::ALTITUDE)?;

            let record = GroundStationRecord::new(name.clone(), longitude, latitude, altitude)?;
            if stations.insert(name.clone(), record).is_some() {
                warn!("Ground station '{}' listed more than once, keeping last entry", name);
            }
        }

        Ok(stations)
    }
}

/// Split the `COMMENT` header into column labels
///
/// The first two labels describe the MJD day and seconds columns, which
/// become a single timestamp, so they are replaced by `"Date"`.
pub fn format_comment(comment: &str) -> Vec<String> {
    let labels: Vec<String> = comment.split(',').map(|s| s.trim().to_string()).collect();

    std::iter::once(DATE_COLUMN_LABEL.to_string())
        .chain(labels.into_iter().skip(TIME_COLUMN_COUNT))
        .collect()
}

fn required_field<'a>(
    fields: &'a IndexMap<String, String>,
    key: &str,
    context: &str,
) -> Result<&'a str> {
    fields
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| Error::missing_field(key, context))
}

fn parse_numeric_row(row: &RawRow, row_number: usize) -> Result<Vec<f64>> {
    row.iter()
        .map(|token| {
            token.parse::<f64>().map_err(|e| {
                Error::format(format!(
                    "Row {}: invalid numeric value '{}' ({})",
                    row_number, token, e
                ))
            })
        })
        .collect()
}

fn parse_float(raw: &str, field: &str) -> Result<f64> {
    raw.trim().parse::<f64>().map_err(|e| {
        Error::format(format!(
            "Invalid number for '{}': '{}' ({})",
            field, raw, e
        ))
    })
}

fn format_info_value(section: &str, field: &str, raw: &str) -> Result<InfoValue> {
    match (section, field) {
        (info_sections::INITIAL_CONDITIONS, info_fields::DATE_UTC)
        | (info_sections::SIMULATION_SYNTHESIS, info_fields::START_UTC)
        | (info_sections::SIMULATION_SYNTHESIS, info_fields::END_UTC) => {
            parse_alternate_calendar_timestamp(raw).map(InfoValue::Timestamp)
        }
        (info_sections::INITIAL_CONDITIONS, _) => parse_float(raw, field).map(InfoValue::Number),
        _ => Ok(InfoValue::Text(raw.to_string())),
    }
}
