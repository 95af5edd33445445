//! Line-oriented readers for SIMU-CIC text files
//!
//! Satellite result files have two sections read in one sequential pass:
//! a `KEY = VALUE` header ended by `META_STOP`, then a whitespace-separated
//! table. The header reader is tolerant: anything that is not exactly one
//! `KEY = VALUE` pair (blank lines, comments, `META_START`) is skipped.
//! No row-width checks happen here; those belong to the record formatter.
//!
//! The same key/value rule is reused by the two table-shaped files:
//! bracket-sectioned simulation info and per-station reference blocks.

use crate::app::models::{MetadataBlock, RawRow};
use crate::constants::{KEY_VALUE_SEPARATOR, META_STOP_SENTINEL, station_fields};
use crate::{Error, Result};
use indexmap::IndexMap;
use regex::Regex;
use std::io::BufRead;
use std::sync::LazyLock;
use tracing::debug;

static SECTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[\s*(?P<name>[^\]]*?)\s*\]$").expect("valid section regex"));

/// Header and raw data rows of a satellite result file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionedContent {
    pub metadata: MetadataBlock,
    pub rows: Vec<RawRow>,
}

/// Split a trimmed line into key and value if it holds exactly one separator
pub fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split(KEY_VALUE_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) => Some((key.trim(), value.trim())),
        _ => None,
    }
}

/// Read header lines up to the `META_STOP` sentinel or end of input
///
/// The reader is left positioned on the line after the sentinel.
pub fn read_metadata<R: BufRead>(reader: &mut R) -> Result<MetadataBlock> {
    let mut metadata = MetadataBlock::new();
    let mut skipped = 0usize;

    for line in reader.lines() {
        let line = line.map_err(|e| Error::io("Failed to read header line", e))?;
        let line = line.trim();

        if line == META_STOP_SENTINEL {
            break;
        }

        match split_key_value(line) {
            Some((key, value)) => {
                if metadata
                    .insert(key.to_string(), value.to_string())
                    .is_some()
                {
                    debug!("Duplicate header key '{}', keeping last value", key);
                }
            }
            None => skipped += 1,
        }
    }

    debug!(
        "Read {} header entries ({} lines skipped)",
        metadata.len(),
        skipped
    );
    Ok(metadata)
}

/// Read the remaining lines as whitespace-separated rows, skipping blank lines
pub fn read_rows<R: BufRead>(reader: &mut R) -> Result<Vec<RawRow>> {
    let mut rows = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|e| Error::io("Failed to read data line", e))?;
        let row: RawRow = line.split_whitespace().map(str::to_string).collect();
        if !row.is_empty() {
            rows.push(row);
        }
    }

    debug!("Read {} data rows", rows.len());
    Ok(rows)
}

/// Read both sections of a satellite result file in one pass
pub fn read_sectioned<R: BufRead>(mut reader: R) -> Result<SectionedContent> {
    let metadata = read_metadata(&mut reader)?;
    let rows = read_rows(&mut reader)?;
    Ok(SectionedContent { metadata, rows })
}

/// Read a `[Section]`-headed key/value file
///
/// Lines before the first header and lines that are not `KEY = VALUE` pairs
/// are skipped. A section repeated later in the file is merged into the first.
pub fn read_bracket_sections<R: BufRead>(
    reader: R,
) -> Result<IndexMap<String, IndexMap<String, String>>> {
    let mut sections: IndexMap<String, IndexMap<String, String>> = IndexMap::new();
    let mut current: Option<String> = None;

    for line in reader.lines() {
        let line = line.map_err(|e| Error::io("Failed to read section line", e))?;
        let line = line.trim();

        if let Some(captures) = SECTION_HEADER.captures(line) {
            let name = captures["name"].to_string();
            sections.entry(name.clone()).or_default();
            current = Some(name);
            continue;
        }

        let Some((key, value)) = split_key_value(line) else {
            continue;
        };

        match current.as_ref().and_then(|name| sections.get_mut(name)) {
            Some(section) => {
                section.insert(key.to_string(), value.to_string());
            }
            None => debug!("Skipping entry '{}' outside of any section", key),
        }
    }

    debug!("Read {} sections", sections.len());
    Ok(sections)
}

/// Read per-station `KEY = VALUE` blocks
///
/// Keys are lower-cased. A block ends at a blank line or when a second
/// `name` key appears, so blocks without separating blank lines still split.
pub fn read_station_blocks<R: BufRead>(reader: R) -> Result<Vec<IndexMap<String, String>>> {
    let mut blocks = Vec::new();
    let mut current: IndexMap<String, String> = IndexMap::new();

    for line in reader.lines() {
        let line = line.map_err(|e| Error::io("Failed to read station line", e))?;
        let line = line.trim();

        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }

        let Some((key, value)) = split_key_value(line) else {
            continue;
        };
        let key = key.to_lowercase();

        if key == station_fields::NAME && current.contains_key(station_fields::NAME) {
            blocks.push(std::mem::take(&mut current));
        }
        current.insert(key, value.to_string());
    }

    if !current.is_empty() {
        blocks.push(current);
    }

    debug!("Read {} station blocks", blocks.len());
    Ok(blocks)
}
