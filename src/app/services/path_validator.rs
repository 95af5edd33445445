//! Path validation for SIMU-CIC output files
//!
//! Every parser is gated by [`ValidatedPath`]: the path must be a non-empty,
//! pure-ASCII string ending in `.txt` that names an existing file. Existence
//! is checked once, at construction; a file deleted afterwards is not noticed.

use crate::constants::TXT_EXTENSION;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A path that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPath {
    path: PathBuf,
}

impl ValidatedPath {
    /// Validate a candidate path
    ///
    /// Checks run in order and the first failure is returned:
    /// empty, whitespace-only, non-UTF-8 or non-ASCII, wrong extension
    /// ([`Error::InvalidArgument`]), then existence ([`Error::NotFound`]).
    pub fn new(candidate: impl AsRef<Path>) -> Result<Self> {
        let candidate = candidate.as_ref();
        let text = candidate
            .to_str()
            .ok_or_else(|| Error::invalid_argument("filepath must be valid UTF-8 text"))?;

        if text.is_empty() {
            return Err(Error::invalid_argument("filepath cannot be empty"));
        }
        if text.trim().is_empty() {
            return Err(Error::invalid_argument(
                "filepath cannot consist only of whitespace characters",
            ));
        }
        if !text.is_ascii() {
            return Err(Error::invalid_argument(format!(
                "filepath cannot contain non-ASCII characters: '{}'",
                text
            )));
        }
        if !has_txt_extension(candidate) {
            return Err(Error::invalid_argument(format!(
                "filepath extension must be '.{}': '{}'",
                TXT_EXTENSION, text
            )));
        }
        if !candidate.is_file() {
            return Err(Error::not_found(text));
        }

        debug!("Validated path: {}", text);
        Ok(Self {
            path: candidate.to_path_buf(),
        })
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// Directory component, empty for a bare filename
    pub fn dirname(&self) -> &str {
        self.path
            .parent()
            .and_then(Path::to_str)
            .unwrap_or_default()
    }

    /// Final path component, e.g. `Sat_ORBIT_NUMBER.txt`
    pub fn basename(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }

    /// Extension including the leading dot; always `.txt`
    pub fn extension(&self) -> String {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext))
            .unwrap_or_default()
    }
}

impl AsRef<Path> for ValidatedPath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

fn has_txt_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == TXT_EXTENSION)
}
