//! Discovery of SIMU-CIC output files in a simulation directory
//!
//! Walks a directory with `walkdir` and groups every recognized output file
//! by [`FileKind`]. Only the directory itself is scanned by default; the
//! depth is taken from [`ParserConfig::discovery_max_depth`].

use crate::app::services::file_kind::FileKind;
use crate::config::ParserConfig;
use crate::constants::TXT_EXTENSION;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Recognized output files grouped by kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveredOutputs {
    /// Scanned directory
    pub root: PathBuf,

    /// Paths per kind, sorted
    pub files: BTreeMap<FileKind, Vec<PathBuf>>,

    /// `.txt` files that matched no known kind
    pub skipped: usize,
}

impl DiscoveredOutputs {
    /// All paths found for `kind`
    pub fn paths(&self, kind: FileKind) -> &[PathBuf] {
        self.files.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// First path found for `kind`, the usual case for a single run
    pub fn first(&self, kind: FileKind) -> Option<&Path> {
        self.paths(kind).first().map(PathBuf::as_path)
    }

    pub fn contains(&self, kind: FileKind) -> bool {
        self.files.contains_key(&kind)
    }

    /// Kinds found, in declaration order
    pub fn kinds(&self) -> impl Iterator<Item = FileKind> + '_ {
        self.files.keys().copied()
    }

    /// Kinds with no file in the scanned tree
    pub fn missing(&self) -> Vec<FileKind> {
        FileKind::ALL
            .into_iter()
            .filter(|kind| !self.contains(*kind))
            .collect()
    }

    /// Total number of recognized files
    pub fn len(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Scanner for simulation output directories
#[derive(Debug, Clone, Default)]
pub struct OutputDiscovery {
    config: ParserConfig,
}

impl OutputDiscovery {
    /// Create a scanner with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scanner with custom configuration
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Scan `root` and group the recognized files by kind
    pub fn scan(&self, root: impl AsRef<Path>) -> Result<DiscoveredOutputs> {
        let root = root.as_ref();
        self.config.validate()?;

        if !root.exists() {
            return Err(Error::not_found(root.display().to_string()));
        }
        if !root.is_dir() {
            return Err(Error::invalid_argument(format!(
                "Not a directory: {}",
                root.display()
            )));
        }

        info!("Scanning for SIMU-CIC outputs in {}", root.display());

        let mut outputs = DiscoveredOutputs {
            root: root.to_path_buf(),
            ..Default::default()
        };

        for entry in WalkDir::new(root)
            .max_depth(self.config.discovery_max_depth)
            .follow_links(self.config.follow_links)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() && !path.is_file() {
                continue;
            }
            if path.extension().is_none_or(|ext| ext != TXT_EXTENSION) {
                continue;
            }

            let Some(basename) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };

            match FileKind::from_basename(basename) {
                Ok(kind) => {
                    debug!("Found {} at {}", kind, path.display());
                    outputs
                        .files
                        .entry(kind)
                        .or_default()
                        .push(path.to_path_buf());
                }
                Err(_) => {
                    debug!("Skipping unrecognized file {}", path.display());
                    outputs.skipped += 1;
                }
            }
        }

        info!(
            "Discovered {} SIMU-CIC files ({} kinds, {} skipped)",
            outputs.len(),
            outputs.files.len(),
            outputs.skipped
        );

        Ok(outputs)
    }
}
