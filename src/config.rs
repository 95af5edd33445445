//! Configuration for parsing behaviour.
//!
//! Provides the knobs that tighten or relax how SIMU-CIC files are
//! interpreted: row-width checking, header completeness, and how deep
//! output discovery walks a simulation directory.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Global configuration for SIMU-CIC parsing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Reject rows whose value count differs from the file kind's layout
    pub strict_row_width: bool,

    /// Require every standard header key, not only the ones that get formatted
    pub require_full_header: bool,

    /// Maximum directory depth walked by output discovery (1 = the directory itself)
    pub discovery_max_depth: usize,

    /// Follow symbolic links during output discovery
    pub follow_links: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            strict_row_width: true,
            require_full_header: false,
            discovery_max_depth: 1,
            follow_links: false,
        }
    }
}

impl ParserConfig {
    /// Accept rows of any width, as long as the two time columns are present
    pub fn with_lenient_rows(mut self) -> Self {
        self.strict_row_width = false;
        self
    }

    /// Require all eleven standard header keys
    pub fn with_full_header(mut self) -> Self {
        self.require_full_header = true;
        self
    }

    /// Set maximum discovery depth
    pub fn with_discovery_max_depth(mut self, depth: usize) -> Self {
        self.discovery_max_depth = depth;
        self
    }

    /// Follow symbolic links during discovery
    pub fn with_follow_links(mut self) -> Self {
        self.follow_links = true;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.discovery_max_depth == 0 {
            return Err(Error::invalid_argument(
                "discovery_max_depth must be at least 1",
            ));
        }

        debug!(
            "Parser config: strict_row_width={}, require_full_header={}, discovery_max_depth={}",
            self.strict_row_width, self.require_full_header, self.discovery_max_depth
        );
        Ok(())
    }
}
