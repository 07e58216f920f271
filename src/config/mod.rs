//! # Config Module
//!
//! User preferences for the tagger, stored as JSON.
//!
//! ## Location
//! `<config dir>/scene-tagger/config.json` (e.g. `~/.config/scene-tagger/config.json`).
//! A missing file means defaults.
//!
//! ```json
//! {
//!   "excluded_performer_fields": ["gender", "measurements"],
//!   "close_match_seconds": 5
//! }
//! ```

use crate::core::ranking::DurationRanker;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaggerConfig {
    /// Performer fields never offered for submission
    pub excluded_performer_fields: Vec<String>,
    /// Duration window, in seconds, for a close match
    pub close_match_seconds: u32,
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            excluded_performer_fields: Vec::new(),
            close_match_seconds: DurationRanker::DEFAULT_CLOSE_MATCH_SECONDS,
        }
    }
}

impl TaggerConfig {
    /// Default config file location, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("scene-tagger").join("config.json"))
    }

    /// Load config from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from an explicit path, or from the default location when it exists.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!("Loading config from {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Ranker using the configured close-match window
    pub fn ranker(&self) -> DurationRanker {
        DurationRanker::new(self.close_match_seconds)
    }
}
