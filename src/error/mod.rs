//! # Error Module
//!
//! Typed errors for the scene tagger.
//!
//! ## Design Principles
//! - **Never panic** on provider data - return errors instead
//! - **Include context** - which record, which path, what went wrong
//! - **Distinct from empty** - a failed import is never reported as an empty result

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum TaggerError {
    #[error("Path error: {0}")]
    Path(#[from] PathError),

    #[error("Normalization error: {0}")]
    Normalize(#[from] NormalizeError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Could not read provider records from {source_name}: {reason}")]
    Input { source_name: String, reason: String },

    #[error("Failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Errors raised while parsing a file path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("Path has no usable segments: {input:?}")]
    Empty { input: String },
}

/// Kind of provider record, used to give errors context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Scene,
    Studio,
    Performer,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Scene => write!(f, "scene"),
            RecordKind::Studio => write!(f, "studio"),
            RecordKind::Performer => write!(f, "performer"),
        }
    }
}

/// Errors raised while normalizing provider records
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("Unable to import {record}{}: provider identifier is missing", describe_name(.name))]
    MissingIdentifier {
        record: RecordKind,
        name: Option<String>,
    },
}

fn describe_name(name: &Option<String>) -> String {
    match name.as_deref() {
        Some(n) if !n.trim().is_empty() => format!(" \"{}\"", n),
        _ => String::new(),
    }
}

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, TaggerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_identifier_names_the_record() {
        let error = NormalizeError::MissingIdentifier {
            record: RecordKind::Performer,
            name: Some("Jane Doe".to_string()),
        };
        let message = error.to_string();
        assert!(message.contains("performer"));
        assert!(message.contains("\"Jane Doe\""));
        assert!(message.starts_with("Unable to import"));
    }

    #[test]
    fn missing_identifier_without_name() {
        let error = NormalizeError::MissingIdentifier {
            record: RecordKind::Studio,
            name: None,
        };
        assert_eq!(
            error.to_string(),
            "Unable to import studio: provider identifier is missing"
        );
    }

    #[test]
    fn empty_path_error_includes_input() {
        let error = PathError::Empty {
            input: " / ".to_string(),
        };
        assert!(error.to_string().contains("\" / \""));
    }

    #[test]
    fn config_error_includes_path() {
        let error = ConfigError::Read {
            path: PathBuf::from("/etc/scene-tagger/config.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(error.to_string().contains("/etc/scene-tagger/config.json"));
    }

    #[test]
    fn sub_errors_convert_into_top_level() {
        let error: TaggerError = PathError::Empty {
            input: String::new(),
        }
        .into();
        assert!(matches!(error, TaggerError::Path(_)));
    }
}
