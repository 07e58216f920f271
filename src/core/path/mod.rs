//! # Path Module
//!
//! Splits a media file path into the pieces the tagger matches on.
//!
//! Paths are lower-cased up front so downstream matching is case-insensitive.
//! Windows paths (`c:\...` or `\\server\...`) are folded onto `/` separators.
//!
//! ## Example
//! ```rust
//! use scene_tagger::core::path::parse_path;
//!
//! let parsed = parse_path("C:\\Shows\\Foo\\Bar\\scene.mp4").unwrap();
//! assert_eq!(parsed.directory_segments, vec!["shows", "foo"]);
//! assert_eq!(parsed.file_base_name, "scene");
//! assert_eq!(parsed.extension, ".mp4");
//! ```

use crate::error::PathError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static WINDOWS_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z]:|\\\\)").expect("windows path pattern"));
static DRIVE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]:").expect("drive prefix pattern"));
static EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[a-z0-9]*$").expect("extension pattern"));

/// A file path split into grouping folders, base name and extension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedPath {
    /// Folders above the file's immediate parent, outermost first
    pub directory_segments: Vec<String>,
    /// Filename without its extension
    pub file_base_name: String,
    /// Extension including the leading dot, or empty
    pub extension: String,
}

/// Parse a file path.
///
/// The last two segments (parent folder and filename) are never part of
/// `directory_segments`; paths shallower than three segments yield none.
pub fn parse_path(file_path: &str) -> Result<ParsedPath, PathError> {
    let path = file_path.to_lowercase();

    let normalized = if WINDOWS_PATH.is_match(&path) {
        DRIVE_PREFIX.replace(&path, "").replace('\\', "/")
    } else {
        path
    };

    let mut segments: Vec<String> = normalized
        .split('/')
        .filter(|segment| !segment.trim().is_empty())
        .map(str::to_string)
        .collect();

    let file_name = segments.pop().ok_or_else(|| PathError::Empty {
        input: file_path.to_string(),
    })?;

    let (file_base_name, extension) = match EXTENSION.find(&file_name) {
        Some(ext) => (
            file_name[..ext.start()].to_string(),
            ext.as_str().to_string(),
        ),
        None => (file_name, String::new()),
    };

    // `segments` no longer holds the filename, so drop just the parent folder
    let directory_segments = if segments.len() >= 2 {
        segments.truncate(segments.len() - 1);
        segments
    } else {
        Vec::new()
    };

    Ok(ParsedPath {
        directory_segments,
        file_base_name,
        extension,
    })
}
