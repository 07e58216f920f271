//! # Ranking Module
//!
//! Orders candidate scene matches by how closely their durations match the
//! local file.
//!
//! A scene is scored on its own duration plus every fingerprint duration the
//! provider reports. Differences of at most 5 seconds (configurable) are close
//! matches:
//! - scenes with close matches rank above scenes without, more matches first
//! - scenes without close matches rank by their nearest duration
//!
//! ## Example
//! ```
//! use scene_tagger::core::normalize::{RecordNormalizer, ScrapedScene};
//! use scene_tagger::core::sort_scenes_by_duration;
//!
//! let raw: Vec<Option<ScrapedScene>> = serde_json::from_str(r#"[
//!     {"remote_site_id": "far", "duration": 2400, "studio": {"remote_site_id": "st-1"}},
//!     {"remote_site_id": "near", "duration": 1810, "studio": {"remote_site_id": "st-1"}}
//! ]"#).unwrap();
//! let mut scenes = RecordNormalizer::new()
//!     .normalize_scenes(Some(raw.as_slice()))
//!     .unwrap();
//!
//! let ranked = sort_scenes_by_duration(&mut scenes, Some(1812));
//! assert_eq!(ranked[0].stash_id, "near");
//! assert_eq!(ranked[1].stash_id, "far");
//! ```

mod ranker;

pub use ranker::{DurationMatch, DurationRanker};

use crate::core::normalize::NormalizedScene;

/// Sort scenes by duration proximity using the default 5 second window.
///
/// Sorts in place and returns the same slice. With no target the order is
/// left untouched.
pub fn sort_scenes_by_duration(
    scenes: &mut [NormalizedScene],
    target_duration: Option<u32>,
) -> &mut [NormalizedScene] {
    DurationRanker::default().sort(scenes, target_duration)
}
