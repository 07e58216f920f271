//! # Core Module
//!
//! The UI-agnostic data shaping used by the tagger.
//!
//! ## Modules
//! - `path` - Splits media file paths into match-relevant pieces
//! - `normalize` - Adapts provider records into normalized records
//! - `ranking` - Orders candidate scenes by duration proximity
//! - `filter` - Narrows performers to the fields offered for submission

pub mod filter;
pub mod normalize;
pub mod path;
pub mod ranking;

// Re-export commonly used types
pub use filter::{filter_performer, PerformerField, PerformerSubmission};
pub use normalize::{
    NormalizedPerformer, NormalizedScene, NormalizedStudio, NormalizedTag, RecordNormalizer,
};
pub use path::{parse_path, ParsedPath};
pub use ranking::{sort_scenes_by_duration, DurationRanker};
