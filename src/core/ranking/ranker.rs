//! Duration proximity comparator.

use crate::core::normalize::NormalizedScene;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// How well a scene's durations match a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationMatch {
    /// Durations (scene or fingerprint) within the close-match window
    pub close_matches: usize,
    /// Smallest absolute difference from the target, in seconds
    pub closest_difference: u32,
}

impl DurationMatch {
    pub fn is_close(&self) -> bool {
        self.close_matches > 0
    }

    /// Rank two matches: close matches win by count, otherwise the nearer
    /// duration wins.
    pub fn rank(&self, other: &DurationMatch) -> Ordering {
        if self.is_close() || other.is_close() {
            other.close_matches.cmp(&self.close_matches)
        } else {
            self.closest_difference.cmp(&other.closest_difference)
        }
    }
}

/// Orders candidate scenes by how closely their durations match a target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationRanker {
    /// Maximum difference, in seconds, that still counts as a close match
    close_match_seconds: u32,
}

impl DurationRanker {
    pub const DEFAULT_CLOSE_MATCH_SECONDS: u32 = 5;

    pub fn new(close_match_seconds: u32) -> Self {
        Self {
            close_match_seconds,
        }
    }

    pub fn close_match_seconds(&self) -> u32 {
        self.close_match_seconds
    }

    /// Score a scene against the target.
    ///
    /// The scene's own duration always contributes, so the difference set is
    /// never empty.
    pub fn score(&self, scene: &NormalizedScene, target: u32) -> DurationMatch {
        let differences = std::iter::once(scene.duration)
            .chain(scene.fingerprints.iter().map(|f| f.duration))
            .map(|duration| duration.abs_diff(target));

        let mut result = DurationMatch {
            close_matches: 0,
            closest_difference: u32::MAX,
        };
        for difference in differences {
            if difference <= self.close_match_seconds {
                result.close_matches += 1;
            }
            result.closest_difference = result.closest_difference.min(difference);
        }
        result
    }

    /// Compare two scenes. Without a target (or a zero target) every pair is equal.
    pub fn compare(
        &self,
        a: &NormalizedScene,
        b: &NormalizedScene,
        target: Option<u32>,
    ) -> Ordering {
        match active_target(target) {
            Some(target) => self.score(a, target).rank(&self.score(b, target)),
            None => Ordering::Equal,
        }
    }

    /// Sort scenes best match first. The sort is stable, so scenes that rank
    /// equally keep their input order.
    pub fn sort<'a>(
        &self,
        scenes: &'a mut [NormalizedScene],
        target: Option<u32>,
    ) -> &'a mut [NormalizedScene] {
        let Some(target) = active_target(target) else {
            return scenes;
        };

        tracing::trace!(
            "Ranking {} scenes against {}s (window {}s)",
            scenes.len(),
            target,
            self.close_match_seconds
        );
        scenes.sort_by(|a, b| self.score(a, target).rank(&self.score(b, target)));
        scenes
    }
}

impl Default for DurationRanker {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CLOSE_MATCH_SECONDS)
    }
}

fn active_target(target: Option<u32>) -> Option<u32> {
    target.filter(|t| *t > 0)
}
