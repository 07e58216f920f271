//! # Normalize Module
//!
//! Adapts loosely-typed provider records into the strict shapes the rest of
//! the application works with.
//!
//! ## Field rules
//! - Provider identifiers are required; a missing one is a [`NormalizeError`]
//! - `name`, `title` and `date` default to an empty string
//! - Other descriptive strings are `None` when null, empty or blank
//! - `ethnicity`, `eye_color`, `fake_tits`, `tattoos` and `piercings` are title-cased
//! - `country` goes through a [`CountryLookup`]
//! - `gender` defaults to [`Gender::Female`]
//!
//! ## Example
//! ```rust
//! use scene_tagger::core::normalize::{RecordNormalizer, ScrapedScene};
//!
//! let raw: Vec<Option<ScrapedScene>> = serde_json::from_str(
//!     r#"[null, {"remote_site_id": "s-1", "studio": {"remote_site_id": "st-1"}}]"#,
//! ).unwrap();
//! let scenes = RecordNormalizer::default().normalize_scenes(Some(raw.as_slice())).unwrap();
//! assert_eq!(scenes.len(), 1);
//! ```

mod country;
mod provider;
mod text;
mod types;

pub use country::{CountryLookup, CountryTable};
pub use provider::{ScrapedPerformer, ScrapedScene, ScrapedStudio, ScrapedTag};
pub use text::to_title_case;
pub use types::{
    Fingerprint, Gender, NormalizedPerformer, NormalizedScene, NormalizedStudio, NormalizedTag,
    SceneBatch,
};

use crate::error::{NormalizeError, RecordKind};
use text::present;

/// Maps provider records to normalized records
pub struct RecordNormalizer {
    countries: Box<dyn CountryLookup>,
}

impl RecordNormalizer {
    /// Create a normalizer backed by the built-in country table
    pub fn new() -> Self {
        Self::with_countries(CountryTable::new())
    }

    /// Create a normalizer with a custom country lookup
    pub fn with_countries(countries: impl CountryLookup + 'static) -> Self {
        Self {
            countries: Box::new(countries),
        }
    }

    pub fn normalize_studio(
        &self,
        studio: &ScrapedStudio,
    ) -> Result<NormalizedStudio, NormalizeError> {
        let stash_id = require_identifier(
            &studio.remote_site_id,
            RecordKind::Studio,
            &studio.name,
        )?;

        Ok(NormalizedStudio {
            id: present(&studio.stored_id).map(str::to_string),
            stash_id,
            name: studio.name.clone().unwrap_or_default(),
            url: present(&studio.url).map(str::to_string),
        })
    }

    pub fn normalize_tag(&self, tag: &ScrapedTag) -> NormalizedTag {
        NormalizedTag {
            id: present(&tag.stored_id).map(str::to_string),
            name: tag.name.clone().unwrap_or_default(),
        }
    }

    pub fn normalize_tags(&self, tags: &[ScrapedTag]) -> Vec<NormalizedTag> {
        tags.iter().map(|t| self.normalize_tag(t)).collect()
    }

    pub fn normalize_performer(
        &self,
        performer: &ScrapedPerformer,
    ) -> Result<NormalizedPerformer, NormalizeError> {
        let stash_id = require_identifier(
            &performer.remote_site_id,
            RecordKind::Performer,
            &performer.name,
        )?;

        let copied = |value: &Option<String>| present(value).map(str::to_string);
        let title_cased = |value: &Option<String>| present(value).map(to_title_case);

        Ok(NormalizedPerformer {
            id: copied(&performer.stored_id),
            stash_id,
            name: performer.name.clone().unwrap_or_default(),
            gender: performer.gender.unwrap_or_default(),
            url: copied(&performer.url),
            twitter: copied(&performer.twitter),
            instagram: copied(&performer.instagram),
            birthdate: copied(&performer.birthdate),
            ethnicity: title_cased(&performer.ethnicity),
            country: present(&performer.country)
                .and_then(|code| self.countries.display_name(code))
                .filter(|name| !name.trim().is_empty()),
            eye_color: title_cased(&performer.eye_color),
            height: copied(&performer.height),
            measurements: copied(&performer.measurements),
            fake_tits: title_cased(&performer.fake_tits),
            career_length: copied(&performer.career_length),
            tattoos: title_cased(&performer.tattoos),
            piercings: title_cased(&performer.piercings),
            aliases: copied(&performer.aliases),
            images: performer.images.clone().unwrap_or_default(),
            details: copied(&performer.details),
            death_date: copied(&performer.death_date),
            hair_color: copied(&performer.hair_color),
            weight: copied(&performer.weight),
        })
    }

    pub fn normalize_performers(
        &self,
        performers: &[ScrapedPerformer],
    ) -> Result<Vec<NormalizedPerformer>, NormalizeError> {
        performers
            .iter()
            .map(|p| self.normalize_performer(p))
            .collect()
    }

    /// Fingerprints pass through unchanged; a scene without any gets an empty list
    pub fn normalize_fingerprints(&self, fingerprints: Option<&[Fingerprint]>) -> Vec<Fingerprint> {
        fingerprints.map(<[Fingerprint]>::to_vec).unwrap_or_default()
    }

    pub fn normalize_scene(&self, scene: &ScrapedScene) -> Result<NormalizedScene, NormalizeError> {
        let stash_id = require_identifier(&scene.remote_site_id, RecordKind::Scene, &scene.title)?;

        let studio = scene
            .studio
            .as_ref()
            .ok_or(NormalizeError::MissingIdentifier {
                record: RecordKind::Studio,
                name: None,
            })?;

        Ok(NormalizedScene {
            stash_id,
            title: scene.title.clone().unwrap_or_default(),
            date: scene.date.clone().unwrap_or_default(),
            duration: scene.duration.unwrap_or(0),
            details: present(&scene.details).map(str::to_string),
            url: present(&scene.url).map(str::to_string),
            studio: self.normalize_studio(studio)?,
            images: scene_images(scene),
            tags: self.normalize_tags(scene.tags.as_deref().unwrap_or_default()),
            performers: self
                .normalize_performers(scene.performers.as_deref().unwrap_or_default())?,
            fingerprints: self.normalize_fingerprints(scene.fingerprints.as_deref()),
        })
    }

    /// Normalize a batch of scenes, stopping at the first record that fails.
    ///
    /// Null entries are skipped; a missing batch is treated as empty.
    pub fn normalize_scenes(
        &self,
        scenes: Option<&[Option<ScrapedScene>]>,
    ) -> Result<Vec<NormalizedScene>, NormalizeError> {
        let scenes = present_scenes(scenes);
        scenes.map(|s| self.normalize_scene(s)).collect()
    }

    /// Normalize a batch of scenes, collecting failures instead of stopping
    pub fn normalize_scenes_lenient(&self, scenes: Option<&[Option<ScrapedScene>]>) -> SceneBatch {
        let mut batch = SceneBatch::default();

        for scene in present_scenes(scenes) {
            match self.normalize_scene(scene) {
                Ok(normalized) => batch.scenes.push(normalized),
                Err(e) => {
                    tracing::warn!("Skipping provider scene: {}", e);
                    batch.errors.push(e);
                }
            }
        }

        batch
    }
}

impl Default for RecordNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

fn present_scenes(
    scenes: Option<&[Option<ScrapedScene>]>,
) -> impl Iterator<Item = &ScrapedScene> {
    let scenes = scenes.unwrap_or_default();
    let nulls = scenes.iter().filter(|s| s.is_none()).count();
    if nulls > 0 {
        tracing::debug!("Ignoring {} null scene entries", nulls);
    }
    scenes.iter().flatten()
}

/// Non-blank entries of `images` when there are any, otherwise the single `image`
fn scene_images(scene: &ScrapedScene) -> Vec<String> {
    let listed: Vec<String> = scene
        .images
        .iter()
        .flatten()
        .filter(|image| !image.trim().is_empty())
        .cloned()
        .collect();

    if !listed.is_empty() {
        return listed;
    }

    present(&scene.image)
        .map(|image| vec![image.to_string()])
        .unwrap_or_default()
}

fn require_identifier(
    id: &Option<String>,
    record: RecordKind,
    name: &Option<String>,
) -> Result<String, NormalizeError> {
    present(id)
        .map(str::to_string)
        .ok_or_else(|| NormalizeError::MissingIdentifier {
            record,
            name: name.clone(),
        })
}
