//! Raw records as returned by the metadata provider.
//!
//! Every field is optional; the provider omits or nulls anything it does not
//! know. `stash_id`/`id` are accepted as aliases so an already normalized
//! record can be fed back through the normalizer.

use super::types::{Fingerprint, Gender};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapedStudio {
    #[serde(alias = "id")]
    pub stored_id: Option<String>,
    #[serde(alias = "stash_id")]
    pub remote_site_id: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapedTag {
    #[serde(alias = "id")]
    pub stored_id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapedPerformer {
    #[serde(alias = "id")]
    pub stored_id: Option<String>,
    #[serde(alias = "stash_id")]
    pub remote_site_id: Option<String>,
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub url: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub birthdate: Option<String>,
    pub ethnicity: Option<String>,
    /// ISO 3166-1 alpha-2 code
    pub country: Option<String>,
    pub eye_color: Option<String>,
    pub height: Option<String>,
    pub measurements: Option<String>,
    pub fake_tits: Option<String>,
    pub career_length: Option<String>,
    pub tattoos: Option<String>,
    pub piercings: Option<String>,
    pub aliases: Option<String>,
    pub images: Option<Vec<String>>,
    pub details: Option<String>,
    pub death_date: Option<String>,
    pub hair_color: Option<String>,
    pub weight: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapedScene {
    #[serde(alias = "stash_id")]
    pub remote_site_id: Option<String>,
    pub title: Option<String>,
    pub date: Option<String>,
    pub duration: Option<u32>,
    pub details: Option<String>,
    pub url: Option<String>,
    /// Single cover image
    pub image: Option<String>,
    /// Image list, as carried by an already normalized scene
    pub images: Option<Vec<String>>,
    pub studio: Option<ScrapedStudio>,
    pub tags: Option<Vec<ScrapedTag>>,
    pub performers: Option<Vec<ScrapedPerformer>>,
    pub fingerprints: Option<Vec<Fingerprint>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_accepts_nulls_and_missing_fields() {
        let scene: ScrapedScene = serde_json::from_str(
            r#"{"remote_site_id":"abc","title":null,"duration":1800,"studio":{"name":"Acme"}}"#,
        )
        .unwrap();

        assert_eq!(scene.remote_site_id.as_deref(), Some("abc"));
        assert!(scene.title.is_none());
        assert_eq!(scene.duration, Some(1800));
        assert_eq!(
            scene.studio.and_then(|s| s.name).as_deref(),
            Some("Acme")
        );
        assert!(scene.fingerprints.is_none());
    }

    #[test]
    fn normalized_names_are_accepted_as_aliases() {
        let performer: ScrapedPerformer =
            serde_json::from_str(r#"{"id":"12","stash_id":"p-1","name":"Jane"}"#).unwrap();

        assert_eq!(performer.stored_id.as_deref(), Some("12"));
        assert_eq!(performer.remote_site_id.as_deref(), Some("p-1"));
    }
}
