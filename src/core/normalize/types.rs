//! Normalized record types handed to the UI and the submission path.

use crate::error::NormalizeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Performer gender as the provider enumerates it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    #[default]
    Female,
    TransgenderMale,
    TransgenderFemale,
    Intersex,
    NonBinary,
}

impl Gender {
    /// Provider wire name (`TRANSGENDER_FEMALE`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::TransgenderMale => "TRANSGENDER_MALE",
            Gender::TransgenderFemale => "TRANSGENDER_FEMALE",
            Gender::Intersex => "INTERSEX",
            Gender::NonBinary => "NON_BINARY",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::TransgenderMale => "Transgender Male",
            Gender::TransgenderFemale => "Transgender Female",
            Gender::Intersex => "Intersex",
            Gender::NonBinary => "Non-Binary",
        };
        write!(f, "{}", label)
    }
}

/// Content fingerprint reported by the provider for a scene
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fingerprint {
    pub hash: String,
    pub algorithm: String,
    /// Duration in seconds of the file this fingerprint was taken from
    pub duration: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedTag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedStudio {
    /// Local id when the studio is already stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub stash_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A performer as presented for review.
///
/// Every optional string is either a non-blank value or `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedPerformer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub stash_id: String,
    pub name: String,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ethnicity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eye_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurements: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fake_tits: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career_length: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tattoos: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub piercings: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hair_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}

impl NormalizedPerformer {
    /// All optional descriptive strings, paired with their field names
    pub fn optional_fields(&self) -> [(&'static str, Option<&str>); 19] {
        [
            ("id", self.id.as_deref()),
            ("url", self.url.as_deref()),
            ("twitter", self.twitter.as_deref()),
            ("instagram", self.instagram.as_deref()),
            ("birthdate", self.birthdate.as_deref()),
            ("ethnicity", self.ethnicity.as_deref()),
            ("country", self.country.as_deref()),
            ("eye_color", self.eye_color.as_deref()),
            ("height", self.height.as_deref()),
            ("measurements", self.measurements.as_deref()),
            ("fake_tits", self.fake_tits.as_deref()),
            ("career_length", self.career_length.as_deref()),
            ("tattoos", self.tattoos.as_deref()),
            ("piercings", self.piercings.as_deref()),
            ("aliases", self.aliases.as_deref()),
            ("details", self.details.as_deref()),
            ("death_date", self.death_date.as_deref()),
            ("hair_color", self.hair_color.as_deref()),
            ("weight", self.weight.as_deref()),
        ]
    }
}

/// A candidate scene match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedScene {
    pub stash_id: String,
    pub title: String,
    /// Release date as the provider formats it (ISO-like), or empty
    pub date: String,
    /// Duration in seconds, 0 when unknown
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub studio: NormalizedStudio,
    pub images: Vec<String>,
    pub tags: Vec<NormalizedTag>,
    pub performers: Vec<NormalizedPerformer>,
    pub fingerprints: Vec<Fingerprint>,
}

/// Result of normalizing a batch of scenes without stopping at failures
#[derive(Debug, Default)]
pub struct SceneBatch {
    /// Scenes that normalized successfully, in input order
    pub scenes: Vec<NormalizedScene>,
    /// Records that could not be imported (non-fatal)
    pub errors: Vec<NormalizeError>,
}

impl SceneBatch {
    /// True when every non-null input record was imported
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}
