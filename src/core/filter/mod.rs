//! # Filter Module
//!
//! Narrows a normalized performer down to the fields offered for submission,
//! dropping the ones the user excluded.
//!
//! Only the thirteen [`PerformerField`]s take part; images, links and the
//! remaining descriptive fields are not part of a [`PerformerSubmission`].

use crate::core::normalize::{Gender, NormalizedPerformer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Performer fields a user can exclude from submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformerField {
    Name,
    Aliases,
    Gender,
    Birthdate,
    Ethnicity,
    Country,
    EyeColor,
    Height,
    Measurements,
    FakeTits,
    CareerLength,
    Tattoos,
    Piercings,
}

impl PerformerField {
    pub const ALL: [PerformerField; 13] = [
        PerformerField::Name,
        PerformerField::Aliases,
        PerformerField::Gender,
        PerformerField::Birthdate,
        PerformerField::Ethnicity,
        PerformerField::Country,
        PerformerField::EyeColor,
        PerformerField::Height,
        PerformerField::Measurements,
        PerformerField::FakeTits,
        PerformerField::CareerLength,
        PerformerField::Tattoos,
        PerformerField::Piercings,
    ];

    /// Field name as used in exclusion lists
    pub fn as_str(&self) -> &'static str {
        match self {
            PerformerField::Name => "name",
            PerformerField::Aliases => "aliases",
            PerformerField::Gender => "gender",
            PerformerField::Birthdate => "birthdate",
            PerformerField::Ethnicity => "ethnicity",
            PerformerField::Country => "country",
            PerformerField::EyeColor => "eye_color",
            PerformerField::Height => "height",
            PerformerField::Measurements => "measurements",
            PerformerField::FakeTits => "fake_tits",
            PerformerField::CareerLength => "career_length",
            PerformerField::Tattoos => "tattoos",
            PerformerField::Piercings => "piercings",
        }
    }
}

impl fmt::Display for PerformerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PerformerField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PerformerField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("unknown performer field: {}", s))
    }
}

/// The submission-ready subset of a performer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformerSubmission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
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
}

impl PerformerSubmission {
    /// Number of fields that survived filtering
    pub fn field_count(&self) -> usize {
        let strings = [
            &self.name,
            &self.aliases,
            &self.birthdate,
            &self.ethnicity,
            &self.country,
            &self.eye_color,
            &self.height,
            &self.measurements,
            &self.fake_tits,
            &self.career_length,
            &self.tattoos,
            &self.piercings,
        ];
        strings.iter().filter(|v| v.is_some()).count() + usize::from(self.gender.is_some())
    }
}

struct Exclusions(Vec<PerformerField>);

impl Exclusions {
    fn new<S: AsRef<str>>(names: &[S]) -> Self {
        let fields = names
            .iter()
            .filter_map(|name| match name.as_ref().parse::<PerformerField>() {
                Ok(field) => Some(field),
                Err(e) => {
                    tracing::debug!("Ignoring exclusion: {}", e);
                    None
                }
            })
            .collect();
        Self(fields)
    }

    fn allows(&self, field: PerformerField) -> bool {
        !self.0.contains(&field)
    }

    fn keep(&self, field: PerformerField, value: Option<&str>) -> Option<String> {
        value
            .filter(|v| !v.is_empty() && self.allows(field))
            .map(str::to_string)
    }
}

/// Build the submission for a performer.
///
/// A field is kept when it is not excluded and holds a non-empty value.
pub fn filter_performer<S: AsRef<str>>(
    performer: &NormalizedPerformer,
    excluded_fields: &[S],
) -> PerformerSubmission {
    let excluded = Exclusions::new(excluded_fields);

    PerformerSubmission {
        name: excluded.keep(PerformerField::Name, Some(performer.name.as_str())),
        aliases: excluded.keep(PerformerField::Aliases, performer.aliases.as_deref()),
        gender: Some(performer.gender).filter(|_| excluded.allows(PerformerField::Gender)),
        birthdate: excluded.keep(PerformerField::Birthdate, performer.birthdate.as_deref()),
        ethnicity: excluded.keep(PerformerField::Ethnicity, performer.ethnicity.as_deref()),
        country: excluded.keep(PerformerField::Country, performer.country.as_deref()),
        eye_color: excluded.keep(PerformerField::EyeColor, performer.eye_color.as_deref()),
        height: excluded.keep(PerformerField::Height, performer.height.as_deref()),
        measurements: excluded.keep(
            PerformerField::Measurements,
            performer.measurements.as_deref(),
        ),
        fake_tits: excluded.keep(PerformerField::FakeTits, performer.fake_tits.as_deref()),
        career_length: excluded.keep(
            PerformerField::CareerLength,
            performer.career_length.as_deref(),
        ),
        tattoos: excluded.keep(PerformerField::Tattoos, performer.tattoos.as_deref()),
        piercings: excluded.keep(PerformerField::Piercings, performer.piercings.as_deref()),
    }
}
