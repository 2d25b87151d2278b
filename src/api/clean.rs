//! Shaping of raw wire records into [`Mentor`] values.
//!
//! The service exposes its mentor rows flat: identity and profile
//! columns next to the preference title and facet booleans. The state
//! layer wants the preference fields grouped under a nested block, so
//! cleaning lifts them into [`Preferences`].
//!
//! Contract: `id` and `name` are required and their absence fails JSON
//! decoding before cleaning runs; every preference field default-fills.

use serde::Deserialize;

use crate::model::{Mentor, Preferences};

/// A mentor row as the service sends it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMentor {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub back_end: bool,
    #[serde(default)]
    pub front_end: bool,
    #[serde(default)]
    pub female: bool,
    #[serde(default)]
    pub male: bool,
    #[serde(default)]
    pub lgbtq: bool,
    #[serde(default)]
    pub parent: bool,
    #[serde(default)]
    pub veteran: bool,
}

/// Shape one raw row into a [`Mentor`]. Total: every well-formed raw
/// record yields a well-formed mentor.
pub fn clean_mentor(raw: RawMentor) -> Mentor {
    Mentor {
        id: raw.id,
        name: raw.name,
        city: raw.city,
        locale: raw.locale,
        preferences: Preferences {
            title: raw.title,
            back_end: raw.back_end,
            front_end: raw.front_end,
            female: raw.female,
            male: raw.male,
            lgbtq: raw.lgbtq,
            parent: raw.parent,
            veteran: raw.veteran,
        },
        mentees: None,
    }
}

/// Shape a fetched collection, preserving order.
pub fn clean_mentors(raw: Vec<RawMentor>) -> Vec<Mentor> {
    raw.into_iter().map(clean_mentor).collect()
}
