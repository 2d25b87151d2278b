use serde::{Deserialize, Serialize};

use crate::model::Student;
use crate::state::collection::Keyed;

/// A volunteer professional profile.
///
/// `mentees` is only populated on the modal detail view; collection
/// entries usually carry `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mentor {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    pub preferences: Preferences,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentees: Option<Vec<Student>>,
}

impl Mentor {
    /// Returns a copy of this mentor with the given mentee list attached.
    pub fn with_mentees(mut self, mentees: Vec<Student>) -> Self {
        self.mentees = Some(mentees);
        self
    }
}

impl Keyed for Mentor {
    type Key = u64;

    fn key(&self) -> u64 {
        self.id
    }
}

/// The nested preference block on a mentor: a free-text title plus the
/// fixed set of matching facets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
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
