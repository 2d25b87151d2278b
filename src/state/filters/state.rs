use serde::{Deserialize, Serialize};

use crate::state::core::SliceState;

/// Active search facets. The facet set is closed, so a filter name that
/// does not exist is unrepresentable. Default is no facets active.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorFilters {
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

impl SliceState for MentorFilters {}

impl MentorFilters {
    /// True when no facet is active.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
