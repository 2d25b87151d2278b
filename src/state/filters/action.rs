use crate::state::core::Action;

use super::state::MentorFilters;

/// Actions on the mentor search facets.
#[derive(Debug, Clone)]
pub enum FilterAction {
    /// Replace the facet set wholesale.
    Change(MentorFilters),
}

impl Action for FilterAction {
    fn kind(&self) -> &'static str {
        match self {
            FilterAction::Change(_) => "change_mentor_filters",
        }
    }
}
