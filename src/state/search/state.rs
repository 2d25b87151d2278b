use crate::state::core::SliceState;

/// Search controls above the mentor list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    /// Selected locale, empty when no locale is selected.
    pub locale: String,
    /// Free-text search input, empty when cleared.
    pub search_term: String,
    /// Whether the unfiltered "all mentors" view is active.
    pub showing_all_mentors: bool,
}

impl SliceState for SearchState {}
