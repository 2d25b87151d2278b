use crate::state::core::Action;

/// Actions on the search controls. Each variant replaces its field
/// wholesale and leaves the other fields untouched.
#[derive(Debug, Clone)]
pub enum SearchAction {
    SetLocale(String),
    SetSearch(String),
    ToggleShowingMentors(bool),
}

impl Action for SearchAction {
    fn kind(&self) -> &'static str {
        match self {
            SearchAction::SetLocale(_) => "set_locale",
            SearchAction::SetSearch(_) => "set_search",
            SearchAction::ToggleShowingMentors(_) => "toggle_showing_mentors",
        }
    }
}
