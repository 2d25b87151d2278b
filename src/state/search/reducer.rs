use crate::state::core::Reducer;

use super::action::SearchAction;
use super::state::SearchState;

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Action = SearchAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            SearchAction::SetLocale(locale) => SearchState { locale, ..state },
            SearchAction::SetSearch(search_term) => SearchState {
                search_term,
                ..state
            },
            SearchAction::ToggleShowingMentors(showing_all_mentors) => SearchState {
                showing_all_mentors,
                ..state
            },
        }
    }
}
