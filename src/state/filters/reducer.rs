use crate::state::core::Reducer;

use super::action::FilterAction;
use super::state::MentorFilters;

pub struct FiltersReducer;

impl Reducer for FiltersReducer {
    type State = MentorFilters;
    type Action = FilterAction;

    fn reduce(_state: Self::State, action: Self::Action) -> Self::State {
        match action {
            FilterAction::Change(filters) => filters,
        }
    }
}
