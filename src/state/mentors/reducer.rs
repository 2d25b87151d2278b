use crate::state::collection::replace_by_key;
use crate::state::core::Reducer;

use super::action::MentorAction;
use super::state::MentorsState;

pub struct MentorsReducer;

impl Reducer for MentorsReducer {
    type State = MentorsState;
    type Action = MentorAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            MentorAction::Set(mentors) => mentors,
            MentorAction::UpdateChanged(mentor) => replace_by_key(state, mentor),
        }
    }
}
