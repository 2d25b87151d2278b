use crate::state::core::Reducer;

use super::action::ModalAction;
use super::state::ModalState;

pub struct ModalReducer;

impl Reducer for ModalReducer {
    type State = ModalState;
    type Action = ModalAction;

    fn reduce(_state: Self::State, action: Self::Action) -> Self::State {
        match action {
            ModalAction::Set(mentor) | ModalAction::AddMentees(mentor) => Some(mentor),
        }
    }
}
