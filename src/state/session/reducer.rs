use crate::state::core::Reducer;

use super::action::SessionAction;
use super::state::SessionState;

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Action = SessionAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            SessionAction::SetLoading(is_loading) => SessionState { is_loading, ..state },
            SessionAction::SetErrored(has_errored) => SessionState {
                has_errored,
                ..state
            },
            SessionAction::SetEditable(is_editable) => SessionState {
                is_editable,
                ..state
            },
            SessionAction::SetToken(token) => SessionState { token, ..state },
        }
    }
}
