use crate::state::core::Reducer;

use super::action::RelationshipAction;
use super::state::RelationshipsState;

pub struct RelationshipsReducer;

impl Reducer for RelationshipsReducer {
    type State = RelationshipsState;
    type Action = RelationshipAction;

    fn reduce(_state: Self::State, action: Self::Action) -> Self::State {
        match action {
            RelationshipAction::Set(relationships) => relationships,
        }
    }
}
