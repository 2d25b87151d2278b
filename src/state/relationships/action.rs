use crate::model::Relationship;
use crate::state::core::Action;

/// Actions on the relationship collection.
#[derive(Debug, Clone)]
pub enum RelationshipAction {
    Set(Vec<Relationship>),
}

impl Action for RelationshipAction {
    fn kind(&self) -> &'static str {
        match self {
            RelationshipAction::Set(_) => "set_relationships",
        }
    }
}
