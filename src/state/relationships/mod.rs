mod action;
mod reducer;
mod state;

pub use action::RelationshipAction;
pub use reducer::RelationshipsReducer;
pub use state::RelationshipsState;
