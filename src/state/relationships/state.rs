use crate::model::Relationship;
use crate::state::core::SliceState;

/// Ordered mentor/student join records. Default is empty.
pub type RelationshipsState = Vec<Relationship>;

impl SliceState for RelationshipsState {}
