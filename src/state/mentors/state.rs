use crate::model::Mentor;
use crate::state::core::SliceState;

/// Ordered mentor collection, unique by id. Default is empty.
pub type MentorsState = Vec<Mentor>;

impl SliceState for MentorsState {}
