use crate::model::Student;
use crate::state::core::SliceState;

/// Ordered student collection, unique by id. Default is empty.
pub type StudentsState = Vec<Student>;

impl SliceState for StudentsState {}
