use crate::model::Student;
use crate::state::core::Action;

/// Actions on the student collection.
#[derive(Debug, Clone)]
pub enum StudentAction {
    /// Replace the collection wholesale.
    Set(Vec<Student>),
    /// Swap the entry with the matching id for this student.
    /// No-op when no entry matches.
    UpdateChanged(Student),
    /// Mark the student as matched: `active` becomes false and
    /// `matched` becomes true. All other fields and entries unchanged.
    MakeInactive { student_id: u64 },
}

impl Action for StudentAction {
    fn kind(&self) -> &'static str {
        match self {
            StudentAction::Set(_) => "set_students",
            StudentAction::UpdateChanged(_) => "update_changed_student",
            StudentAction::MakeInactive { .. } => "make_student_inactive",
        }
    }
}
