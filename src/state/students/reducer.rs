use crate::state::collection::{replace_by_key, update_by_key};
use crate::state::core::Reducer;

use super::action::StudentAction;
use super::state::StudentsState;

pub struct StudentsReducer;

impl Reducer for StudentsReducer {
    type State = StudentsState;
    type Action = StudentAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            StudentAction::Set(students) => students,
            StudentAction::UpdateChanged(student) => replace_by_key(state, student),
            StudentAction::MakeInactive { student_id } => {
                update_by_key(state, student_id, |mut student| {
                    student.active = false;
                    student.matched = true;
                    student
                })
            }
        }
    }
}
