use crate::model::Mentor;
use crate::state::core::Action;

/// Actions on the mentor detail modal.
///
/// Both variants replace the modal wholesale; `AddMentees` carries the
/// same mentor with its mentee list attached and exists to keep the
/// intent of the two call sites distinct.
#[derive(Debug, Clone)]
pub enum ModalAction {
    Set(Mentor),
    AddMentees(Mentor),
}

impl Action for ModalAction {
    fn kind(&self) -> &'static str {
        match self {
            ModalAction::Set(_) => "set_mentor_modal",
            ModalAction::AddMentees(_) => "add_modal_mentees",
        }
    }
}
