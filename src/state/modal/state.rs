use crate::model::Mentor;
use crate::state::core::SliceState;

/// The mentor detail currently shown in the modal, or `None` when the
/// modal is closed. Not persisted; replaced wholesale on each update.
pub type ModalState = Option<Mentor>;

impl SliceState for ModalState {}
