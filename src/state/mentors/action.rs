use crate::model::Mentor;
use crate::state::core::Action;

/// Actions on the mentor collection.
#[derive(Debug, Clone)]
pub enum MentorAction {
    /// Replace the collection wholesale, typically with a fresh fetch.
    Set(Vec<Mentor>),
    /// Swap the entry with the matching id for this mentor.
    /// No-op when no entry matches.
    UpdateChanged(Mentor),
}

impl Action for MentorAction {
    fn kind(&self) -> &'static str {
        match self {
            MentorAction::Set(_) => "set_mentors",
            MentorAction::UpdateChanged(_) => "update_changed_mentor",
        }
    }
}
