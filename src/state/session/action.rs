use crate::state::core::Action;

/// Actions on the session flags. Each variant replaces its field
/// wholesale.
#[derive(Debug, Clone)]
pub enum SessionAction {
    SetLoading(bool),
    SetErrored(bool),
    SetEditable(bool),
    SetToken(String),
}

impl Action for SessionAction {
    fn kind(&self) -> &'static str {
        match self {
            SessionAction::SetLoading(_) => "is_loading",
            SessionAction::SetErrored(_) => "has_errored",
            SessionAction::SetEditable(_) => "is_editable",
            SessionAction::SetToken(_) => "set_token",
        }
    }
}
