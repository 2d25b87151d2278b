use crate::state::core::SliceState;

/// Request lifecycle flags and the auth token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub is_loading: bool,
    pub has_errored: bool,
    pub is_editable: bool,
    /// Opaque token string, empty until a login succeeds.
    pub token: String,
}

impl SliceState for SessionState {}
