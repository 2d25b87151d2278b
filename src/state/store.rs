//! The store: owns the state tree and applies actions in dispatch order.

use tracing::debug;

use crate::state::app::{reduce, AppAction, AppState};
use crate::state::core::Action;

/// Single-owner store. Dispatch is synchronous; actions are applied in
/// the order they arrive, one root reduction per action.
#[derive(Debug, Default)]
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a pre-built state, e.g. restored from a previous run.
    pub fn with_state(state: AppState) -> Self {
        Self { state }
    }

    /// Apply one action and replace the current state with the result.
    pub fn dispatch(&mut self, action: impl Into<AppAction>) {
        let action = action.into();
        debug!(action = action.kind(), "dispatch");
        self.state = reduce(std::mem::take(&mut self.state), action);
    }

    /// The current state tree.
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
