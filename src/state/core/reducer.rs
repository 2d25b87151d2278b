//! Reducer trait for the state layer.

use super::action::Action;
use super::state::SliceState;

/// Reducer transforms one slice of state based on its action family.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> State
pub trait Reducer {
    /// The slice state type this reducer operates on.
    type State: SliceState;

    /// The action family this reducer handles.
    type Action: Action;

    /// Process an action and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}
