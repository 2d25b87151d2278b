mod action;
mod reducer;
mod state;

pub use action::SessionAction;
pub use reducer::SessionReducer;
pub use state::SessionState;
