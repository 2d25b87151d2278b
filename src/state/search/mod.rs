mod action;
mod reducer;
mod state;

pub use action::SearchAction;
pub use reducer::SearchReducer;
pub use state::SearchState;
