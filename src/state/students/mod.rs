mod action;
mod reducer;
mod state;

pub use action::StudentAction;
pub use reducer::StudentsReducer;
pub use state::StudentsState;
