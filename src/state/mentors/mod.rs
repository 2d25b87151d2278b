mod action;
mod reducer;
mod state;

pub use action::MentorAction;
pub use reducer::MentorsReducer;
pub use state::MentorsState;
