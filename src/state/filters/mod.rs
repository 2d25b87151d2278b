mod action;
mod reducer;
mod state;

pub use action::FilterAction;
pub use reducer::FiltersReducer;
pub use state::MentorFilters;
