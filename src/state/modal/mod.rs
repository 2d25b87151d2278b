mod action;
mod reducer;
mod state;

pub use action::ModalAction;
pub use reducer::ModalReducer;
pub use state::ModalState;
