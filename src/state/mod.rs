//! The application state tree: per-slice states, closed action enums,
//! pure reducers, and the store that ties them together.

mod app;
pub mod collection;
pub mod core;
pub mod filters;
pub mod mentors;
pub mod modal;
pub mod relationships;
pub mod search;
pub mod session;
mod store;
pub mod students;

pub use app::{reduce, AppAction, AppState};
pub use store::Store;
