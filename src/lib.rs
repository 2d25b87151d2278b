//! Core of a mentor-matching application: an immutable state tree with
//! pure per-slice reducers, and a thin REST client for the mentor API.
//!
//! The view layer (rendering, routing) is not part of this crate; it is
//! expected to dispatch actions into [`state::Store`] and read the
//! resulting snapshots.

pub mod api;
pub mod config;
pub mod model;
pub mod state;
pub mod trace;
