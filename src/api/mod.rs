//! Thin REST client for the remote mentor-matching service.

mod clean;
mod client;
mod error;

pub use clean::{clean_mentor, clean_mentors, RawMentor};
pub use client::{ApiClient, NewMentor};
pub use error::ApiError;
