//! Domain records shared between the state tree and the API layer.

mod mentor;
mod relationship;
mod student;

pub use mentor::{Mentor, Preferences};
pub use relationship::Relationship;
pub use student::Student;
