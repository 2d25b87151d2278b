use serde::{Deserialize, Serialize};

/// Join record pairing one mentor and one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub mentor_id: u64,
    pub student_id: u64,
    pub active: bool,
}
