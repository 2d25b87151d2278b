use serde::{Deserialize, Serialize};

use crate::state::collection::Keyed;

/// A program participant seeking mentorship.
///
/// `active` and `matched` are complementary: a student is either
/// active-and-unmatched or inactive-and-matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: u64,
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub matched: bool,
}

fn default_active() -> bool {
    true
}

impl Keyed for Student {
    type Key = u64;

    fn key(&self) -> u64 {
        self.id
    }
}
