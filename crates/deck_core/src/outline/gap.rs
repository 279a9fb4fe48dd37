//! AiGap - a marker where the generator may insert sections

use serde::{Deserialize, Serialize};

use crate::ids::IdGenerator;

/// A structural marker in the outline: the AI may add sections here at
/// generation time. Carries no slides, title, or children.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AiGap {
    /// Unique identifier
    pub id: String,

    /// Optional guidance for what to insert
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub guidance: String,
}

impl AiGap {
    /// Create a new gap with empty guidance.
    pub fn new(ids: &mut IdGenerator) -> Self {
        Self {
            id: ids.next_gap_id(),
            guidance: String::new(),
        }
    }
}
