//! QuestionConfig - a single prompt the agent asks before generating

use serde::{Deserialize, Serialize};

use crate::ids::IdGenerator;

/// A question the agent asks the user; scope is determined by where the
/// question is stored (a section, or the agent's global/knowledge lists).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct QuestionConfig {
    /// Unique identifier
    pub id: String,

    /// The question text shown to the user
    pub question: String,

    /// Whether an answer is mandatory
    #[serde(default = "default_required")]
    pub required: bool,
}

fn default_required() -> bool {
    true
}

impl QuestionConfig {
    /// Create a new question with a fresh id.
    pub fn new(ids: &mut IdGenerator, question: impl Into<String>, required: bool) -> Self {
        Self {
            id: ids.next_question_id(),
            question: question.into(),
            required,
        }
    }
}
