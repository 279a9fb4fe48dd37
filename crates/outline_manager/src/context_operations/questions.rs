//! Question list operations

use deck_core::QuestionConfig;

use crate::context::BuilderContext;

impl BuilderContext {
    /// Replace a section's question list.
    pub fn update_section_questions(
        &mut self,
        section_id: &str,
        questions: Vec<QuestionConfig>,
    ) {
        self.with_section(section_id, "update_section_questions", |section| {
            section.questions = questions;
        });
    }

    /// Replace the questions asked for every generation.
    pub fn update_global_questions(&mut self, questions: Vec<QuestionConfig>) {
        self.agent.global_questions = questions;
        self.mark_dirty();
        tracing::debug!(session_id = %self.id, "update_global_questions");
    }

    /// Replace the questions driving knowledge-source search.
    pub fn update_knowledge_questions(&mut self, questions: Vec<QuestionConfig>) {
        self.agent.knowledge_questions = questions;
        self.mark_dirty();
        tracing::debug!(session_id = %self.id, "update_knowledge_questions");
    }
}
