//! Scalar metadata operations and the save boundary

use chrono::Utc;

use deck_core::{AgentStatus, PresentationAgent};

use crate::context::BuilderContext;
use crate::traits::SaveHost;

impl BuilderContext {
    /// Replace the agent's display name.
    pub fn update_name(&mut self, name: impl Into<String>) {
        self.agent.name = name.into();
        self.mark_dirty();
        tracing::debug!(session_id = %self.id, "update_name");
    }

    /// Replace the agent's description.
    pub fn update_description(&mut self, description: impl Into<String>) {
        self.agent.description = Some(description.into());
        self.mark_dirty();
        tracing::debug!(session_id = %self.id, "update_description");
    }

    /// Set the publication status directly.
    pub fn update_status(&mut self, status: AgentStatus) {
        self.agent.status = status;
        self.mark_dirty();
        tracing::debug!(session_id = %self.id, ?status, "update_status");
    }

    /// Select the presentation template; an empty id clears the choice.
    pub fn update_document_layout(&mut self, document_layout_id: &str) {
        self.agent.document_layout_id = if document_layout_id.is_empty() {
            None
        } else {
            Some(document_layout_id.to_string())
        };
        self.mark_dirty();
        tracing::debug!(session_id = %self.id, "update_document_layout");
    }

    /// Replace the targeted user groups; empty means all users.
    pub fn update_target_user_groups(&mut self, target_user_groups: Vec<String>) {
        self.agent.target_user_groups = target_user_groups;
        self.mark_dirty();
        tracing::debug!(session_id = %self.id, "update_target_user_groups");
    }

    /// Stamp the aggregate with today's date and clear the dirty flag.
    /// Persistence is the host's job, not this layer's.
    pub fn save_changes(&mut self) -> &PresentationAgent {
        self.agent.updated_at = Utc::now().date_naive();
        self.clear_dirty();
        tracing::info!(session_id = %self.id, agent_id = %self.agent.id, "changes saved");
        &self.agent
    }

    /// Save, then hand the host a snapshot. Fire-and-forget: the host
    /// reports nothing back.
    pub fn save_to(&mut self, host: &mut dyn SaveHost) {
        self.save_changes();
        host.persist(&self.agent);
    }
}
