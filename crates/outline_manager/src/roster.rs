//! AgentRoster - the overview screen's list of agents

use chrono::Utc;

use deck_core::{AgentStatus, IdGenerator, OutlineItem, OutlineType, PresentationAgent};

use crate::error::BuilderError;
use crate::import::parse_instructions;

/// In-memory list of presentation agents, newest first. Persistence is
/// the host's concern; this only manages membership and ordering.
#[derive(Clone, Debug, Default)]
pub struct AgentRoster {
    agents: Vec<PresentationAgent>,
    ids: IdGenerator,
}

impl AgentRoster {
    /// An empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// A roster seeded with existing agents.
    pub fn with_agents(agents: Vec<PresentationAgent>) -> Self {
        Self {
            agents,
            ids: IdGenerator::new(),
        }
    }

    pub fn agents(&self) -> &[PresentationAgent] {
        &self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Get an agent by id.
    pub fn get(&self, agent_id: &str) -> Option<&PresentationAgent> {
        self.agents.iter().find(|agent| agent.id == agent_id)
    }

    /// Create a fresh draft agent at the top of the list.
    pub fn add_agent(&mut self, outline_type: OutlineType) -> &PresentationAgent {
        let agent = PresentationAgent::new(&mut self.ids, outline_type);
        tracing::debug!(agent_id = %agent.id, "agent added");
        self.agents.insert(0, agent);
        &self.agents[0]
    }

    /// Create an agent pre-filled from pasted instruction text, at the top
    /// of the list.
    pub fn add_agent_from_instructions(
        &mut self,
        instructions: &str,
    ) -> Result<&PresentationAgent, BuilderError> {
        let seed = parse_instructions(&mut self.ids, instructions)?;
        let mut agent = PresentationAgent::new(&mut self.ids, OutlineType::Fixed);
        agent.name = seed.name;
        agent.description = Some(seed.description);
        agent.outline = seed
            .sections
            .iter()
            .cloned()
            .map(OutlineItem::Section)
            .collect();
        agent.sections = seed.sections;
        tracing::debug!(agent_id = %agent.id, "agent imported from instructions");
        self.agents.insert(0, agent);
        Ok(&self.agents[0])
    }

    /// Remove an agent. Returns whether anything was removed.
    pub fn delete_agent(&mut self, agent_id: &str) -> bool {
        let before = self.agents.len();
        self.agents.retain(|agent| agent.id != agent_id);
        self.agents.len() != before
    }

    /// Clone an agent immediately after the original, name suffixed
    /// `" (Copy)"`, reset to draft, stamped today.
    pub fn duplicate_agent(&mut self, agent_id: &str) -> Option<&PresentationAgent> {
        let index = self.agents.iter().position(|agent| agent.id == agent_id)?;
        let today = Utc::now().date_naive();

        let mut duplicate = self.agents[index].clone();
        duplicate.id = self.ids.next_agent_id();
        duplicate.name = format!("{} (Copy)", duplicate.name);
        duplicate.status = AgentStatus::Draft;
        duplicate.created_at = today;
        duplicate.updated_at = today;

        self.agents.insert(index + 1, duplicate);
        Some(&self.agents[index + 1])
    }

    /// Flip an agent between draft and active, stamping the update date.
    /// Returns the new status, or None for an unknown id.
    pub fn toggle_status(&mut self, agent_id: &str) -> Option<AgentStatus> {
        let agent = self.agents.iter_mut().find(|agent| agent.id == agent_id)?;
        agent.status = agent.status.toggled();
        agent.updated_at = Utc::now().date_naive();
        tracing::debug!(agent_id, status = ?agent.status, "agent status toggled");
        Some(agent.status)
    }
}
