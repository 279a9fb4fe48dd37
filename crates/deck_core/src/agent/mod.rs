//! PresentationAgent - the editable aggregate
//!
//! An agent describes how one kind of presentation gets generated: its
//! outline of sections and AI gaps, the questions it asks, and its catalog
//! references. The aggregate carries both the canonical `outline` and the
//! legacy flat `sections` projection; controllers keep the latter derived
//! from the former.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::IdGenerator;
use crate::outline::{OutlineItem, Section};
use crate::question::QuestionConfig;

/// Publication status of an agent.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    #[default]
    Draft,
    Active,
}

impl AgentStatus {
    /// The status a toggle flips to.
    pub fn toggled(self) -> Self {
        match self {
            Self::Draft => Self::Active,
            Self::Active => Self::Draft,
        }
    }
}

/// Whether the agent is the shared default or a custom build.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AgentType {
    Universal,
    #[default]
    Custom,
}

/// Whether the outline is fully predefined or the AI may add sections.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutlineType {
    /// All sections predefined; AI gaps are not allowed
    #[default]
    Fixed,
    /// The AI may insert sections at expansion points
    Guided,
}

/// Display icon for the overview list.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AgentIcon {
    Globe,
    Tag,
    #[default]
    Document,
    Chart,
    Education,
}

/// A presentation agent and everything needed to edit it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PresentationAgent {
    /// Unique identifier
    pub id: String,

    /// Display name; empty for a freshly created draft
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub agent_type: AgentType,

    #[serde(default)]
    pub status: AgentStatus,

    #[serde(default)]
    pub outline_type: OutlineType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<AgentIcon>,

    /// User group ids allowed to use this agent; empty = all users
    #[serde(default)]
    pub target_user_groups: Vec<String>,

    /// Presentation template the agent renders into
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_layout_id: Option<String>,

    /// Legacy flat projection of the outline's sections
    #[serde(default)]
    pub sections: Vec<Section>,

    /// Canonical ordered list of sections and AI gaps
    #[serde(default)]
    pub outline: Vec<OutlineItem>,

    /// Questions asked for every generation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub global_questions: Vec<QuestionConfig>,

    /// Questions driving knowledge-source search
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub knowledge_questions: Vec<QuestionConfig>,

    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

impl PresentationAgent {
    /// Create an empty draft agent stamped with today's date.
    pub fn new(ids: &mut IdGenerator, outline_type: OutlineType) -> Self {
        let today = Utc::now().date_naive();
        Self {
            id: ids.next_agent_id(),
            name: String::new(),
            agent_type: AgentType::Custom,
            status: AgentStatus::Draft,
            outline_type,
            category: None,
            description: None,
            icon: Some(AgentIcon::Document),
            target_user_groups: Vec::new(),
            document_layout_id: None,
            sections: Vec::new(),
            outline: Vec::new(),
            global_questions: Vec::new(),
            knowledge_questions: Vec::new(),
            created_at: today,
            updated_at: today,
        }
    }
}
