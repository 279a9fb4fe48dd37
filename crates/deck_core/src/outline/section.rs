//! Section - an ordered block of slide instructions

use serde::{Deserialize, Serialize};

use crate::ids::IdGenerator;
use crate::question::QuestionConfig;
use crate::slide::SlideConfig;

/// Whether a section's internal structure is author-defined or left to
/// the generator.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    /// Structure is fully defined by the slide instructions
    #[default]
    Fixed,

    /// The generator decides the structure from guidance text
    Freeform,
}

/// One section of the presentation outline.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// Unique identifier
    pub id: String,

    /// Section title; may be empty while the user is still typing
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub section_type: SectionType,

    /// General authoring instructions for this section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,

    /// Structure guidance; only meaningful for freeform sections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_guidance: Option<String>,

    /// Ordered slide instructions
    #[serde(default)]
    pub slides: Vec<SlideConfig>,

    /// Section-specific questions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub questions: Vec<QuestionConfig>,

    /// If set, the AI may add sections after this one; only meaningful
    /// when the owning agent's outline type is guided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_expansion: Option<bool>,

    /// Guidance for the AI when expanding after this section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_expansion_guidance: Option<String>,
}

impl Section {
    /// Create a new fixed section. `index` is the zero-based position the
    /// section will occupy, used for the placeholder title.
    pub fn new_fixed(ids: &mut IdGenerator, index: usize) -> Self {
        Self {
            id: ids.next_section_id(),
            title: format!("New Section {}", index + 1),
            section_type: SectionType::Fixed,
            instructions: None,
            freeform_guidance: None,
            slides: Vec::new(),
            questions: Vec::new(),
            ai_expansion: None,
            ai_expansion_guidance: None,
        }
    }

    /// Create a new freeform section with empty guidance.
    pub fn new_freeform(ids: &mut IdGenerator) -> Self {
        Self {
            id: ids.next_section_id(),
            title: "Free Form".to_string(),
            section_type: SectionType::Freeform,
            instructions: None,
            freeform_guidance: Some(String::new()),
            slides: Vec::new(),
            questions: Vec::new(),
            ai_expansion: None,
            ai_expansion_guidance: None,
        }
    }

    pub fn is_freeform(&self) -> bool {
        self.section_type == SectionType::Freeform
    }
}
