//! Slide instructions - the per-section units of content generation
//!
//! A `SlideConfig` tells the generator how to produce one run of slides:
//! either AI-authored from instructions, or sourced from the slide library
//! in one of three modes (direct multi-select, criteria search, or a fixed
//! premade asset).

mod source;

pub use source::{
    AiSlideConfig, DirectSelection, FixedAsset, LibrarySlideConfig, SearchSelection,
    SelectionMode,
};

use serde::{Deserialize, Serialize};

use crate::ids::IdGenerator;

/// Top-level kind of a slide instruction.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SlideType {
    Ai,
    Library,
}

/// One slide instruction within a section. Position in the section's
/// `slides` list is its generation order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SlideConfig {
    /// Unique identifier within the owning section
    pub id: String,

    /// Optional display title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// How the slides are sourced - determines the variant payload
    #[serde(flatten)]
    pub source: SlideSource,
}

/// Source variant of a slide instruction.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlideSource {
    /// AI-authored content from free-text instructions
    Ai(AiSlideConfig),

    /// Slides sourced from the content library
    Library(LibrarySlideConfig),
}

impl SlideConfig {
    /// Create a minimal slide instruction of the given type: AI drafts
    /// default to one slide, library drafts to a direct all-selection.
    pub fn new(ids: &mut IdGenerator, slide_type: SlideType) -> Self {
        let source = match slide_type {
            SlideType::Ai => SlideSource::Ai(AiSlideConfig {
                slide_count: Some(1),
                ..AiSlideConfig::default()
            }),
            SlideType::Library => SlideSource::Library(LibrarySlideConfig::Direct(
                DirectSelection::default(),
            )),
        };
        Self {
            id: ids.next_slide_id(),
            title: None,
            source,
        }
    }

    /// Top-level kind of this instruction.
    pub fn slide_type(&self) -> SlideType {
        match self.source {
            SlideSource::Ai(_) => SlideType::Ai,
            SlideSource::Library(_) => SlideType::Library,
        }
    }

    pub fn is_ai(&self) -> bool {
        matches!(self.source, SlideSource::Ai(_))
    }

    pub fn is_library(&self) -> bool {
        matches!(self.source, SlideSource::Library(_))
    }

    /// True for library instructions in search mode.
    pub fn is_library_search(&self) -> bool {
        matches!(
            self.source,
            SlideSource::Library(LibrarySlideConfig::Search(_))
        )
    }

    /// The number of slides this instruction nominally contributes.
    ///
    /// A direct selection never counts below the number of literally
    /// selected slides; a fixed asset is always exactly one.
    pub fn nominal_slide_count(&self) -> u32 {
        match &self.source {
            SlideSource::Ai(ai) => ai.slide_count.unwrap_or(1).max(1),
            SlideSource::Library(LibrarySlideConfig::Direct(direct)) => direct
                .slide_count
                .unwrap_or(0)
                .max(direct.selected_slide_ids.len() as u32)
                .max(1),
            SlideSource::Library(LibrarySlideConfig::Search(search)) => {
                search.slide_count.unwrap_or(1).max(1)
            }
            SlideSource::Library(LibrarySlideConfig::Fixed(_)) => 1,
        }
    }
}
