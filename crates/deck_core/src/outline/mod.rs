//! Outline - the ordered top-level document structure
//!
//! An outline is an ordered list of `OutlineItem`s (sections and AI gaps).
//! The legacy `sections` projection is the outline filtered to its section
//! variants; the conversion functions here keep the two views exchangeable.

mod gap;
mod item;
mod section;

pub use gap::AiGap;
pub use item::OutlineItem;
pub use section::{Section, SectionType};

use std::fmt::{self, Display};

use crate::slide::SlideType;

/// Back-compat projection: an explicit non-empty outline wins verbatim;
/// otherwise one is synthesized by wrapping each section, order preserved.
pub fn outline_from_sections(
    sections: &[Section],
    outline: Option<&[OutlineItem]>,
) -> Vec<OutlineItem> {
    if let Some(outline) = outline {
        if !outline.is_empty() {
            return outline.to_vec();
        }
    }
    sections
        .iter()
        .cloned()
        .map(OutlineItem::Section)
        .collect()
}

/// Reverse projection: the outline filtered down to sections, order
/// preserved.
pub fn sections_from_outline(outline: &[OutlineItem]) -> Vec<Section> {
    outline
        .iter()
        .filter_map(OutlineItem::as_section)
        .cloned()
        .collect()
}

/// Where a set of sections sources its slides from, in aggregate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceSummary {
    /// No slide instructions configured yet
    NotConfigured,
    /// Every instruction is AI-authored
    Ai,
    /// Every instruction is library-sourced
    Library,
    /// Both kinds present
    Mixed,
}

impl Display for SourceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConfigured => write!(f, "Not configured"),
            Self::Ai => write!(f, "AI"),
            Self::Library => write!(f, "Library"),
            Self::Mixed => write!(f, "Mixed"),
        }
    }
}

/// Summarize the slide sources across all sections.
pub fn slide_source_summary(sections: &[Section]) -> SourceSummary {
    let mut saw_ai = false;
    let mut saw_library = false;
    for slide in sections.iter().flat_map(|section| &section.slides) {
        match slide.slide_type() {
            SlideType::Ai => saw_ai = true,
            SlideType::Library => saw_library = true,
        }
    }
    match (saw_ai, saw_library) {
        (false, false) => SourceSummary::NotConfigured,
        (true, false) => SourceSummary::Ai,
        (false, true) => SourceSummary::Library,
        (true, true) => SourceSummary::Mixed,
    }
}
