//! OutlineItem - the tagged union of sections and AI gaps

use serde::{Deserialize, Serialize};

use super::gap::AiGap;
use super::section::Section;

/// One entry in the outline. Relative order defines document order; there
/// is no nesting.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutlineItem {
    Section(Section),
    AiGap(AiGap),
}

impl OutlineItem {
    /// The entity id, regardless of variant.
    pub fn id(&self) -> &str {
        match self {
            Self::Section(section) => &section.id,
            Self::AiGap(gap) => &gap.id,
        }
    }

    pub fn is_section(&self) -> bool {
        matches!(self, Self::Section(_))
    }

    pub fn is_ai_gap(&self) -> bool {
        matches!(self, Self::AiGap(_))
    }

    pub fn as_section(&self) -> Option<&Section> {
        match self {
            Self::Section(section) => Some(section),
            Self::AiGap(_) => None,
        }
    }

    pub fn as_section_mut(&mut self) -> Option<&mut Section> {
        match self {
            Self::Section(section) => Some(section),
            Self::AiGap(_) => None,
        }
    }

    pub fn as_ai_gap(&self) -> Option<&AiGap> {
        match self {
            Self::Section(_) => None,
            Self::AiGap(gap) => Some(gap),
        }
    }

    pub fn as_ai_gap_mut(&mut self) -> Option<&mut AiGap> {
        match self {
            Self::Section(_) => None,
            Self::AiGap(gap) => Some(gap),
        }
    }
}

impl From<Section> for OutlineItem {
    fn from(section: Section) -> Self {
        Self::Section(section)
    }
}

impl From<AiGap> for OutlineItem {
    fn from(gap: AiGap) -> Self {
        Self::AiGap(gap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::IdGenerator;

    #[test]
    fn test_variant_predicates() {
        let mut ids = IdGenerator::with_epoch(0);
        let section: OutlineItem = Section::new_fixed(&mut ids, 0).into();
        let gap: OutlineItem = AiGap::new(&mut ids).into();

        assert!(section.is_section());
        assert!(!section.is_ai_gap());
        assert!(gap.is_ai_gap());
        assert!(section.as_section().is_some());
        assert!(gap.as_section().is_none());
        assert!(gap.as_ai_gap().is_some());
    }

    #[test]
    fn test_id_accessor_spans_variants() {
        let mut ids = IdGenerator::with_epoch(7);
        let section: OutlineItem = Section::new_fixed(&mut ids, 0).into();
        let gap: OutlineItem = AiGap::new(&mut ids).into();

        assert_eq!(section.id(), "section-7-0");
        assert_eq!(gap.id(), "ai-gap-7-0");
    }

    #[test]
    fn test_serde_tags() {
        let mut ids = IdGenerator::with_epoch(0);
        let section: OutlineItem = Section::new_fixed(&mut ids, 0).into();
        let gap: OutlineItem = AiGap::new(&mut ids).into();

        let section_value = serde_json::to_value(&section).unwrap();
        let gap_value = serde_json::to_value(&gap).unwrap();
        assert_eq!(section_value["type"], "section");
        assert_eq!(gap_value["type"], "ai_gap");

        let roundtrip: OutlineItem = serde_json::from_value(section_value).unwrap();
        assert_eq!(roundtrip, section);
    }
}
