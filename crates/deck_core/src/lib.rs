//! deck_core - Core domain types for the presentation agent studio
//!
//! This crate provides the foundational types used across the studio crates:
//! - `agent` - the PresentationAgent aggregate and its metadata enums
//! - `outline` - Section, AiGap, the ordered OutlineItem union, projections
//! - `slide` - SlideConfig instruction variants (AI and library sourced)
//! - `question` - QuestionConfig prompts
//! - `ids` - prefix-scoped id generation
//! - `library` - catalog reference types (folders, layouts, user groups)

pub mod agent;
pub mod ids;
pub mod library;
pub mod outline;
pub mod question;
pub mod slide;

// Re-export commonly used types
pub use agent::{AgentIcon, AgentStatus, AgentType, OutlineType, PresentationAgent};
pub use ids::IdGenerator;
pub use library::{target_users_display, DocumentLayout, LibraryFolder, SlideLayout, UserGroup};
pub use outline::{
    outline_from_sections, sections_from_outline, slide_source_summary, AiGap, OutlineItem,
    Section, SectionType, SourceSummary,
};
pub use question::QuestionConfig;
pub use slide::{
    AiSlideConfig, DirectSelection, FixedAsset, LibrarySlideConfig, SearchSelection,
    SelectionMode, SlideConfig, SlideSource, SlideType,
};
