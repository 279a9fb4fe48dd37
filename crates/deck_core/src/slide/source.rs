//! Variant payloads for slide instructions

use serde::{Deserialize, Serialize};

/// How a direct library selection is applied at generation time.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Every selected slide is included as-is
    #[default]
    All,

    /// The AI culls the selection using free-text criteria
    Criteria,
}

/// AI-authored slide run.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AiSlideConfig {
    /// Free-text instructions for the generator
    #[serde(default)]
    pub ai_instructions: String,

    /// How many slides to generate (None = default 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slide_count: Option<u32>,

    /// Layouts the AI may choose among (None = any)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_layout_ids: Option<Vec<String>>,
}

/// Library sourcing strategy, discriminated by `library_mode`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "library_mode", rename_all = "snake_case")]
pub enum LibrarySlideConfig {
    /// Explicit multi-select from one folder
    Direct(DirectSelection),

    /// Criteria-based search across the library
    Search(SearchSelection),

    /// A single premade asset, pinned
    Fixed(FixedAsset),
}

/// Explicitly selected slides, optionally culled by criteria.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectSelection {
    /// Folder the selection was made from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_folder_id: Option<String>,

    /// Selected slide ids, in selection order
    #[serde(default)]
    pub selected_slide_ids: Vec<String>,

    /// Whether all selected slides are used or the AI culls by criteria
    #[serde(default)]
    pub selection_mode: SelectionMode,

    /// Culling criteria; present iff `selection_mode` is `Criteria`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_criteria: Option<String>,

    /// Nominal slide count used downstream
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slide_count: Option<u32>,
}

/// Search the library at generation time.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchSelection {
    /// Folders to search within (None = all folders)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limited_folder_ids: Option<Vec<String>>,

    /// What to search for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_instructions: Option<String>,

    /// How many slides the search should yield
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slide_count: Option<u32>,
}

/// One pinned library asset. A batch selection of premade slides produces
/// one instruction per asset, never a multi-asset instruction.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedAsset {
    /// The pinned asset
    pub asset_id: String,

    /// Folder the asset lives in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_folder_id: Option<String>,

    /// Mirrors the single asset for the direct-selection readers
    #[serde(default)]
    pub selected_slide_ids: Vec<String>,
}
