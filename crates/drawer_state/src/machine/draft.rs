//! Typed draft payloads - one per drawer mode
//!
//! Each mode carries exactly the fields its commit needs, so "is this
//! draft committable" is answerable per mode instead of by inspecting a
//! bag of optional fields.

use serde::{Deserialize, Serialize};

use deck_core::{LibrarySlideConfig, SlideConfig, SlideSource};

use super::states::DrawerMode;

/// Draft for an AI-authored slide run.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AiDraft {
    pub title: String,
    pub instructions: String,
    pub slide_count: Option<u32>,
    pub selected_layout_ids: Vec<String>,
}

/// Draft for a direct library multi-select.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectDraft {
    pub selected_folder_id: Option<String>,
    /// Selected slide ids, in selection order
    pub selected_slide_ids: Vec<String>,
    /// Free-text culling criteria; blank means "use everything"
    pub criteria: String,
    pub slide_count: Option<u32>,
}

impl DirectDraft {
    /// Toggle a slide in or out of the selection, preserving order.
    pub fn toggle_slide(&mut self, slide_id: &str) {
        if let Some(pos) = self.selected_slide_ids.iter().position(|id| id == slide_id) {
            self.selected_slide_ids.remove(pos);
        } else {
            self.selected_slide_ids.push(slide_id.to_string());
        }
    }
}

/// Draft for a criteria search.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchDraft {
    /// Folders to limit the search to; empty means all folders
    pub limited_folder_ids: Vec<String>,
    pub search_instructions: String,
    pub slide_count: Option<u32>,
}

impl SearchDraft {
    /// Toggle a folder in or out of the search scope.
    pub fn toggle_folder(&mut self, folder_id: &str) {
        if let Some(pos) = self.limited_folder_ids.iter().position(|id| id == folder_id) {
            self.limited_folder_ids.remove(pos);
        } else {
            self.limited_folder_ids.push(folder_id.to_string());
        }
    }
}

/// One premade slide picked in fixed mode.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedSelection {
    pub asset_id: String,
    pub folder_id: Option<String>,
    pub name: String,
}

/// Draft for fixed premade slides; commits one instruction per selection.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedDraft {
    /// Picked assets, in selection order
    pub selections: Vec<FixedSelection>,
}

impl FixedDraft {
    /// Toggle an asset in or out of the selection, preserving order.
    pub fn toggle_asset(&mut self, selection: FixedSelection) {
        if let Some(pos) = self
            .selections
            .iter()
            .position(|item| item.asset_id == selection.asset_id)
        {
            self.selections.remove(pos);
        } else {
            self.selections.push(selection);
        }
    }

    /// Reapply the given asset order; ids not currently selected are
    /// skipped, selections missing from the order are dropped.
    pub fn reorder(&mut self, ordered_asset_ids: &[String]) {
        let previous = std::mem::take(&mut self.selections);
        self.selections = ordered_asset_ids
            .iter()
            .filter_map(|asset_id| {
                previous
                    .iter()
                    .find(|item| &item.asset_id == asset_id)
                    .cloned()
            })
            .collect();
    }

    /// Remove a single asset from the selection.
    pub fn remove(&mut self, asset_id: &str) {
        self.selections.retain(|item| item.asset_id != asset_id);
    }
}

/// The draft payload held while the drawer is in its editing state.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SlideDraft {
    Ai(AiDraft),
    Direct(DirectDraft),
    Search(SearchDraft),
    Fixed(FixedDraft),
}

impl SlideDraft {
    /// An empty draft for the given mode.
    pub fn new(mode: DrawerMode) -> Self {
        match mode {
            DrawerMode::Ai => Self::Ai(AiDraft::default()),
            DrawerMode::LibraryDirect => Self::Direct(DirectDraft::default()),
            DrawerMode::LibrarySearch => Self::Search(SearchDraft::default()),
            DrawerMode::LibraryFixed => Self::Fixed(FixedDraft::default()),
        }
    }

    /// A draft pre-populated from an existing instruction, for edit flows.
    pub fn from_slide(slide: &SlideConfig) -> Self {
        let title = slide.title.clone().unwrap_or_default();
        match &slide.source {
            SlideSource::Ai(ai) => Self::Ai(AiDraft {
                title,
                instructions: ai.ai_instructions.clone(),
                slide_count: ai.slide_count,
                selected_layout_ids: ai.selected_layout_ids.clone().unwrap_or_default(),
            }),
            SlideSource::Library(LibrarySlideConfig::Direct(direct)) => Self::Direct(DirectDraft {
                selected_folder_id: direct.selected_folder_id.clone(),
                selected_slide_ids: direct.selected_slide_ids.clone(),
                criteria: direct.selection_criteria.clone().unwrap_or_default(),
                slide_count: direct.slide_count,
            }),
            SlideSource::Library(LibrarySlideConfig::Search(search)) => Self::Search(SearchDraft {
                limited_folder_ids: search.limited_folder_ids.clone().unwrap_or_default(),
                search_instructions: search.search_instructions.clone().unwrap_or_default(),
                slide_count: search.slide_count,
            }),
            SlideSource::Library(LibrarySlideConfig::Fixed(fixed)) => Self::Fixed(FixedDraft {
                selections: vec![FixedSelection {
                    asset_id: fixed.asset_id.clone(),
                    folder_id: fixed.selected_folder_id.clone(),
                    name: title,
                }],
            }),
        }
    }

    /// The mode this draft belongs to.
    pub fn mode(&self) -> DrawerMode {
        match self {
            Self::Ai(_) => DrawerMode::Ai,
            Self::Direct(_) => DrawerMode::LibraryDirect,
            Self::Search(_) => DrawerMode::LibrarySearch,
            Self::Fixed(_) => DrawerMode::LibraryFixed,
        }
    }

    /// Whether the draft satisfies its mode's commit preconditions.
    /// AI and search drafts always commit; selections must be non-empty.
    pub fn is_committable(&self) -> bool {
        match self {
            Self::Ai(_) | Self::Search(_) => true,
            Self::Direct(direct) => !direct.selected_slide_ids.is_empty(),
            Self::Fixed(fixed) => !fixed.selections.is_empty(),
        }
    }

    /// The draft's slide-count field, where the mode has one.
    pub fn slide_count(&self) -> Option<u32> {
        match self {
            Self::Ai(ai) => ai.slide_count,
            Self::Direct(direct) => direct.slide_count,
            Self::Search(search) => search.slide_count,
            Self::Fixed(_) => None,
        }
    }

    /// Switch the draft to another mode, carrying the fields both modes
    /// share (the slide count, and the picked assets between the two
    /// explicit-selection modes). Everything else resets.
    pub fn rekey(self, mode: DrawerMode) -> Self {
        if self.mode() == mode {
            return self;
        }
        let count = self.slide_count();
        match (self, mode) {
            (Self::Direct(direct), DrawerMode::LibraryFixed) => {
                let DirectDraft {
                    selected_folder_id,
                    selected_slide_ids,
                    ..
                } = direct;
                Self::Fixed(FixedDraft {
                    selections: selected_slide_ids
                        .into_iter()
                        .map(|asset_id| FixedSelection {
                            asset_id,
                            folder_id: selected_folder_id.clone(),
                            name: String::new(),
                        })
                        .collect(),
                })
            }
            (Self::Fixed(fixed), DrawerMode::LibraryDirect) => Self::Direct(DirectDraft {
                selected_folder_id: fixed
                    .selections
                    .first()
                    .and_then(|item| item.folder_id.clone()),
                selected_slide_ids: fixed
                    .selections
                    .iter()
                    .map(|item| item.asset_id.clone())
                    .collect(),
                criteria: String::new(),
                slide_count: count,
            }),
            (_, mode) => {
                let mut draft = Self::new(mode);
                match &mut draft {
                    Self::Ai(ai) => ai.slide_count = count,
                    Self::Direct(direct) => direct.slide_count = count,
                    Self::Search(search) => search.slide_count = count,
                    Self::Fixed(_) => {}
                }
                draft
            }
        }
    }
}
