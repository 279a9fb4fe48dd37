//! Commit building - turning drafts into slide instructions

use serde::{Deserialize, Serialize};

use deck_core::{
    AiSlideConfig, DirectSelection, FixedAsset, IdGenerator, LibrarySlideConfig,
    SearchSelection, SelectionMode, SlideConfig, SlideSource,
};

use super::draft::{AiDraft, DirectDraft, FixedDraft, SearchDraft, SlideDraft};

/// What a successful drawer commit asks the outline controller to do.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum DrawerCommit {
    /// Append freshly built instructions to the section's slide list.
    Append(Vec<SlideConfig>),

    /// Replace the instruction with the given id in place.
    Replace {
        slide_id: String,
        slide: SlideConfig,
    },
}

impl DrawerCommit {
    /// Number of instructions this commit carries.
    pub fn len(&self) -> usize {
        match self {
            Self::Append(slides) => slides.len(),
            Self::Replace { .. } => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub(crate) fn build_ai(draft: &AiDraft, id: String) -> SlideConfig {
    SlideConfig {
        id,
        title: non_empty(&draft.title),
        source: SlideSource::Ai(AiSlideConfig {
            ai_instructions: draft.instructions.clone(),
            slide_count: draft.slide_count,
            selected_layout_ids: if draft.selected_layout_ids.is_empty() {
                None
            } else {
                Some(draft.selected_layout_ids.clone())
            },
        }),
    }
}

/// One instruction for the whole batch. A single selected slide always
/// commits as `All`; criteria only apply when the AI has a set to cull,
/// and the explicit count never undercuts the literal selection.
pub(crate) fn build_direct(draft: &DirectDraft, id: String) -> SlideConfig {
    let criteria = draft.criteria.trim();
    let single = draft.selected_slide_ids.len() == 1;
    let use_criteria = !single && !criteria.is_empty();
    let nominal = draft
        .slide_count
        .unwrap_or(0)
        .max(draft.selected_slide_ids.len() as u32)
        .max(1);

    SlideConfig {
        id,
        title: None,
        source: SlideSource::Library(LibrarySlideConfig::Direct(DirectSelection {
            selected_folder_id: draft.selected_folder_id.clone(),
            selected_slide_ids: draft.selected_slide_ids.clone(),
            selection_mode: if use_criteria {
                SelectionMode::Criteria
            } else {
                SelectionMode::All
            },
            selection_criteria: use_criteria.then(|| criteria.to_string()),
            slide_count: Some(nominal),
        })),
    }
}

pub(crate) fn build_search(draft: &SearchDraft, id: String) -> SlideConfig {
    SlideConfig {
        id,
        title: Some("Search slides in Library".to_string()),
        source: SlideSource::Library(LibrarySlideConfig::Search(SearchSelection {
            limited_folder_ids: if draft.limited_folder_ids.is_empty() {
                None
            } else {
                Some(draft.limited_folder_ids.clone())
            },
            search_instructions: non_empty(&draft.search_instructions),
            slide_count: draft.slide_count,
        })),
    }
}

/// One instruction per picked asset, in selection order, each pinned to
/// exactly that asset.
pub(crate) fn build_fixed_batch(draft: &FixedDraft, ids: &mut IdGenerator) -> Vec<SlideConfig> {
    draft
        .selections
        .iter()
        .map(|selection| SlideConfig {
            id: ids.next_slide_id(),
            title: non_empty(&selection.name),
            source: SlideSource::Library(LibrarySlideConfig::Fixed(FixedAsset {
                asset_id: selection.asset_id.clone(),
                selected_folder_id: selection.folder_id.clone(),
                selected_slide_ids: vec![selection.asset_id.clone()],
            })),
        })
        .collect()
}

/// The replacement payload for an edit commit. A fixed draft pins its
/// first selection; a fixed instruction never batches assets.
pub(crate) fn build_replacement(draft: &SlideDraft, slide_id: String) -> SlideConfig {
    match draft {
        SlideDraft::Ai(ai) => build_ai(ai, slide_id),
        SlideDraft::Direct(direct) => build_direct(direct, slide_id),
        SlideDraft::Search(search) => build_search(search, slide_id),
        SlideDraft::Fixed(fixed) => {
            let selection = fixed
                .selections
                .first()
                .cloned()
                .unwrap_or_default();
            SlideConfig {
                id: slide_id,
                title: non_empty(&selection.name),
                source: SlideSource::Library(LibrarySlideConfig::Fixed(FixedAsset {
                    asset_id: selection.asset_id.clone(),
                    selected_folder_id: selection.folder_id,
                    selected_slide_ids: vec![selection.asset_id],
                })),
            }
        }
    }
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
