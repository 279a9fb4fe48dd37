//! Drawer transitions - the machine driving the add/edit-slide flow
//!
//! `closed -> choosing-type -> editing -> closed`, with edit-existing
//! entering directly at editing. Cancellation discards the draft from any
//! state; committing hands back a `DrawerCommit` for the outline
//! controller to apply.

use thiserror::Error;
use uuid::Uuid;

use deck_core::{IdGenerator, SlideConfig};

use super::commit::{
    build_ai, build_direct, build_fixed_batch, build_replacement, build_search, DrawerCommit,
};
use super::draft::SlideDraft;
use super::states::{DrawerMode, DrawerState};

/// Error type for invalid drawer operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrawerError {
    #[error("drawer has no draft to commit (state: {state})")]
    NoDraft { state: &'static str },

    #[error("nothing selected for a {mode} commit")]
    EmptySelection { mode: &'static str },
}

/// A recorded drawer state change.
#[derive(Debug, Clone)]
pub struct DrawerTransition {
    /// The state before the transition.
    pub from: DrawerState,
    /// The state after the transition.
    pub to: DrawerState,
    /// The operation that triggered it.
    pub action: &'static str,
    /// Whether the state actually changed.
    pub changed: bool,
}

/// State machine for one section's slide drawer.
#[derive(Debug, Clone)]
pub struct DrawerMachine {
    /// Correlation id for tracing.
    id: Uuid,
    /// Current state.
    state: DrawerState,
    /// Transition history (limited).
    history: Vec<DrawerTransition>,
    /// Max history entries to keep.
    max_history: usize,
}

impl Default for DrawerMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawerMachine {
    /// Create a new machine in the closed state.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            state: DrawerState::Closed,
            history: Vec::new(),
            max_history: 50,
        }
    }

    /// Get the current state.
    pub fn state(&self) -> &DrawerState {
        &self.state
    }

    /// Get the transition history.
    pub fn history(&self) -> &[DrawerTransition] {
        &self.history
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Open the drawer at the type-picker step. Any previous draft is
    /// discarded, matching the drawer's reset-on-open behavior.
    pub fn open(&mut self) {
        self.set_state(DrawerState::ChoosingType, "open");
    }

    /// Open the drawer directly at the form for the given mode, skipping
    /// the type picker.
    pub fn open_with(&mut self, mode: DrawerMode) {
        self.set_state(
            DrawerState::Editing {
                draft: SlideDraft::new(mode),
                replaces: None,
            },
            "open_with",
        );
    }

    /// Open the drawer to edit an existing instruction; the draft is
    /// pre-populated and a commit replaces the instruction in place.
    pub fn open_edit(&mut self, slide: &SlideConfig) {
        self.set_state(
            DrawerState::Editing {
                draft: SlideDraft::from_slide(slide),
                replaces: Some(slide.id.clone()),
            },
            "open_edit",
        );
    }

    /// Pick a mode. From the type picker this starts a fresh draft; while
    /// editing it re-keys the draft to the new mode, carrying the shared
    /// fields. No-op when closed.
    pub fn choose(&mut self, mode: DrawerMode) {
        let next = match self.state.clone() {
            DrawerState::ChoosingType => DrawerState::Editing {
                draft: SlideDraft::new(mode),
                replaces: None,
            },
            DrawerState::Editing { draft, replaces } => DrawerState::Editing {
                draft: draft.rekey(mode),
                replaces,
            },
            DrawerState::Closed => {
                tracing::debug!(
                    drawer_id = %self.id,
                    mode = mode.label(),
                    "choose ignored while closed"
                );
                DrawerState::Closed
            }
        };
        self.set_state(next, "choose");
    }

    /// Close the drawer, discarding any draft.
    pub fn cancel(&mut self) {
        self.set_state(DrawerState::Closed, "cancel");
    }

    /// The draft being edited, if any.
    pub fn draft(&self) -> Option<&SlideDraft> {
        match &self.state {
            DrawerState::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Mutable access to the draft for field edits.
    pub fn draft_mut(&mut self) -> Option<&mut SlideDraft> {
        match &mut self.state {
            DrawerState::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Check whether a commit would succeed right now.
    pub fn can_commit(&self) -> bool {
        matches!(&self.state, DrawerState::Editing { draft, .. } if draft.is_committable())
    }

    /// Build the commit for the current draft and close the drawer.
    /// On error the state is left unchanged.
    pub fn commit(&mut self, ids: &mut IdGenerator) -> Result<DrawerCommit, DrawerError> {
        let (draft, replaces) = match &self.state {
            DrawerState::Editing { draft, replaces } => (draft.clone(), replaces.clone()),
            DrawerState::Closed => return Err(DrawerError::NoDraft { state: "closed" }),
            DrawerState::ChoosingType => {
                return Err(DrawerError::NoDraft {
                    state: "choosing-type",
                })
            }
        };

        if !draft.is_committable() {
            return Err(DrawerError::EmptySelection {
                mode: draft.mode().label(),
            });
        }

        let commit = match replaces {
            Some(slide_id) => DrawerCommit::Replace {
                slide: build_replacement(&draft, slide_id.clone()),
                slide_id,
            },
            None => DrawerCommit::Append(match &draft {
                SlideDraft::Ai(ai) => vec![build_ai(ai, ids.next_slide_id())],
                SlideDraft::Direct(direct) => vec![build_direct(direct, ids.next_slide_id())],
                SlideDraft::Search(search) => vec![build_search(search, ids.next_slide_id())],
                SlideDraft::Fixed(fixed) => build_fixed_batch(fixed, ids),
            }),
        };

        tracing::info!(
            drawer_id = %self.id,
            mode = draft.mode().label(),
            instructions = commit.len(),
            "drawer commit"
        );
        self.set_state(DrawerState::Closed, "commit");
        Ok(commit)
    }

    fn set_state(&mut self, to: DrawerState, action: &'static str) {
        let from = std::mem::replace(&mut self.state, to.clone());
        let changed = from != to;

        if changed {
            tracing::debug!(
                drawer_id = %self.id,
                from = from.description(),
                to = to.description(),
                action,
                "drawer transition"
            );
        }

        self.history.push(DrawerTransition {
            from,
            to,
            action,
            changed,
        });
        if self.history.len() > self.max_history {
            self.history.remove(0);
        }
    }
}
