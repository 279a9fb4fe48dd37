//! Drawer states - lifecycle of the per-section slide drawer

use serde::{Deserialize, Serialize};

use super::draft::SlideDraft;

/// Which kind of slide instruction the drawer is composing.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DrawerMode {
    /// AI-authored slides from free-text instructions
    Ai,

    /// Explicit multi-select from a library folder
    LibraryDirect,

    /// Criteria search across the library
    LibrarySearch,

    /// Specific premade slides, one instruction per asset
    LibraryFixed,
}

impl DrawerMode {
    /// Short label for display and errors.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ai => "ai",
            Self::LibraryDirect => "library",
            Self::LibrarySearch => "library-search",
            Self::LibraryFixed => "library-fixed",
        }
    }
}

/// The possible states of a section's add/edit-slide drawer.
///
/// The drawer is UI-local: it accumulates a draft instruction (or a batch)
/// and only touches the durable outline through its commit.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DrawerState {
    /// Nothing open, no draft held.
    Closed,

    /// The type-picker step: the user is choosing what kind of slide to add.
    ChoosingType,

    /// A typed draft is being edited.
    Editing {
        /// The draft payload for the chosen mode.
        draft: SlideDraft,
        /// When set, committing replaces this instruction instead of
        /// appending new ones.
        replaces: Option<String>,
    },
}

impl Default for DrawerState {
    fn default() -> Self {
        DrawerState::Closed
    }
}

impl DrawerState {
    /// Check if the drawer is visible at all.
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Check if a draft is currently being edited.
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    /// Check if this is an edit-existing session rather than an add.
    pub fn is_replacing(&self) -> bool {
        matches!(
            self,
            Self::Editing {
                replaces: Some(_),
                ..
            }
        )
    }

    /// Get a human-readable description of the current state.
    pub fn description(&self) -> &str {
        match self {
            Self::Closed => "Closed",
            Self::ChoosingType => "Choosing slide type",
            Self::Editing { replaces: None, .. } => "Editing new slide",
            Self::Editing {
                replaces: Some(_), ..
            } => "Editing existing slide",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_closed() {
        assert_eq!(DrawerState::default(), DrawerState::Closed);
        assert!(!DrawerState::default().is_open());
    }

    #[test]
    fn test_editing_state_detection() {
        let state = DrawerState::Editing {
            draft: SlideDraft::new(DrawerMode::Ai),
            replaces: None,
        };
        assert!(state.is_open());
        assert!(state.is_editing());
        assert!(!state.is_replacing());
        assert_eq!(state.description(), "Editing new slide");

        let replacing = DrawerState::Editing {
            draft: SlideDraft::new(DrawerMode::Ai),
            replaces: Some("slide-1".to_string()),
        };
        assert!(replacing.is_replacing());
    }
}
