//! drawer_state - State machine for the per-section slide drawer
//!
//! This crate provides the transient interaction state machine that
//! accumulates a draft slide instruction (or a batch of them) and commits
//! it to the outline controller as an append or an in-place replacement.

pub mod machine;

// Re-export commonly used types
pub use machine::{
    AiDraft, DirectDraft, DrawerCommit, DrawerError, DrawerMachine, DrawerMode, DrawerState,
    DrawerTransition, FixedDraft, FixedSelection, SearchDraft, SlideDraft,
};
