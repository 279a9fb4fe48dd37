//! State machine module
//!
//! Contains the FSM implementation for the slide drawer lifecycle.

mod commit;
mod draft;
mod states;
mod transitions;

pub use commit::DrawerCommit;
pub use draft::{AiDraft, DirectDraft, FixedDraft, FixedSelection, SearchDraft, SlideDraft};
pub use states::{DrawerMode, DrawerState};
pub use transitions::{DrawerError, DrawerMachine, DrawerTransition};
