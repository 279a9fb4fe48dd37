//! `outline_manager` is a crate for managing a presentation agent's
//! editable outline: one controller per editing session, a closed set of
//! mutation operations, and an in-memory roster for the overview screen.

// Declare the modules
pub mod context;
mod context_operations;
pub mod error;
pub mod import;
pub mod roster;
pub mod traits;

// Re-export the public API
pub use context::BuilderContext;
pub use error::BuilderError;
pub use import::{parse_instructions, AgentSeed};
pub use roster::AgentRoster;
pub use traits::SaveHost;
