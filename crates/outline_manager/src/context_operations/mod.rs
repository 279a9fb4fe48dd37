//! Mutation operations on `BuilderContext`, grouped by concern
//!
//! Every operation here applies atomically from the caller's perspective:
//! it edits the canonical outline, re-derives the sections projection, and
//! marks the aggregate dirty before returning. Operations targeting an id
//! that no longer exists are silent no-ops.

mod metadata;
mod outline;
mod questions;
mod sections;
mod slides;
