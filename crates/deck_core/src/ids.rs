//! Prefix-scoped id generation
//!
//! Every entity id is a string of the form `{prefix}-{epoch}-{counter}`:
//! a coarse millisecond epoch captured when the generator is constructed,
//! plus a per-prefix monotonically increasing counter. Ids are unique per
//! generator, which is the scope at which they are ever compared — a
//! controller owns exactly one generator for its aggregate. Entities never
//! need cross-session identity.

use std::collections::HashMap;

use chrono::Utc;

/// Generates prefixed entity ids. Injected into controllers rather than
/// living behind global mutable state, so tests can pin the epoch.
#[derive(Clone, Debug)]
pub struct IdGenerator {
    epoch_millis: i64,
    counters: HashMap<String, u64>,
}

impl IdGenerator {
    /// Create a generator stamped with the current time.
    pub fn new() -> Self {
        Self::with_epoch(Utc::now().timestamp_millis())
    }

    /// Create a generator with a fixed epoch, for deterministic ids.
    pub fn with_epoch(epoch_millis: i64) -> Self {
        Self {
            epoch_millis,
            counters: HashMap::new(),
        }
    }

    /// Produce the next id for an arbitrary prefix.
    pub fn next(&mut self, prefix: &str) -> String {
        let counter = self.counters.entry(prefix.to_string()).or_insert(0);
        let id = format!("{}-{}-{}", prefix, self.epoch_millis, counter);
        *counter += 1;
        id
    }

    pub fn next_agent_id(&mut self) -> String {
        self.next("agent")
    }

    pub fn next_section_id(&mut self) -> String {
        self.next("section")
    }

    pub fn next_slide_id(&mut self) -> String {
        self.next("slide")
    }

    pub fn next_gap_id(&mut self) -> String {
        self.next("ai-gap")
    }

    pub fn next_question_id(&mut self) -> String {
        self.next("question")
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_per_prefix() {
        let mut ids = IdGenerator::with_epoch(0);
        let a = ids.next_section_id();
        let b = ids.next_section_id();
        assert_ne!(a, b);
        assert_eq!(a, "section-0-0");
        assert_eq!(b, "section-0-1");
    }

    #[test]
    fn test_counters_are_scoped_per_prefix() {
        let mut ids = IdGenerator::with_epoch(42);
        assert_eq!(ids.next_section_id(), "section-42-0");
        assert_eq!(ids.next_slide_id(), "slide-42-0");
        assert_eq!(ids.next_gap_id(), "ai-gap-42-0");
        assert_eq!(ids.next_section_id(), "section-42-1");
    }

    #[test]
    fn test_fresh_generator_uses_wall_clock_epoch() {
        let mut ids = IdGenerator::new();
        let id = ids.next_question_id();
        assert!(id.starts_with("question-"));
        assert!(id.ends_with("-0"));
    }
}
