//! Structural outline operations: add, delete, duplicate, reorder

use deck_core::{AiGap, OutlineItem, Section};

use crate::context::BuilderContext;

impl BuilderContext {
    /// Replace the outline with a reordered item list (drag & drop).
    /// Identity and contents of the items are untouched, only position.
    pub fn reorder_outline(&mut self, new_outline: Vec<OutlineItem>) {
        self.agent.outline = new_outline;
        self.sync_sections();
        self.mark_dirty();
        tracing::debug!(
            session_id = %self.id,
            items = self.agent.outline.len(),
            "reorder_outline"
        );
    }

    /// Append a new fixed section; the title defaults to empty when none
    /// is given. Returns the new section's id.
    pub fn add_section(&mut self, title: Option<&str>) -> String {
        let index = self.agent.sections.len();
        let mut section = Section::new_fixed(&mut self.ids, index);
        section.title = title.map(str::trim).unwrap_or_default().to_string();
        let section_id = section.id.clone();

        self.agent.outline.push(OutlineItem::Section(section));
        self.sync_sections();
        self.mark_dirty();
        tracing::debug!(session_id = %self.id, section_id, "add_section");
        section_id
    }

    /// Append a new freeform section. Returns the new section's id.
    pub fn add_freeform_section(&mut self) -> String {
        let section = Section::new_freeform(&mut self.ids);
        let section_id = section.id.clone();

        self.agent.outline.push(OutlineItem::Section(section));
        self.sync_sections();
        self.mark_dirty();
        tracing::debug!(session_id = %self.id, section_id, "add_freeform_section");
        section_id
    }

    /// Append a new AI gap marker. Gaps live only in the outline and never
    /// appear in the sections projection. Returns the new gap's id.
    pub fn add_ai_gap(&mut self) -> String {
        let gap = AiGap::new(&mut self.ids);
        let gap_id = gap.id.clone();

        self.agent.outline.push(OutlineItem::AiGap(gap));
        self.mark_dirty();
        tracing::debug!(session_id = %self.id, gap_id, "add_ai_gap");
        gap_id
    }

    /// Remove a section. Deleting an id that is already gone is a no-op.
    pub fn delete_section(&mut self, section_id: &str) {
        let before = self.agent.outline.len();
        self.agent
            .outline
            .retain(|item| !(item.is_section() && item.id() == section_id));
        if self.agent.outline.len() == before {
            return;
        }
        self.sync_sections();
        self.mark_dirty();
        tracing::debug!(session_id = %self.id, section_id, "delete_section");
    }

    /// Remove an AI gap. Deleting an id that is already gone is a no-op.
    pub fn delete_ai_gap(&mut self, gap_id: &str) {
        let before = self.agent.outline.len();
        self.agent
            .outline
            .retain(|item| !(item.is_ai_gap() && item.id() == gap_id));
        if self.agent.outline.len() == before {
            return;
        }
        self.mark_dirty();
        tracing::debug!(session_id = %self.id, gap_id, "delete_ai_gap");
    }

    /// Clone a section with a fresh id and a `" (Copy)"` title suffix,
    /// inserted immediately after the original's outline position. The
    /// sections projection picks up the same adjacency by derivation.
    pub fn duplicate_section(&mut self, section_id: &str) {
        let Some(position) = self
            .agent
            .outline
            .iter()
            .position(|item| item.is_section() && item.id() == section_id)
        else {
            tracing::debug!(
                session_id = %self.id,
                section_id,
                "duplicate_section: not found; no-op"
            );
            return;
        };

        let mut duplicate = match self.agent.outline[position].as_section() {
            Some(section) => section.clone(),
            None => return,
        };
        duplicate.id = self.ids.next_section_id();
        duplicate.title = format!("{} (Copy)", duplicate.title);
        let duplicate_id = duplicate.id.clone();

        self.agent
            .outline
            .insert(position + 1, OutlineItem::Section(duplicate));
        self.sync_sections();
        self.mark_dirty();
        tracing::debug!(session_id = %self.id, section_id, duplicate_id, "duplicate_section");
    }

    /// Update an AI gap's guidance text.
    pub fn update_ai_gap_guidance(&mut self, gap_id: &str, guidance: impl Into<String>) {
        let Some(gap) = self
            .agent
            .outline
            .iter_mut()
            .filter_map(OutlineItem::as_ai_gap_mut)
            .find(|gap| gap.id == gap_id)
        else {
            tracing::debug!(session_id = %self.id, gap_id, "gap not found; no-op");
            return;
        };
        gap.guidance = guidance.into();
        self.mark_dirty();
        tracing::debug!(session_id = %self.id, gap_id, "update_ai_gap_guidance");
    }
}
