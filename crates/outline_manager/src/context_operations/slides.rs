//! Slide-list operations within a section

use drawer_state::DrawerCommit;

use deck_core::SlideConfig;

use crate::context::BuilderContext;

impl BuilderContext {
    /// Replace a section's slide instruction list wholesale.
    pub fn update_section_slides(&mut self, section_id: &str, slides: Vec<SlideConfig>) {
        self.with_section(section_id, "update_section_slides", |section| {
            section.slides = slides;
        });
    }

    /// Remove one slide instruction. A stale slide id is a no-op.
    pub fn remove_slide(&mut self, section_id: &str, slide_id: &str) {
        let Some(section) = Self::section_mut(&mut self.agent.outline, section_id) else {
            return;
        };
        let before = section.slides.len();
        section.slides.retain(|slide| slide.id != slide_id);
        if section.slides.len() == before {
            return;
        }
        self.sync_sections();
        self.mark_dirty();
        tracing::debug!(session_id = %self.id, section_id, slide_id, "remove_slide");
    }

    /// Reapply the given slide order. The result is the argument order
    /// filtered to slides that actually exist; ids not listed are dropped.
    pub fn reorder_slides(&mut self, section_id: &str, ordered_slide_ids: &[String]) {
        self.with_section(section_id, "reorder_slides", |section| {
            let previous = std::mem::take(&mut section.slides);
            section.slides = ordered_slide_ids
                .iter()
                .filter_map(|slide_id| {
                    previous.iter().find(|slide| &slide.id == slide_id).cloned()
                })
                .collect();
        });
    }

    /// Apply a drawer commit: append the built batch, or replace a single
    /// instruction in place. A replace whose target id is gone is a no-op.
    pub fn apply_drawer_commit(&mut self, section_id: &str, commit: DrawerCommit) {
        let Some(section) = Self::section_mut(&mut self.agent.outline, section_id) else {
            tracing::debug!(
                session_id = %self.id,
                section_id,
                "drawer commit dropped; section not found"
            );
            return;
        };

        let applied = match commit {
            DrawerCommit::Append(slides) => {
                let count = slides.len();
                section.slides.extend(slides);
                count > 0
            }
            DrawerCommit::Replace { slide_id, slide } => {
                match section.slides.iter_mut().find(|s| s.id == slide_id) {
                    Some(existing) => {
                        *existing = slide;
                        true
                    }
                    None => false,
                }
            }
        };

        if !applied {
            return;
        }
        self.sync_sections();
        self.mark_dirty();
        tracing::debug!(session_id = %self.id, section_id, "apply_drawer_commit");
    }
}
