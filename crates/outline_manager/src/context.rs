use uuid::Uuid;

use deck_core::{
    outline_from_sections, sections_from_outline, IdGenerator, OutlineItem, PresentationAgent,
    Section,
};

/// The single source of truth for one agent's editable outline during an
/// editing session.
///
/// The aggregate's `outline` is canonical; the legacy `sections`
/// projection is re-derived from it after every mutation, so the two can
/// never diverge. The rendering collaborator reads snapshots and routes
/// every change back through the operation methods.
#[derive(Clone, Debug)]
pub struct BuilderContext {
    /// Session correlation id for tracing; not an entity id.
    pub id: Uuid,

    pub(crate) agent: PresentationAgent,

    /// Id generator for every entity created in this session.
    pub(crate) ids: IdGenerator,

    /// Runtime flag tracking unsaved edits relative to the last save.
    dirty: bool,

    /// Id of the outline item currently being dragged, for visual
    /// feedback only. Not durable state.
    active_drag: Option<String>,
}

impl BuilderContext {
    /// Start an editing session over the supplied agent.
    pub fn new(initial: PresentationAgent) -> Self {
        Self::with_generator(initial, IdGenerator::new())
    }

    /// Start an editing session with an injected id generator.
    pub fn with_generator(initial: PresentationAgent, ids: IdGenerator) -> Self {
        let mut context = Self {
            id: Uuid::new_v4(),
            agent: initial,
            ids,
            dirty: false,
            active_drag: None,
        };
        context.normalize();
        context
    }

    /// Replace all in-memory state with a different agent (the user
    /// navigated to another agent). Prior edits are not merged.
    pub fn reset(&mut self, agent: PresentationAgent) {
        tracing::debug!(session_id = %self.id, agent_id = %agent.id, "context reset");
        self.agent = agent;
        self.normalize();
        self.dirty = false;
        self.active_drag = None;
    }

    /// An agent without a populated outline gets one synthesized from its
    /// sections; either way the sections projection is re-derived so the
    /// consistency invariant holds from the start.
    fn normalize(&mut self) {
        if self.agent.outline.is_empty() {
            self.agent.outline = outline_from_sections(&self.agent.sections, None);
        }
        self.sync_sections();
    }

    /// The current agent state.
    pub fn agent(&self) -> &PresentationAgent {
        &self.agent
    }

    /// An owned copy of the current agent state.
    pub fn snapshot(&self) -> PresentationAgent {
        self.agent.clone()
    }

    /// Check if there are unsaved edits.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the aggregate as having unsaved edits.
    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Clear the dirty flag (after a save).
    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Set or clear the item id being dragged.
    pub fn set_active_drag(&mut self, item_id: Option<String>) {
        self.active_drag = item_id;
    }

    /// The item id currently being dragged, if any.
    pub fn active_drag(&self) -> Option<&str> {
        self.active_drag.as_deref()
    }

    /// Re-derive the legacy sections projection from the outline.
    pub(crate) fn sync_sections(&mut self) {
        self.agent.sections = sections_from_outline(&self.agent.outline);
    }

    /// Locate a section in the outline by id.
    pub(crate) fn section_mut<'a>(
        outline: &'a mut [OutlineItem],
        section_id: &str,
    ) -> Option<&'a mut Section> {
        outline
            .iter_mut()
            .filter_map(OutlineItem::as_section_mut)
            .find(|section| section.id == section_id)
    }

    /// Apply a closure to a section, then re-derive and mark dirty.
    /// A missing id is a no-op that leaves the state untouched.
    pub(crate) fn with_section<F>(&mut self, section_id: &str, op: &'static str, f: F)
    where
        F: FnOnce(&mut Section),
    {
        let Some(section) = Self::section_mut(&mut self.agent.outline, section_id) else {
            tracing::debug!(session_id = %self.id, section_id, op, "section not found; no-op");
            return;
        };
        f(section);
        self.sync_sections();
        self.mark_dirty();
        tracing::debug!(session_id = %self.id, section_id, op, "section updated");
    }
}
