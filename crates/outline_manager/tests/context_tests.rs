//! Tests for BuilderContext session lifecycle

use chrono::Utc;

use deck_core::{
    AiGap, IdGenerator, OutlineItem, OutlineType, PresentationAgent, Section,
};
use outline_manager::{BuilderContext, SaveHost};

fn agent_with_sections(titles: &[&str]) -> PresentationAgent {
    let mut ids = IdGenerator::with_epoch(0);
    let mut agent = PresentationAgent::new(&mut ids, OutlineType::Fixed);
    for title in titles {
        let mut section = Section::new_fixed(&mut ids, agent.sections.len());
        section.title = title.to_string();
        agent.sections.push(section);
    }
    agent
}

#[test]
fn test_outline_synthesized_when_missing() {
    let agent = agent_with_sections(&["Intro", "Pricing"]);
    assert!(agent.outline.is_empty());

    let context = BuilderContext::new(agent);

    let outline = &context.agent().outline;
    assert_eq!(outline.len(), 2);
    assert!(outline.iter().all(OutlineItem::is_section));
    assert_eq!(
        outline[0].as_section().unwrap().title,
        context.agent().sections[0].title
    );
}

#[test]
fn test_explicit_outline_preserved_and_sections_derived() {
    let mut ids = IdGenerator::with_epoch(0);
    let mut agent = PresentationAgent::new(&mut ids, OutlineType::Guided);
    let section = Section::new_fixed(&mut ids, 0);
    let gap = AiGap::new(&mut ids);
    agent.outline = vec![
        OutlineItem::Section(section.clone()),
        OutlineItem::AiGap(gap.clone()),
    ];

    let context = BuilderContext::with_generator(agent, IdGenerator::with_epoch(1));

    assert_eq!(context.agent().outline.len(), 2);
    assert_eq!(context.agent().outline[1].id(), gap.id);
    // sections projection re-derived from the outline, gap excluded
    assert_eq!(context.agent().sections, vec![section]);
}

#[test]
fn test_new_context_is_clean() {
    let context = BuilderContext::new(agent_with_sections(&["Intro"]));

    assert!(!context.is_dirty());
    assert!(context.active_drag().is_none());
}

#[test]
fn test_mutations_set_dirty_and_save_clears() {
    let mut context = BuilderContext::new(agent_with_sections(&[]));
    assert!(!context.is_dirty());

    context.update_name("Sales Proposal Agent");
    assert!(context.is_dirty());

    context.save_changes();
    assert!(!context.is_dirty());
    assert_eq!(context.agent().updated_at, Utc::now().date_naive());
    assert_eq!(context.agent().name, "Sales Proposal Agent");
}

#[test]
fn test_every_operation_kind_marks_dirty() {
    let mut context = BuilderContext::new(agent_with_sections(&[]));
    let section_id = context.add_section(Some("Intro"));
    context.save_changes();
    assert!(!context.is_dirty());

    context.update_section_title(&section_id, "Introduction");
    assert!(context.is_dirty());
    context.save_changes();

    context.add_ai_gap();
    assert!(context.is_dirty());
    context.save_changes();

    context.update_description("Creates proposals");
    assert!(context.is_dirty());
}

struct RecordingHost {
    saved: Vec<PresentationAgent>,
}

impl SaveHost for RecordingHost {
    fn persist(&mut self, agent: &PresentationAgent) {
        self.saved.push(agent.clone());
    }
}

#[test]
fn test_save_to_hands_host_a_stamped_snapshot() {
    let mut context = BuilderContext::new(agent_with_sections(&["Intro"]));
    context.update_name("Board Deck Agent");

    let mut host = RecordingHost { saved: Vec::new() };
    context.save_to(&mut host);

    assert!(!context.is_dirty());
    assert_eq!(host.saved.len(), 1);
    assert_eq!(host.saved[0].name, "Board Deck Agent");
    assert_eq!(host.saved[0].updated_at, Utc::now().date_naive());
}

#[test]
fn test_reset_discards_prior_edits() {
    let mut context = BuilderContext::new(agent_with_sections(&["Intro"]));
    context.update_name("Edited");
    assert!(context.is_dirty());
    context.set_active_drag(Some("section-0-0".to_string()));

    let replacement = agent_with_sections(&["Other"]);
    let replacement_id = replacement.id.clone();
    context.reset(replacement);

    assert_eq!(context.agent().id, replacement_id);
    assert!(!context.is_dirty());
    assert!(context.active_drag().is_none());
    assert_eq!(context.agent().sections[0].title, "Other");
}

#[test]
fn test_snapshot_is_detached_from_the_aggregate() {
    let mut context = BuilderContext::new(agent_with_sections(&["Intro"]));

    let mut snapshot = context.snapshot();
    snapshot.name = "mutated copy".to_string();
    snapshot.sections.clear();

    assert_ne!(context.agent().name, "mutated copy");
    assert_eq!(context.agent().sections.len(), 1);

    // changes only land through operations
    context.update_name("via operation");
    assert_eq!(context.agent().name, "via operation");
}

#[test]
fn test_active_drag_round_trip() {
    let mut context = BuilderContext::new(agent_with_sections(&[]));
    context.set_active_drag(Some("section-1-0".to_string()));
    assert_eq!(context.active_drag(), Some("section-1-0"));
    context.set_active_drag(None);
    assert!(context.active_drag().is_none());
}
