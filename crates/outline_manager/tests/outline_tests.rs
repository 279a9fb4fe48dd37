//! Tests for structural outline operations and the projection invariant

use deck_core::{sections_from_outline, IdGenerator, OutlineType, PresentationAgent};
use outline_manager::BuilderContext;

fn empty_context() -> BuilderContext {
    let mut ids = IdGenerator::with_epoch(0);
    let agent = PresentationAgent::new(&mut ids, OutlineType::Guided);
    BuilderContext::with_generator(agent, IdGenerator::with_epoch(1))
}

fn assert_projections_consistent(context: &BuilderContext) {
    let derived = sections_from_outline(&context.agent().outline);
    assert_eq!(
        context.agent().sections,
        derived,
        "sections projection diverged from outline"
    );
}

#[test]
fn test_add_section_appends_to_both_projections() {
    let mut context = empty_context();

    let section_id = context.add_section(Some("  Pricing  "));

    let agent = context.agent();
    assert_eq!(agent.outline.len(), 1);
    assert_eq!(agent.sections.len(), 1);
    assert_eq!(agent.outline[0].id(), section_id);
    assert_eq!(agent.sections[0].title, "Pricing");
    assert!(context.is_dirty());
    assert_projections_consistent(&context);
}

#[test]
fn test_add_section_without_title_is_empty() {
    let mut context = empty_context();
    let section_id = context.add_section(None);
    let section = context.agent().sections.first().unwrap();
    assert_eq!(section.id, section_id);
    assert!(section.title.is_empty());
}

#[test]
fn test_add_freeform_section() {
    let mut context = empty_context();
    let section_id = context.add_freeform_section();

    let section = context.agent().sections.first().unwrap();
    assert_eq!(section.id, section_id);
    assert_eq!(section.title, "Free Form");
    assert!(section.is_freeform());
}

#[test]
fn test_ai_gap_only_lives_in_outline() {
    let mut context = empty_context();
    context.add_section(Some("Intro"));
    let gap_id = context.add_ai_gap();

    let agent = context.agent();
    assert_eq!(agent.outline.len(), 2);
    assert_eq!(agent.outline[1].id(), gap_id);
    assert_eq!(agent.sections.len(), 1);
    assert!(agent.sections.iter().all(|section| section.id != gap_id));
    assert_projections_consistent(&context);
}

#[test]
fn test_projection_invariant_across_mixed_sequences() {
    let mut context = empty_context();

    let a = context.add_section(Some("A"));
    context.add_ai_gap();
    let b = context.add_section(Some("B"));
    context.duplicate_section(&a);
    context.add_freeform_section();
    context.delete_section(&b);
    let gap = context.add_ai_gap();
    context.delete_ai_gap(&gap);
    context.duplicate_section("section-not-there");

    assert_projections_consistent(&context);
}

#[test]
fn test_reorder_outline_is_verbatim() {
    let mut context = empty_context();
    context.add_section(Some("A"));
    context.add_ai_gap();
    context.add_section(Some("B"));

    let mut reordered = context.agent().outline.clone();
    reordered.reverse();
    context.reorder_outline(reordered.clone());

    assert_eq!(context.agent().outline, reordered);
    // derived sections follow the new relative order: B before A
    let titles: Vec<&str> = context
        .agent()
        .sections
        .iter()
        .map(|section| section.title.as_str())
        .collect();
    assert_eq!(titles, vec!["B", "A"]);
    assert_projections_consistent(&context);
}

#[test]
fn test_delete_section_removes_from_both_projections() {
    let mut context = empty_context();
    let a = context.add_section(Some("A"));
    let b = context.add_section(Some("B"));

    context.delete_section(&a);

    let agent = context.agent();
    assert_eq!(agent.outline.len(), 1);
    assert_eq!(agent.outline[0].id(), b);
    assert_eq!(agent.sections.len(), 1);
    assert_projections_consistent(&context);
}

#[test]
fn test_delete_nonexistent_id_leaves_state_deeply_equal() {
    let mut context = empty_context();
    context.add_section(Some("A"));
    context.add_ai_gap();
    context.save_changes();

    let before = context.snapshot();
    context.delete_section("section-never-existed");
    context.delete_ai_gap("ai-gap-never-existed");

    assert_eq!(context.snapshot(), before);
    assert!(!context.is_dirty());
}

#[test]
fn test_delete_is_idempotent() {
    let mut context = empty_context();
    let a = context.add_section(Some("A"));

    context.delete_section(&a);
    let after_first = context.snapshot();
    context.save_changes();
    let saved = context.snapshot();

    context.delete_section(&a);
    assert_eq!(context.snapshot(), saved);
    assert_eq!(after_first.sections.len(), 0);
}

#[test]
fn test_update_ai_gap_guidance() {
    let mut context = empty_context();
    let gap_id = context.add_ai_gap();
    context.save_changes();

    context.update_ai_gap_guidance(&gap_id, "Add market context here");

    let gap = context.agent().outline[0].as_ai_gap().unwrap();
    assert_eq!(gap.guidance, "Add market context here");
    assert!(context.is_dirty());

    // unknown gap id: deep no-op
    context.save_changes();
    let before = context.snapshot();
    context.update_ai_gap_guidance("ai-gap-missing", "ignored");
    assert_eq!(context.snapshot(), before);
    assert!(!context.is_dirty());
}

#[test]
fn test_section_field_updates_touch_both_projections() {
    let mut context = empty_context();
    let section_id = context.add_section(Some("Intro"));

    context.update_section_title(&section_id, "Introduction");
    context.update_section_instructions(&section_id, "Open with the agenda");
    context.update_section_ai_expansion(&section_id, true);
    context.update_section_ai_expansion_guidance(&section_id, "Expand with market data");

    let from_sections = &context.agent().sections[0];
    let from_outline = context.agent().outline[0].as_section().unwrap();
    assert_eq!(from_sections, from_outline);
    assert_eq!(from_outline.title, "Introduction");
    assert_eq!(from_outline.instructions.as_deref(), Some("Open with the agenda"));
    assert_eq!(from_outline.ai_expansion, Some(true));
    assert_projections_consistent(&context);
}

#[test]
fn test_freeform_guidance_update() {
    let mut context = empty_context();
    let section_id = context.add_freeform_section();

    context.update_section_freeform_guidance(&section_id, "Structure by region");

    assert_eq!(
        context.agent().sections[0].freeform_guidance.as_deref(),
        Some("Structure by region")
    );
}
