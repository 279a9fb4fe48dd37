//! Tests for section duplication

use deck_core::{
    sections_from_outline, IdGenerator, OutlineType, PresentationAgent, QuestionConfig,
    SlideConfig, SlideType,
};
use outline_manager::BuilderContext;

fn empty_context() -> BuilderContext {
    let mut ids = IdGenerator::with_epoch(0);
    let agent = PresentationAgent::new(&mut ids, OutlineType::Guided);
    BuilderContext::with_generator(agent, IdGenerator::with_epoch(1))
}

#[test]
fn test_duplicate_clones_everything_but_id_and_title() {
    let mut context = empty_context();
    let section_id = context.add_section(Some("Case Studies"));

    let mut ids = IdGenerator::with_epoch(9);
    let slide = SlideConfig::new(&mut ids, SlideType::Ai);
    let question = QuestionConfig::new(&mut ids, "Which industry?", true);
    context.update_section_slides(&section_id, vec![slide.clone()]);
    context.update_section_questions(&section_id, vec![question.clone()]);

    context.duplicate_section(&section_id);

    let agent = context.agent();
    assert_eq!(agent.sections.len(), 2);

    let original = &agent.sections[0];
    let duplicate = &agent.sections[1];
    assert_ne!(duplicate.id, original.id);
    assert_eq!(duplicate.title, "Case Studies (Copy)");
    assert_eq!(duplicate.slides, original.slides);
    assert_eq!(duplicate.questions, original.questions);
    assert_eq!(duplicate.section_type, original.section_type);
}

#[test]
fn test_duplicate_inserts_after_original_with_interleaved_gap() {
    let mut context = empty_context();
    let a = context.add_section(Some("A"));
    let gap = context.add_ai_gap();
    let b = context.add_section(Some("B"));

    context.duplicate_section(&a);

    let agent = context.agent();
    // outline: [A, A (Copy), gap, B]
    assert_eq!(agent.outline.len(), 4);
    assert_eq!(agent.outline[0].id(), a);
    assert_eq!(agent.outline[1].as_section().unwrap().title, "A (Copy)");
    assert_eq!(agent.outline[2].id(), gap);
    assert_eq!(agent.outline[3].id(), b);

    // sections: [A, A (Copy), B]
    let titles: Vec<&str> = agent
        .sections
        .iter()
        .map(|section| section.title.as_str())
        .collect();
    assert_eq!(titles, vec!["A", "A (Copy)", "B"]);
    assert_eq!(agent.sections, sections_from_outline(&agent.outline));
}

#[test]
fn test_duplicate_of_last_section_appends() {
    let mut context = empty_context();
    context.add_section(Some("A"));
    let b = context.add_section(Some("B"));

    context.duplicate_section(&b);

    let titles: Vec<&str> = context
        .agent()
        .sections
        .iter()
        .map(|section| section.title.as_str())
        .collect();
    assert_eq!(titles, vec!["A", "B", "B (Copy)"]);
}

#[test]
fn test_duplicate_unknown_id_is_deep_noop() {
    let mut context = empty_context();
    context.add_section(Some("A"));
    context.save_changes();

    let before = context.snapshot();
    context.duplicate_section("section-unknown");

    assert_eq!(context.snapshot(), before);
    assert!(!context.is_dirty());
}

#[test]
fn test_duplicates_of_duplicates_stay_adjacent() {
    let mut context = empty_context();
    let a = context.add_section(Some("A"));

    context.duplicate_section(&a);
    context.duplicate_section(&a);

    let titles: Vec<&str> = context
        .agent()
        .sections
        .iter()
        .map(|section| section.title.as_str())
        .collect();
    // each duplicate lands immediately after the original
    assert_eq!(titles, vec!["A", "A (Copy)", "A (Copy)"]);

    let ids: Vec<&str> = context
        .agent()
        .sections
        .iter()
        .map(|section| section.id.as_str())
        .collect();
    let unique: std::collections::HashSet<&&str> = ids.iter().collect();
    assert_eq!(unique.len(), 3);
}
