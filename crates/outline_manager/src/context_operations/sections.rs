//! Per-field section updates

use crate::context::BuilderContext;

impl BuilderContext {
    /// Replace a section's title.
    pub fn update_section_title(&mut self, section_id: &str, title: impl Into<String>) {
        let title = title.into();
        self.with_section(section_id, "update_section_title", |section| {
            section.title = title;
        });
    }

    /// Replace a section's authoring instructions.
    pub fn update_section_instructions(
        &mut self,
        section_id: &str,
        instructions: impl Into<String>,
    ) {
        let instructions = instructions.into();
        self.with_section(section_id, "update_section_instructions", |section| {
            section.instructions = Some(instructions);
        });
    }

    /// Replace a freeform section's structure guidance.
    pub fn update_section_freeform_guidance(
        &mut self,
        section_id: &str,
        freeform_guidance: impl Into<String>,
    ) {
        let freeform_guidance = freeform_guidance.into();
        self.with_section(section_id, "update_section_freeform_guidance", |section| {
            section.freeform_guidance = Some(freeform_guidance);
        });
    }

    /// Toggle whether the AI may expand after this section (guided
    /// outline agents only).
    pub fn update_section_ai_expansion(&mut self, section_id: &str, ai_expansion: bool) {
        self.with_section(section_id, "update_section_ai_expansion", |section| {
            section.ai_expansion = Some(ai_expansion);
        });
    }

    /// Replace the expansion guidance text.
    pub fn update_section_ai_expansion_guidance(
        &mut self,
        section_id: &str,
        guidance: impl Into<String>,
    ) {
        let guidance = guidance.into();
        self.with_section(
            section_id,
            "update_section_ai_expansion_guidance",
            |section| {
                section.ai_expansion_guidance = Some(guidance);
            },
        );
    }
}
