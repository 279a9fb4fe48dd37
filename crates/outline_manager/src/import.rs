//! Instruction import - seeding an agent from pasted text
//!
//! A deterministic stand-in for AI-assisted parsing: the first line
//! becomes the name, and the pasted body seeds a three-section skeleton.

use serde::{Deserialize, Serialize};

use deck_core::{IdGenerator, Section};

use crate::error::BuilderError;

const NAME_MAX_CHARS: usize = 60;
const BODY_MAX_CHARS: usize = 500;

/// Pre-filled agent fields produced from pasted instructions.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AgentSeed {
    pub name: String,
    pub description: String,
    pub sections: Vec<Section>,
}

/// Parse pasted instruction text into an agent seed.
///
/// Whitespace-only input is rejected; everything else succeeds.
pub fn parse_instructions(
    ids: &mut IdGenerator,
    instructions: &str,
) -> Result<AgentSeed, BuilderError> {
    let lines: Vec<&str> = instructions
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        return Err(BuilderError::EmptyInstructions);
    }

    let name: String = lines[0].chars().take(NAME_MAX_CHARS).collect();
    let description = format!(
        "AI-generated agent based on pasted instructions ({} lines)",
        lines.len()
    );
    let body: String = instructions.trim().chars().take(BODY_MAX_CHARS).collect();

    let mut introduction = Section::new_fixed(ids, 0);
    introduction.title = "Introduction".to_string();
    introduction.instructions = Some("Set the stage and introduce the topic".to_string());

    let mut main_content = Section::new_fixed(ids, 1);
    main_content.title = "Main Content".to_string();
    main_content.instructions = Some(body);

    let mut summary = Section::new_fixed(ids, 2);
    summary.title = "Summary & Next Steps".to_string();
    summary.instructions = Some("Wrap up with key takeaways and action items".to_string());

    Ok(AgentSeed {
        name,
        description,
        sections: vec![introduction, main_content, summary],
    })
}
