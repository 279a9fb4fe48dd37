//! Catalog reference types
//!
//! Slide instructions and agent metadata reference the content library,
//! layout catalog, and user groups by id; these are the shapes the host
//! supplies for display and selection.

use serde::{Deserialize, Serialize};

/// A folder of reusable slides in the content library.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LibraryFolder {
    pub id: String,
    pub name: String,
    pub slide_count: u32,
    pub path: String,
}

/// A single-slide layout the AI may render into.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SlideLayout {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// A presentation template (brand/type scoped set of layouts).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DocumentLayout {
    pub id: String,
    pub name: String,
    pub layout_count: u32,
    pub description: String,
}

/// A user group an agent can be targeted at.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct UserGroup {
    pub id: String,
    pub name: String,
    pub user_count: u32,
}

/// Display text for an agent's target groups: everyone, the single group's
/// name, or a count.
pub fn target_users_display(target_user_groups: &[String], catalog: &[UserGroup]) -> String {
    if target_user_groups.is_empty() {
        return "All users".to_string();
    }
    let names: Vec<&str> = target_user_groups
        .iter()
        .filter_map(|id| catalog.iter().find(|group| &group.id == id))
        .map(|group| group.name.as_str())
        .collect();
    match names.as_slice() {
        [] => "All users".to_string(),
        [single] => (*single).to_string(),
        many => format!("{} groups", many.len()),
    }
}
