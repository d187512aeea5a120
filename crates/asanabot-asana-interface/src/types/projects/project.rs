use serde::{Deserialize, Serialize};

use crate::types::AsanaUser;

/// Asana Project status.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct AsanaProjectStatus {
    /// Status text.
    pub text: Option<String>,
    /// Status title.
    pub title: Option<String>,
}

/// Asana Project.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct AsanaProject {
    /// Global ID.
    pub gid: String,
    /// Name.
    #[serde(default)]
    pub name: String,
    /// Owner.
    pub owner: Option<AsanaUser>,
    /// Due date (`YYYY-MM-DD`).
    pub due_on: Option<String>,
    /// Current status.
    pub current_status: Option<AsanaProjectStatus>,
}
