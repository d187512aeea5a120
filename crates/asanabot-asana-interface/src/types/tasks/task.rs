use serde::{Deserialize, Serialize};

use crate::types::AsanaUser;

/// Asana Task.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct AsanaTask {
    /// Global ID.
    pub gid: String,
    /// Name.
    #[serde(default)]
    pub name: String,
    /// Assignee.
    pub assignee: Option<AsanaUser>,
    /// Description.
    #[serde(default)]
    pub notes: String,
    /// Due date.
    pub due_on: Option<String>,
    /// Completed?
    #[serde(default)]
    pub completed: bool,
}

impl AsanaTask {
    /// Assignee name, if the task is assigned.
    pub fn assignee_name(&self) -> Option<&str> {
        self.assignee
            .as_ref()
            .map(|a| a.name.as_str())
            .filter(|n| !n.is_empty())
    }

    /// Check if the task is assigned to someone, case-insensitively.
    pub fn is_assigned_to(&self, name: &str) -> bool {
        self.assignee_name()
            .map(|n| n.eq_ignore_ascii_case(name))
            .unwrap_or(false)
    }
}
