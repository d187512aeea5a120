use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Asana event action.
#[derive(Debug, Deserialize, Serialize, PartialEq, Default, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum AsanaEventAction {
    /// Added.
    Added,
    /// Changed.
    Changed,
    /// Removed.
    Removed,
    /// Deleted.
    Deleted,
    /// Undeleted.
    Undeleted,
    /// Anything Asana may add later.
    #[default]
    #[serde(other)]
    Unknown,
}

impl Display for AsanaEventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&serde_plain::to_string(&self).map_err(|_| std::fmt::Error)?)
    }
}
