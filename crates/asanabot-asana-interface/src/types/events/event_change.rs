use serde::{Deserialize, Serialize};

/// Asana event change description.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct AsanaEventChange {
    /// Changed field.
    pub field: Option<String>,
    /// Change action.
    pub action: Option<String>,
    /// New value, when provided.
    pub new_value: Option<serde_json::Value>,
}

impl AsanaEventChange {
    /// Check the changed field, ignoring case and surrounding spaces.
    pub fn is_field(&self, name: &str) -> bool {
        self.field
            .as_deref()
            .map(|f| f.trim().eq_ignore_ascii_case(name))
            .unwrap_or(false)
    }
}
