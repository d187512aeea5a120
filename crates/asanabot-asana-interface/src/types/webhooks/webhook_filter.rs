use serde::{Deserialize, Serialize};

/// Asana Webhook filter.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct AsanaWebhookFilter {
    /// Resource type.
    pub resource_type: String,
    /// Action, absent when the filter matches every action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Watched fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

impl AsanaWebhookFilter {
    /// Build a filter on a resource type and action.
    pub fn new<T: Into<String>, A: Into<String>>(resource_type: T, action: A) -> Self {
        Self {
            resource_type: resource_type.into(),
            action: Some(action.into()),
            fields: None,
        }
    }

    /// Filters for task creations, changes and deletions.
    pub fn task_lifecycle() -> Vec<Self> {
        vec![
            Self::new("task", "added"),
            Self::new("task", "changed"),
            Self::new("task", "deleted"),
        ]
    }
}
