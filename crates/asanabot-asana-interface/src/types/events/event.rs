use serde::{Deserialize, Serialize};

use super::{AsanaEventAction, AsanaEventChange};
use crate::types::{AsanaResource, AsanaUser};

/// Asana webhook event.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct AsanaEvent {
    /// Action.
    pub action: Option<AsanaEventAction>,
    /// Resource.
    pub resource: Option<AsanaResource>,
    /// User who triggered the event.
    pub user: Option<AsanaUser>,
    /// Creation date.
    pub created_at: Option<String>,
    /// Parent resource.
    pub parent: Option<AsanaResource>,
    /// Change details, for `changed` events.
    pub change: Option<AsanaEventChange>,
}

impl AsanaEvent {
    /// Resource GID, `N/A` when absent.
    pub fn resource_gid(&self) -> &str {
        self.resource
            .as_ref()
            .map(|r| r.gid.as_str())
            .filter(|gid| !gid.is_empty())
            .unwrap_or("N/A")
    }

    /// Resource type, `N/A` when absent.
    pub fn resource_type(&self) -> &str {
        self.resource
            .as_ref()
            .map(|r| r.resource_type_or_na())
            .unwrap_or("N/A")
    }

    /// Is this a change of a task assignee?
    pub fn is_task_assignee_change(&self) -> bool {
        self.resource_type() == "task"
            && self.action == Some(AsanaEventAction::Changed)
            && self
                .change
                .as_ref()
                .map(|c| c.is_field("assignee"))
                .unwrap_or(false)
    }
}
