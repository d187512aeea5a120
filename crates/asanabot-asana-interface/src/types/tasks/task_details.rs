use serde::{Deserialize, Serialize};

use super::AsanaTask;

/// Flattened task view served to clients.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct TaskDetails {
    /// Global ID.
    pub gid: String,
    /// Name.
    pub name: String,
    /// Assignee name.
    pub assignee: Option<String>,
    /// Due date.
    pub due_on: Option<String>,
    /// Completed?
    pub completed: bool,
}

impl From<AsanaTask> for TaskDetails {
    fn from(task: AsanaTask) -> Self {
        Self {
            assignee: task.assignee_name().map(ToOwned::to_owned),
            gid: task.gid,
            name: task.name,
            due_on: task.due_on,
            completed: task.completed,
        }
    }
}
