use serde::{Deserialize, Serialize};

/// Compact Asana resource reference.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct AsanaResource {
    /// Global ID, empty when Asana left it out.
    #[serde(default)]
    pub gid: String,
    /// Resource type (`task`, `project`, `story`...).
    pub resource_type: Option<String>,
    /// Name.
    pub name: Option<String>,
}

impl AsanaResource {
    /// Resource type, `N/A` when absent.
    pub fn resource_type_or_na(&self) -> &str {
        self.resource_type.as_deref().unwrap_or("N/A")
    }
}
