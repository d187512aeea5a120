use serde::{Deserialize, Serialize};

/// Asana User.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct AsanaUser {
    /// Global ID.
    pub gid: String,
    /// Name.
    #[serde(default)]
    pub name: String,
}
