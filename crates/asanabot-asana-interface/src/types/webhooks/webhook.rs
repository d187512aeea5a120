use serde::{Deserialize, Serialize};

use super::AsanaWebhookFilter;
use crate::types::AsanaResource;

/// Asana Webhook.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct AsanaWebhook {
    /// Global ID.
    pub gid: String,
    /// Active?
    #[serde(default)]
    pub active: bool,
    /// Target URL.
    #[serde(default)]
    pub target: String,
    /// Watched resource.
    #[serde(default)]
    pub resource: AsanaResource,
    /// Filters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<AsanaWebhookFilter>,
}

/// Webhook creation request body.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct AsanaWebhookCreation {
    /// Watched resource GID.
    pub resource: String,
    /// Target URL.
    pub target: String,
    /// Filters.
    pub filters: Vec<AsanaWebhookFilter>,
}
