use serde::{Deserialize, Serialize};

use super::AsanaEvent;

/// Asana webhook delivery body.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct AsanaWebhookPayload {
    /// Events.
    #[serde(default)]
    pub events: Vec<AsanaEvent>,
}
