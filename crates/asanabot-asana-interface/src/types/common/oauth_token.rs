use serde::{Deserialize, Serialize};

/// Asana OAuth token response.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct AsanaOAuthToken {
    /// Access token.
    pub access_token: String,
    /// Token type.
    pub token_type: String,
    /// Lifetime in seconds.
    pub expires_in: u64,
    /// Refresh token.
    pub refresh_token: Option<String>,
}
