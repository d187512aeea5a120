//! Webhook constants.

/// Asana handshake header.
pub const HOOK_SECRET_HEADER: &str = "X-Hook-Secret";
/// Asana signature header.
pub const HOOK_SIGNATURE_HEADER: &str = "X-Hook-Signature";
/// Asana OAuth scopes requested by the authorization URL.
pub const OAUTH_SCOPES: &str = "webhooks:write webhooks:read projects:read";
