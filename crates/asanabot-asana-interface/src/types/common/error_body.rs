use serde::Deserialize;

/// Asana error entry.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct AsanaErrorEntry {
    /// Message.
    #[serde(default)]
    pub message: String,
    /// Help text.
    pub help: Option<String>,
}

/// Asana error body.
///
/// REST endpoints answer `{"errors": [{"message": ...}]}`, the OAuth
/// endpoint answers `{"error": ..., "error_description": ...}`.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct AsanaErrorBody {
    /// REST errors.
    #[serde(default)]
    pub errors: Vec<AsanaErrorEntry>,
    /// OAuth error code.
    pub error: Option<String>,
    /// OAuth error description.
    pub error_description: Option<String>,
}

impl AsanaErrorBody {
    /// Extract the most useful message from a raw error body.
    pub fn message_from_body(body: &str) -> String {
        match serde_json::from_str::<Self>(body) {
            Ok(parsed) => parsed
                .errors
                .into_iter()
                .map(|e| e.message)
                .find(|m| !m.is_empty())
                .or(parsed.error_description)
                .or(parsed.error)
                .unwrap_or_else(|| body.to_string()),
            Err(_) => body.to_string(),
        }
    }
}
