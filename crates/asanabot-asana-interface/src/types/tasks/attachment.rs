use serde::{Deserialize, Serialize};

/// Asana Attachment.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct AsanaAttachment {
    /// Global ID.
    pub gid: String,
    /// File name.
    #[serde(default)]
    pub name: String,
    /// Short-lived download URL.
    pub download_url: Option<String>,
    /// Permanent URL.
    pub permanent_url: Option<String>,
}

impl AsanaAttachment {
    /// Best URL for the attachment: download URL first, then permanent URL.
    pub fn url(&self) -> Option<&str> {
        self.download_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .or_else(|| self.permanent_url.as_deref().filter(|u| !u.is_empty()))
    }
}
