//! API errors.

use thiserror::Error;

/// API error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ApiError {
    /// Asana answered with a non-success status.
    #[error("Asana API error ({}): {}", status, message)]
    HttpStatus { status: u16, message: String },

    /// No bearer token is available.
    #[error("Missing Asana access token. Please authenticate first.")]
    MissingToken,

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl ApiError {
    /// Upstream HTTP status, if Asana answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result alias for `ApiError`.
pub type Result<T, E = ApiError> = core::result::Result<T, E>;
