//! Server errors.

use actix_http::{body::BoxBody, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use asanabot_asana_interface::ApiError;
use thiserror::Error;

/// Server error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{}", detail)]
    MissingConfiguration { detail: &'static str },

    #[error("Missing Asana OAuth access token. Please authenticate first.")]
    MissingToken,

    #[error("Asana API error: {}", message)]
    AsanaApiError { status: u16, message: String },

    #[error("OAuth error: {}", message)]
    OAuthError { status: u16, message: String },

    #[error("Invalid project ID or insufficient permissions: {}", message)]
    InvalidProject { message: String },

    #[error("Unexpected error: {}", source)]
    UnexpectedError { source: ApiError },

    #[error("Missing webhook signature.")]
    MissingWebhookSignature,

    #[error("Invalid webhook signature.")]
    InvalidWebhookSignature,

    #[error("Webhook handshake rejected: a different secret is already in use.")]
    HandshakeRejected,

    #[error("I/O error,\n  caused by: {}", source)]
    IoError { source: std::io::Error },
}

impl From<ApiError> for ServerError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::HttpStatus { status, message } => Self::AsanaApiError { status, message },
            ApiError::MissingToken => Self::MissingToken,
            e => Self::UnexpectedError { source: e },
        }
    }
}

impl ServerError {
    /// Map an API error raised during the OAuth exchange.
    pub fn from_oauth(e: ApiError) -> Self {
        match e {
            ApiError::HttpStatus { status, message } => Self::OAuthError { status, message },
            e => e.into(),
        }
    }
}

fn upstream_status(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY)
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match &self {
            ServerError::AsanaApiError { status, .. } | ServerError::OAuthError { status, .. } => {
                upstream_status(*status)
            }
            ServerError::InvalidProject { .. } => StatusCode::BAD_REQUEST,
            ServerError::InvalidWebhookSignature | ServerError::HandshakeRejected => {
                StatusCode::FORBIDDEN
            }
            ServerError::MissingWebhookSignature => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "detail": self.to_string()
        }))
    }
}

/// Result alias for `ServerError`.
pub type Result<T> = core::result::Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asana_status_is_passed_through() {
        let err: ServerError = ApiError::HttpStatus {
            status: 404,
            message: "project: Unknown object: 42".into(),
        }
        .into();

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            err.to_string(),
            "Asana API error: project: Unknown object: 42"
        );
    }

    #[test]
    fn test_missing_token_is_internal_error() {
        let err: ServerError = ApiError::MissingToken.into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_oauth_errors() {
        let err = ServerError::from_oauth(ApiError::HttpStatus {
            status: 400,
            message: "The code has expired.".into(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "OAuth error: The code has expired.");

        assert!(matches!(
            ServerError::from_oauth(ApiError::MissingToken),
            ServerError::MissingToken
        ));
    }

    #[test]
    fn test_invalid_upstream_status_becomes_bad_gateway() {
        let err = ServerError::AsanaApiError {
            status: 42,
            message: "?".into(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }
}
