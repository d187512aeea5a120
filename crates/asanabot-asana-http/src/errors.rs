use asanabot_asana_interface::ApiError;

#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum AsanaError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("Asana answered {}: {}", status, message)]
    HttpStatusError { status: u16, message: String },

    #[error("Missing Asana access token")]
    MissingTokenError,

    #[error("Invalid Asana access token header,\n  caused by: {}", source)]
    InvalidTokenError {
        source: http::header::InvalidHeaderValue,
    },
}

impl From<reqwest::Error> for AsanaError {
    fn from(e: reqwest::Error) -> Self {
        AsanaError::HttpError { source: e }
    }
}

impl From<AsanaError> for ApiError {
    fn from(e: AsanaError) -> Self {
        match e {
            AsanaError::HttpStatusError { status, message } => {
                ApiError::HttpStatus { status, message }
            }
            AsanaError::MissingTokenError => ApiError::MissingToken,
            e => ApiError::ImplementationError { source: e.into() },
        }
    }
}
