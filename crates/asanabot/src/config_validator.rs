//! Validation utilities.

use std::fmt::Write;

use asanabot_config::{ApiDriver, Config};
use thiserror::Error;

#[derive(Debug, PartialEq, Eq)]
enum ApiConfigError {
    MissingToken,
    MissingClientSecret,
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push('\n');
        let _ = write!(error, "  - Missing env. var.: {}", name);
    }

    let mut error = String::new();

    // Check server configuration
    if config.server.bind_ip.is_empty() {
        _missing(&mut error, "BOT_SERVER_BIND_IP");
    }
    if config.server.bind_port == 0 {
        _missing(&mut error, "BOT_SERVER_BIND_PORT");
    }
    if config.name.is_empty() {
        _missing(&mut error, "BOT_NAME");
    }

    // Check API credentials: token or OAuth client
    if config.api.driver == ApiDriver::Asana {
        match validate_api_credentials(config) {
            Err(ApiConfigError::MissingToken) => {
                _missing(&mut error, "BOT_API_ASANA_TOKEN");
            }
            Err(ApiConfigError::MissingClientSecret) => {
                _missing(&mut error, "BOT_API_ASANA_CLIENT_SECRET");
            }
            Ok(()) => (),
        }

        if config.api.asana.workspace_id.is_empty() {
            _missing(&mut error, "BOT_API_ASANA_WORKSPACE_ID");
        }
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

fn validate_api_credentials(config: &Config) -> Result<(), ApiConfigError> {
    let asana = &config.api.asana;

    // Check token first
    if !asana.token.is_empty() {
        Ok(())
    } else if asana.client_id.is_empty() {
        // Without OAuth client, a token is required.
        Err(ApiConfigError::MissingToken)
    } else if asana.client_secret.is_empty() {
        Err(ApiConfigError::MissingClientSecret)
    } else {
        Ok(())
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}
