//! Auth.

use std::time::Duration;

use asanabot_config::Config;
use http::{header, HeaderMap};
use reqwest::ClientBuilder;
use tokio::sync::RwLock;

use crate::errors::AsanaError;

/// In-memory bearer token, replaced after an OAuth exchange.
#[derive(Debug, Default)]
pub struct TokenStore {
    token: RwLock<String>,
}

impl TokenStore {
    /// Create a store seeded with a token (may be empty).
    pub fn new<T: Into<String>>(token: T) -> Self {
        Self {
            token: RwLock::new(token.into()),
        }
    }

    /// Current token, if any.
    pub async fn get(&self) -> Option<String> {
        let token = self.token.read().await;
        if token.is_empty() {
            None
        } else {
            Some(token.clone())
        }
    }

    /// Replace the token.
    pub async fn set<T: Into<String>>(&self, token: T) {
        *self.token.write().await = token.into();
    }
}

/// Get an authenticated Asana client builder.
pub async fn get_authenticated_client_builder(
    config: &Config,
    tokens: &TokenStore,
) -> Result<ClientBuilder, AsanaError> {
    let token = tokens.get().await.ok_or(AsanaError::MissingTokenError)?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/json"),
    );
    headers.insert(
        header::AUTHORIZATION,
        header::HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| AsanaError::InvalidTokenError { source: e })?,
    );

    Ok(get_anonymous_client_builder(config).default_headers(headers))
}

/// Get anonymous Asana client builder.
pub fn get_anonymous_client_builder(config: &Config) -> ClientBuilder {
    const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/json"),
    );

    ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.api.asana.connect_timeout))
        .timeout(Duration::from_millis(config.api.asana.request_timeout))
        .user_agent(format!("{}/{APP_VERSION}", config.name))
        .default_headers(headers)
}

/// Build an Asana REST URL.
pub fn build_asana_url<T: Into<String>>(config: &Config, path: T) -> String {
    format!(
        "{}{}",
        config.api.asana.root_url.trim_end_matches('/'),
        path.into()
    )
}

/// Build an Asana OAuth URL.
pub fn build_oauth_url<T: Into<String>>(config: &Config, path: T) -> String {
    format!(
        "{}{}",
        config.api.asana.oauth_url.trim_end_matches('/'),
        path.into()
    )
}
