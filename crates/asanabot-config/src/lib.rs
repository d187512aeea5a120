//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{ApiDriver, DriverError};

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API driver.
    pub driver: ApiDriver,
    /// Asana options.
    pub asana: ApiAsanaConfig,
}

#[derive(Debug, Clone)]
pub struct ApiAsanaConfig {
    /// Asana API root URL.
    pub root_url: String,
    /// Asana OAuth root URL.
    pub oauth_url: String,
    /// Asana API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// Asana API request timeout (in milliseconds).
    pub request_timeout: u64,
    /// Asana bearer token (personal access token or OAuth token).
    pub token: String,
    /// OAuth client ID.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: String,
    /// Workspace ID.
    pub workspace_id: String,
    /// Project ID watched by the webhook.
    pub project_id: String,
}

#[derive(Debug, Clone)]
pub struct SentryConfig {
    /// Sentry URL.
    pub url: String,
    /// Traces sample rate (between 0 and 1) for Sentry
    pub traces_sample_rate: f32,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind IP.
    pub bind_ip: String,
    /// Server bind port.
    pub bind_port: u16,
    /// Server workers count.
    pub workers_count: Option<u16>,
    /// Public URL used as webhook target base.
    pub public_url: String,
    /// Pre-shared webhook secret.
    pub webhook_secret: String,
    /// Disable webhook signature verification.
    pub disable_webhook_signature: bool,
    /// Post a comment on tasks assigned to the trigger assignee.
    pub enable_assignment_comments: bool,
}

/// Bot configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bot name.
    pub name: String,
    /// API options.
    pub api: ApiConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Sentry options.
    pub sentry: SentryConfig,
    /// Server options.
    pub server: ServerConfig,
    /// Assignee name triggering the assignment intake.
    pub trigger_assignee_name: String,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Result<Config, DriverError> {
        Ok(Config {
            name: env_to_str("BOT_NAME", "asanabot"),
            api: ApiConfig {
                driver: ApiDriver::from_str(&env_to_str("BOT_API_DRIVER", "asana"))?,
                asana: ApiAsanaConfig {
                    root_url: env_to_str(
                        "BOT_API_ASANA_ROOT_URL",
                        "https://app.asana.com/api/1.0",
                    ),
                    oauth_url: env_to_str("BOT_API_ASANA_OAUTH_URL", "https://app.asana.com/-"),
                    connect_timeout: env_to_u64("BOT_API_ASANA_CONNECT_TIMEOUT", 5000),
                    request_timeout: env_to_u64("BOT_API_ASANA_REQUEST_TIMEOUT", 30000),
                    token: env_to_str("BOT_API_ASANA_TOKEN", ""),
                    client_id: env_to_str("BOT_API_ASANA_CLIENT_ID", ""),
                    client_secret: env_to_str("BOT_API_ASANA_CLIENT_SECRET", ""),
                    workspace_id: env_to_str("BOT_API_ASANA_WORKSPACE_ID", ""),
                    project_id: env_to_str("BOT_API_ASANA_PROJECT_ID", ""),
                },
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("BOT_LOGGING_USE_BUNYAN", false),
            },
            sentry: SentryConfig {
                url: env_to_str("BOT_SENTRY_URL", ""),
                traces_sample_rate: env_to_f32("BOT_SENTRY_TRACES_SAMPLE_RATE", 0.0),
            },
            server: ServerConfig {
                bind_ip: env_to_str("BOT_SERVER_BIND_IP", "127.0.0.1"),
                bind_port: env_to_u16("BOT_SERVER_BIND_PORT", 8000),
                workers_count: env_to_optional_u16("BOT_SERVER_WORKERS_COUNT", None),
                public_url: env_to_str("BOT_SERVER_PUBLIC_URL", ""),
                webhook_secret: env_to_str("BOT_SERVER_WEBHOOK_SECRET", ""),
                disable_webhook_signature: env_to_bool(
                    "BOT_SERVER_DISABLE_WEBHOOK_SIGNATURE",
                    false,
                ),
                enable_assignment_comments: env_to_bool(
                    "BOT_SERVER_ENABLE_ASSIGNMENT_COMMENTS",
                    false,
                ),
            },
            trigger_assignee_name: env_to_str("BOT_TRIGGER_ASSIGNEE_NAME", "Glassbox"),
            version,
        })
    }

    pub fn from_env_no_version() -> Result<Self, DriverError> {
        Self::from_env("0.0.0".into())
    }
}

fn env_to_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_optional_u16(name: &str, default: Option<u16>) -> Option<u16> {
    env::var(name)
        .map(|e| e.parse::<u16>().map(Some).unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_f32(name: &str, default: f32) -> f32 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .unwrap_or_else(|_e| default.to_string())
        .replace("\\n", "\n")
}
