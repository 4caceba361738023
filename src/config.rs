//! Run configuration loaded from environment variables.
//!
//! Everything is read once at startup and handed to the pipeline by
//! reference; nothing below this layer touches the environment.

use std::env;

/// Default Strava host. Token and API endpoints hang off this.
pub const DEFAULT_STRAVA_BASE_URL: &str = "https://www.strava.com";

/// OAuth credentials for a single run.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Strava OAuth client ID
    pub client_id: String,
    /// Strava OAuth client secret
    pub client_secret: String,
    /// Authorization code from the OAuth redirect
    pub code: String,
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    /// Webhook endpoint that receives the notification
    pub webhook_url: String,
    /// Strava host (overridable for staging and tests)
    pub strava_base_url: String,
    /// Reject non-2xx token responses instead of decoding them anyway
    pub strict_token_exchange: bool,
}

impl Config {
    /// Fixed configuration for tests.
    pub fn test_default() -> Self {
        Self {
            credentials: Credentials {
                client_id: "test_client_id".to_string(),
                client_secret: "test_secret".to_string(),
                code: "test_code".to_string(),
            },
            webhook_url: "http://localhost:8080/webhook".to_string(),
            strava_base_url: DEFAULT_STRAVA_BASE_URL.to_string(),
            strict_token_exchange: false,
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            credentials: Credentials {
                client_id: required("CLIENT_ID")?,
                client_secret: required("CLIENT_SECRET")?,
                code: required("CODE")?,
            },
            webhook_url: required("WEBHOOK_URL")?,
            strava_base_url: env::var("STRAVA_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_STRAVA_BASE_URL.to_string()),
            strict_token_exchange: env::var("STRICT_TOKEN_EXCHANGE")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::Missing(name))
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
