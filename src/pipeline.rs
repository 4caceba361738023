// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Notification pipeline: authenticate, fetch, format, notify.
//!
//! Steps run strictly in order and the first failure ends the run. The
//! driver never exits the process; `main` maps the result to a status.

use crate::config::{Config, Credentials};
use crate::error::AppError;
use crate::models::{Activity, WebhookMessage};
use crate::services::{StravaClient, WebhookNotifier};
use std::fmt;

/// Pipeline stage, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Authenticating,
    Fetching,
    Formatting,
    Notifying,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Authenticating => "authenticating",
            Stage::Fetching => "fetching",
            Stage::Formatting => "formatting",
            Stage::Notifying => "notifying",
        };
        f.write_str(name)
    }
}

/// What a successful run did.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub activity: Activity,
    pub message: WebhookMessage,
}

/// The end-to-end driver.
#[derive(Clone)]
pub struct Pipeline {
    strava: StravaClient,
    notifier: WebhookNotifier,
    webhook_url: String,
}

impl Pipeline {
    pub fn new(strava: StravaClient, notifier: WebhookNotifier, webhook_url: String) -> Self {
        Self {
            strava,
            notifier,
            webhook_url,
        }
    }

    /// Build the pipeline from configuration, sharing one HTTP client.
    pub fn from_config(config: &Config) -> Self {
        let http = reqwest::Client::new();
        let strava = StravaClient::with_base_url(http.clone(), &config.strava_base_url)
            .with_strict_token_status(config.strict_token_exchange);
        Self::new(strava, WebhookNotifier::new(http), config.webhook_url.clone())
    }

    /// Run every stage once.
    pub async fn run(&self, credentials: &Credentials) -> Result<Outcome, AppError> {
        tracing::debug!(stage = %Stage::Authenticating, "Exchanging authorization code");
        let access_token = self.strava.exchange_token(credentials).await?;

        tracing::debug!(stage = %Stage::Fetching, "Fetching latest activity");
        let activity = self.strava.fetch_latest_activity(&access_token).await?;

        tracing::debug!(stage = %Stage::Formatting, activity_id = activity.id, "Formatting message");
        let message = WebhookMessage::from(&activity);

        tracing::debug!(stage = %Stage::Notifying, "Posting to webhook");
        self.notifier.notify(&self.webhook_url, &message).await?;

        tracing::info!(activity_id = activity.id, "Activity notification sent");
        Ok(Outcome { activity, message })
    }
}

/// Process exit status for a run result: 0 on success, 1 on any failure.
pub fn exit_status<T, E>(result: &Result<T, E>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::Authenticating.to_string(), "authenticating");
        assert_eq!(Stage::Notifying.to_string(), "notifying");
    }

    #[test]
    fn test_from_config_wires_strava_client() {
        let mut config = Config::test_default();
        config.strava_base_url = "http://127.0.0.1:9999".to_string();
        config.strict_token_exchange = true;

        let pipeline = Pipeline::from_config(&config);

        assert_eq!(pipeline.strava.token_url(), "http://127.0.0.1:9999/oauth/token");
        assert_eq!(pipeline.strava.api_base_url(), "http://127.0.0.1:9999/api/v3");
        assert!(pipeline.strava.strict_token_status());
        assert_eq!(pipeline.webhook_url, config.webhook_url);
    }

    #[test]
    fn test_from_config_defaults_to_lenient_production() {
        let pipeline = Pipeline::from_config(&Config::test_default());

        assert_eq!(pipeline.strava.token_url(), "https://www.strava.com/oauth/token");
        assert!(!pipeline.strava.strict_token_status());
    }

    #[test]
    fn test_exit_status() {
        let ok: Result<(), AppError> = Ok(());
        assert_eq!(exit_status(&ok), 0);

        let err: Result<(), AppError> = Err(AppError::NotFound("no activities found".into()));
        assert_eq!(exit_status(&err), 1);
    }
}
