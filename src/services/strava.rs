// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client.
//!
//! Handles:
//! - OAuth authorization code exchange
//! - Fetching the athlete's most recent activity

use crate::config::{Credentials, DEFAULT_STRAVA_BASE_URL};
use crate::error::AppError;
use crate::models::Activity;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    token_url: String,
    api_base_url: String,
    strict_token_status: bool,
}

impl StravaClient {
    /// Create a client against the production Strava host.
    pub fn new(http: reqwest::Client) -> Self {
        Self::with_base_url(http, DEFAULT_STRAVA_BASE_URL)
    }

    /// Create a client against another host (staging, test server).
    pub fn with_base_url(http: reqwest::Client, base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        Self {
            http,
            token_url: format!("{}/oauth/token", base_url),
            api_base_url: format!("{}/api/v3", base_url),
            strict_token_status: false,
        }
    }

    /// Reject non-2xx token responses instead of decoding them.
    pub fn with_strict_token_status(mut self, strict: bool) -> Self {
        self.strict_token_status = strict;
        self
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn strict_token_status(&self) -> bool {
        self.strict_token_status
    }

    /// Exchange an authorization code for an access token.
    ///
    /// POST https://www.strava.com/oauth/token (form-encoded)
    ///
    /// Unless strict mode is on, the response status is not checked: any
    /// body that carries an `access_token` is accepted, even on an error
    /// status.
    pub async fn exchange_token(&self, credentials: &Credentials) -> Result<String, AppError> {
        let response = self
            .http
            .post(&self.token_url)
            .form(&[
                ("client_id", credentials.client_id.as_str()),
                ("client_secret", credentials.client_secret.as_str()),
                ("code", credentials.code.as_str()),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Token exchange failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            if self.strict_token_status {
                tracing::error!(status = %status, "Strava token exchange rejected");
                return Err(AppError::TokenRejected {
                    status: status.as_u16(),
                });
            }
            tracing::warn!(status = %status, "Strava token exchange returned non-success status");
        }

        let token: TokenExchangeResponse = read_json(response, "token response").await?;
        Ok(token.access_token)
    }

    /// Fetch the most recent activity for the authenticated athlete.
    ///
    /// GET https://www.strava.com/api/v3/athlete/activities?per_page=1
    /// Authorization: Bearer {access_token}
    pub async fn fetch_latest_activity(&self, access_token: &str) -> Result<Activity, AppError> {
        let url = format!("{}/athlete/activities", self.api_base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .query(&[("per_page", "1")])
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Activity fetch failed: {}", e)))?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "Strava activity listing returned non-success status");
        }

        let activities: Vec<Activity> = read_json(response, "activity listing").await?;
        activities
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound("no activities found".to_string()))
    }
}

/// Drain the response body, then decode it.
///
/// Read failures and decode failures are reported separately.
async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
    what: &str,
) -> Result<T, AppError> {
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| AppError::Transport(format!("Failed to read {}: {}", what, e)))?;

    serde_json::from_slice(&body).map_err(|e| {
        AppError::Decode(format!(
            "Failed to parse {} (HTTP {}): {}",
            what,
            status.as_u16(),
            e
        ))
    })
}

/// Token exchange response from Strava OAuth.
///
/// Strava also returns refresh token, expiry and athlete; none are needed
/// for a single run.
#[derive(Debug, Clone, Deserialize)]
struct TokenExchangeResponse {
    access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_from_base_url() {
        let client = StravaClient::with_base_url(reqwest::Client::new(), "http://localhost:1234/");
        assert_eq!(client.token_url, "http://localhost:1234/oauth/token");
        assert_eq!(client.api_base_url, "http://localhost:1234/api/v3");
        assert!(!client.strict_token_status);
    }

    #[test]
    fn test_production_endpoints() {
        let client = StravaClient::new(reqwest::Client::new()).with_strict_token_status(true);
        assert_eq!(client.token_url, "https://www.strava.com/oauth/token");
        assert_eq!(client.api_base_url, "https://www.strava.com/api/v3");
        assert!(client.strict_token_status);
    }

    #[test]
    fn test_token_response_requires_access_token() {
        let ok: TokenExchangeResponse = serde_json::from_str(
            r#"{"token_type":"Bearer","access_token":"abc","refresh_token":"r","expires_at":1}"#,
        )
        .unwrap();
        assert_eq!(ok.access_token, "abc");

        let missing = serde_json::from_str::<TokenExchangeResponse>(r#"{"message":"Bad Request"}"#);
        assert!(missing.is_err());
    }
}
