// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use strava_notify::config::Credentials;
use strava_notify::services::{StravaClient, WebhookNotifier};
use strava_notify::Pipeline;

#[allow(dead_code)]
pub const TOKEN_PATH: &str = "/oauth/token";
#[allow(dead_code)]
pub const ACTIVITIES_PATH: &str = "/api/v3/athlete/activities";
#[allow(dead_code)]
pub const WEBHOOK_PATH: &str = "/hooks/abc";

/// Credentials used by every test.
#[allow(dead_code)]
pub fn test_credentials() -> Credentials {
    Credentials {
        client_id: "12345".to_string(),
        client_secret: "shh".to_string(),
        code: "auth_code".to_string(),
    }
}

/// Strava client pointed at a mock server.
#[allow(dead_code)]
pub fn test_strava_client(base_url: &str) -> StravaClient {
    StravaClient::with_base_url(reqwest::Client::new(), base_url)
}

/// Full pipeline with Strava and the webhook both served by one mock server.
#[allow(dead_code)]
pub fn test_pipeline(base_url: &str) -> Pipeline {
    let http = reqwest::Client::new();
    Pipeline::new(
        StravaClient::with_base_url(http.clone(), base_url),
        WebhookNotifier::new(http),
        format!("{}{}", base_url, WEBHOOK_PATH),
    )
}
