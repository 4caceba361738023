// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Webhook delivery (Slack-style incoming webhooks).

use crate::error::AppError;
use crate::models::WebhookMessage;
use reqwest::StatusCode;

/// Posts notification messages to a webhook URL.
#[derive(Clone)]
pub struct WebhookNotifier {
    http: reqwest::Client,
}

impl WebhookNotifier {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// POST the message as JSON. Only `200 OK` counts as delivered.
    pub async fn notify(&self, webhook_url: &str, message: &WebhookMessage) -> Result<(), AppError> {
        let response = self
            .http
            .post(webhook_url)
            .json(message)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Webhook request failed: {}", e)))?;

        let status = response.status();
        // Drain so the connection goes back to the pool; the body is unused.
        if let Err(e) = response.bytes().await {
            tracing::debug!(error = %e, "Failed to drain webhook response body");
        }

        if status != StatusCode::OK {
            tracing::error!(status = %status, "Webhook delivery failed");
            return Err(AppError::Delivery {
                status: status.as_u16(),
            });
        }

        tracing::debug!("Webhook delivered");
        Ok(())
    }
}
