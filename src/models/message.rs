// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Webhook payload.

use super::activity::{format_message, Activity};
use serde::{Deserialize, Serialize};

/// JSON body posted to the webhook: `{"text": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookMessage {
    pub text: String,
}

impl WebhookMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl From<&Activity> for WebhookMessage {
    fn from(activity: &Activity) -> Self {
        Self::new(format_message(activity))
    }
}
