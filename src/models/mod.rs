// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod message;

pub use activity::{format_message, Activity};
pub use message::WebhookMessage;
