// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - outbound HTTP calls.

pub mod strava;
pub mod webhook;

pub use strava::StravaClient;
pub use webhook::WebhookNotifier;
