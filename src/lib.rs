// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava-Notify: post the latest Strava activity to a chat webhook
//!
//! Exchanges an OAuth authorization code for an access token, fetches the
//! athlete's most recent activity, and posts a one-line summary to a
//! webhook. One run per invocation, no stored state.

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;

pub use pipeline::{exit_status, Outcome, Pipeline, Stage};
