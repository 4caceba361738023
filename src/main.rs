// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava-Notify CLI
//!
//! Reads credentials from the environment, runs the pipeline once and
//! exits 0 on success or 1 on the first error.

use anyhow::Context;
use std::process::ExitCode;
use strava_notify::{config::Config, exit_status, Outcome, Pipeline};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logging();

    let result = run().await;
    if let Err(err) = &result {
        let message = format!("{:#}", err);
        tracing::error!(error = %message, "Notification failed");
    }

    ExitCode::from(exit_status(&result))
}

async fn run() -> anyhow::Result<Outcome> {
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(strava = %config.strava_base_url, "Starting Strava-Notify");

    let pipeline = Pipeline::from_config(&config);
    let outcome = pipeline.run(&config.credentials).await?;
    Ok(outcome)
}

/// Initialize structured JSON logging on stderr.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("strava_notify=debug,info"));

    tracing_subscriber::registry().with(filter).with(format).init();
}
