// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for the notification pipeline.

/// Pipeline error. The first one raised aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request could not be sent or the response body could not be read.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body was not valid JSON or lacked an expected field.
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Webhook answered with anything other than 200 OK.
    #[error("Failed to post to webhook: status code {status}")]
    Delivery { status: u16 },

    /// Token endpoint answered with a non-success status (strict mode only).
    #[error("Token exchange rejected: status code {status}")]
    TokenRejected { status: u16 },
}

impl AppError {
    /// HTTP status carried by the error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::Delivery { status } | AppError::TokenRejected { status } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for pipeline steps
pub type Result<T> = std::result::Result<T, AppError>;
