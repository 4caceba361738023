// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava activity model and its notification text.

use serde::{Deserialize, Serialize};

/// One activity from the athlete activities listing.
///
/// Only the fields the notification needs are decoded; Strava sends many
/// more and they are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Strava activity ID
    pub id: i64,
    /// Activity name/title
    pub name: String,
    /// Distance in meters
    pub distance: f64,
    /// Moving time in seconds
    pub moving_time: i64,
}

impl Activity {
    /// Distance in kilometers.
    pub fn distance_km(&self) -> f64 {
        self.distance / 1000.0
    }

    /// Whole minutes of moving time, truncated.
    pub fn moving_minutes(&self) -> i64 {
        self.moving_time / 60
    }
}

/// Render the one-line summary posted to the webhook.
pub fn format_message(activity: &Activity) -> String {
    format!(
        "New activity logged: {} ({:.2} km, {} min)",
        activity.name,
        activity.distance_km(),
        activity.moving_minutes()
    )
}
