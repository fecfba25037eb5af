// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Global configuration for the application with cosmic-config support.

use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};

use crate::constant::{DEFAULT_GPSD_ENDPOINT, DEFAULT_POLL_INTERVAL_MS};

/// Global configuration for the application.
#[derive(Debug, Clone, CosmicConfigEntry, PartialEq)]
#[version = 1]
pub struct AppConfig {
    /// Whether starting the sensors needs an explicit user gesture.
    pub require_gesture: bool,
    /// Whether the coordinate footer is shown once a fix arrives.
    pub show_location: bool,
    /// gpsd endpoint queried for the one-shot location fix.
    pub gpsd_endpoint: String,
    /// Orientation poll interval in milliseconds.
    pub poll_interval_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            require_gesture: false,
            show_location: true,
            gpsd_endpoint: DEFAULT_GPSD_ENDPOINT.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}
