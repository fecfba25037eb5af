// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/update.rs
//
// Message handling for the compass application.

use std::time::Duration;

use cosmic::{Action, Task};

use crate::constant::FIX_TIMEOUT_SECS;
use crate::sensors::geolocation;
use crate::ui::app::RosaApp;
use crate::ui::message::AppMessage;

pub enum UpdateResult {
    None,
    Task(Task<Action<AppMessage>>),
}

pub fn update(app: &mut RosaApp, message: &AppMessage) -> UpdateResult {
    match message {
        AppMessage::EnableSensors => {
            if app.model.permission.granted() {
                return UpdateResult::None;
            }

            // The button press is the user gesture the platform wants.
            // Granting starts the orientation subscription; the fix is
            // requested exactly once per grant.
            app.model.permission.grant();
            UpdateResult::Task(locate(app.config.gpsd_endpoint.clone()))
        }

        AppMessage::OrientationChanged(reading) => {
            if app.model.apply_orientation(*reading) {
                app.model.face_cache.clear();
            }
            UpdateResult::None
        }

        AppMessage::LocationFix(location) => {
            if app.model.apply_fix(*location) {
                log::info!("location fix: {location}");
            }
            UpdateResult::None
        }

        AppMessage::LocationUnavailable => {
            // Non-fatal: the coordinate readout simply never appears.
            log::debug!("no location fix available");
            UpdateResult::None
        }

        AppMessage::ToggleLocationReadout => {
            app.config.show_location = !app.config.show_location;
            app.save_config();
            UpdateResult::None
        }

        AppMessage::LaunchUrl(url) => {
            if let Err(error) = open::that_detached(url) {
                log::warn!("failed to open {url}: {error}");
            }
            UpdateResult::None
        }

        // Panel toggles are handled in the application shell.
        AppMessage::ToggleContextPage(_) => UpdateResult::None,
    }
}

/// One-shot geolocation task: resolve the fix or degrade silently.
pub fn locate(endpoint: String) -> Task<Action<AppMessage>> {
    Task::perform(
        async move {
            geolocation::current_position(&endpoint, Duration::from_secs(FIX_TIMEOUT_SECS)).await
        },
        |result| match result {
            Ok(location) => Action::App(AppMessage::LocationFix(location)),
            Err(error) => {
                log::debug!("location request failed: {error:#}");
                Action::App(AppMessage::LocationUnavailable)
            }
        },
    )
}
