// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/message.rs
//
// Application messages: events, user actions, and internal signals.

use crate::domain::Location;
use crate::sensors::OrientationReading;
use crate::ui::ContextPage;

#[derive(Debug, Clone)]
pub enum AppMessage {
    // Sensors.
    EnableSensors,
    OrientationChanged(OrientationReading),
    LocationFix(Location),
    LocationUnavailable,

    // Panels.
    ToggleContextPage(ContextPage),
    ToggleLocationReadout,

    // External.
    LaunchUrl(String),
}
