// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

/// Full rotation in degrees (for modulo calculation in heading normalization).
pub const FULL_ROTATION: f64 = 360.0;

/// Angular width of one compass point (360 / 16).
pub const DEGREES_PER_POINT: f64 = 22.5;

/// Number of points on the compass rose.
pub const COMPASS_POINT_COUNT: usize = 16;

/// Angular spacing of tick marks on the compass face.
pub const TICK_STEP_DEG: i32 = 10;

/// Tick length for cardinal directions (every 90 degrees).
pub const TICK_MAJOR_LEN: f32 = 20.0;

/// Tick length for intercardinal marks (every 30 degrees).
pub const TICK_MINOR_LEN: f32 = 15.0;

/// Tick length for plain 10-degree marks.
pub const TICK_PLAIN_LEN: f32 = 10.0;

/// Orientation poll interval in milliseconds (sysfs compass channel).
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Default gpsd endpoint for the one-shot location fix.
pub const DEFAULT_GPSD_ENDPOINT: &str = "127.0.0.1:2947";

/// How long to wait for a usable gpsd fix before giving up.
pub const FIX_TIMEOUT_SECS: u64 = 30;

/// Decimal places shown in the coordinate readout.
pub const COORD_DECIMALS: usize = 6;
