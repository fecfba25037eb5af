// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Domain module root: heading math and location types.

pub mod heading;
pub mod location;

pub use heading::{normalize_heading, CompassPoint};
pub use location::Location;
