// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/location.rs
//
// Geographic position from a one-shot fix.

use std::fmt;

use crate::constant::COORD_DECIMALS;

/// A geographic position in decimal degrees.
///
/// Latitude is degrees north (-90 to 90), longitude degrees east
/// (-180 to 180). No altitude: the compass only shows where, not how
/// high.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.prec$}, {:.prec$}",
            self.latitude,
            self.longitude,
            prec = COORD_DECIMALS
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readout_uses_six_decimals() {
        let loc = Location::new(48.208174, 16.373819);
        assert_eq!(loc.to_string(), "48.208174, 16.373819");
    }

    #[test]
    fn readout_pads_short_fractions() {
        let loc = Location::new(-33.9, 151.2);
        assert_eq!(loc.to_string(), "-33.900000, 151.200000");
    }
}
