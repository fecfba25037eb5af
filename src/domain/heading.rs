// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/heading.rs
//
// Heading normalization and 16-point direction naming.

use std::fmt;

use crate::constant::{COMPASS_POINT_COUNT, DEGREES_PER_POINT, FULL_ROTATION};

/// Convert a raw sensor rotation angle into a compass heading.
///
/// The platform reports the rotation of the device frame about the
/// vertical axis, counterclockwise in degrees. A compass heading runs
/// clockwise from north, so the angle is inverted and wrapped into
/// `[0, 360)`. Any finite input is accepted; out-of-range angles wrap.
pub fn normalize_heading(raw: f64) -> f64 {
    (FULL_ROTATION - raw).rem_euclid(FULL_ROTATION)
}

/// One of the 16 points of the compass rose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompassPoint {
    N,
    Nne,
    Ne,
    Ene,
    E,
    Ese,
    Se,
    Sse,
    S,
    Ssw,
    Sw,
    Wsw,
    W,
    Wnw,
    Nw,
    Nnw,
}

impl CompassPoint {
    /// All points in clockwise order starting at north.
    pub const ALL: [CompassPoint; COMPASS_POINT_COUNT] = [
        Self::N,
        Self::Nne,
        Self::Ne,
        Self::Ene,
        Self::E,
        Self::Ese,
        Self::Se,
        Self::Sse,
        Self::S,
        Self::Ssw,
        Self::Sw,
        Self::Wsw,
        Self::W,
        Self::Wnw,
        Self::Nw,
        Self::Nnw,
    ];

    /// Select the nearest compass point for a heading in degrees.
    ///
    /// Each point covers a 22.5 degree sector centered on its bearing;
    /// sector boundaries round up (22.5 is already NNE).
    #[must_use]
    pub fn from_heading(heading: f64) -> Self {
        let wrapped = heading.rem_euclid(FULL_ROTATION);
        let index = (wrapped / DEGREES_PER_POINT).round() as usize % COMPASS_POINT_COUNT;
        Self::ALL[index]
    }

    /// Short display label ("N", "NNE", ...).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::Nne => "NNE",
            Self::Ne => "NE",
            Self::Ene => "ENE",
            Self::E => "E",
            Self::Ese => "ESE",
            Self::Se => "SE",
            Self::Sse => "SSE",
            Self::S => "S",
            Self::Ssw => "SSW",
            Self::Sw => "SW",
            Self::Wsw => "WSW",
            Self::W => "W",
            Self::Wnw => "WNW",
            Self::Nw => "NW",
            Self::Nnw => "NNW",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_normalize(raw: f64) -> f64 {
        (((FULL_ROTATION - raw) % FULL_ROTATION) + FULL_ROTATION) % FULL_ROTATION
    }

    #[test]
    fn normalized_heading_is_always_in_range() {
        let mut raw = -720.0;
        while raw <= 720.0 {
            let heading = normalize_heading(raw);
            assert!(
                (0.0..FULL_ROTATION).contains(&heading),
                "raw {raw} produced out-of-range heading {heading}"
            );
            raw += 0.25;
        }
    }

    #[test]
    fn normalization_matches_double_modulo_reference() {
        for raw in [-1000.5, -360.0, -359.9, -0.1, 0.0, 13.7, 359.9, 360.0, 361.0, 1234.5] {
            let got = normalize_heading(raw);
            let want = reference_normalize(raw);
            assert!(
                (got - want).abs() < 1e-9,
                "raw {raw}: got {got}, reference {want}"
            );
        }
    }

    #[test]
    fn inversion_turns_counterclockwise_into_clockwise() {
        assert_eq!(normalize_heading(0.0), 0.0);
        assert_eq!(normalize_heading(90.0), 270.0);
        assert_eq!(normalize_heading(270.0), 90.0);
        assert_eq!(normalize_heading(360.0), 0.0);
    }

    #[test]
    fn cardinal_directions_name_correctly() {
        assert_eq!(CompassPoint::from_heading(0.0), CompassPoint::N);
        assert_eq!(CompassPoint::from_heading(90.0), CompassPoint::E);
        assert_eq!(CompassPoint::from_heading(180.0), CompassPoint::S);
        assert_eq!(CompassPoint::from_heading(270.0), CompassPoint::W);
    }

    #[test]
    fn sector_midpoints_round_to_the_next_point() {
        // 22.5 sits exactly between N and NE; rounding selects NNE.
        assert_eq!(CompassPoint::from_heading(22.5), CompassPoint::Nne);

        // Every midpoint k * 22.5 maps to the k-th point of the rose.
        for (k, point) in CompassPoint::ALL.iter().enumerate() {
            let heading = k as f64 * DEGREES_PER_POINT;
            assert_eq!(CompassPoint::from_heading(heading), *point, "at {heading}");
        }
    }

    #[test]
    fn headings_near_north_wrap_back_to_n() {
        assert_eq!(CompassPoint::from_heading(348.75), CompassPoint::N);
        assert_eq!(CompassPoint::from_heading(359.9), CompassPoint::N);
        assert_eq!(CompassPoint::from_heading(11.2), CompassPoint::N);
    }

    #[test]
    fn labels_follow_the_rose_order() {
        let labels: Vec<&str> = CompassPoint::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(
            labels,
            [
                "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W",
                "WNW", "NW", "NNW"
            ]
        );
    }
}
