// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/model.rs
//
// Application state and its transitions.

use cosmic::Renderer;
use cosmic::iced_widget::canvas;

use crate::constant::FULL_ROTATION;
use crate::domain::{CompassPoint, Location, normalize_heading};
use crate::sensors::{OrientationReading, PermissionState};

pub struct AppModel {
    /// Current compass heading in `[0, 360)`, clockwise from north.
    pub heading: f64,

    /// One-shot location fix, set at most once per permission grant.
    pub location: Option<Location>,

    /// Sensor permission latch.
    pub permission: PermissionState,

    /// Cached compass face geometry, cleared whenever the heading moves.
    pub face_cache: canvas::Cache<Renderer>,
}

impl AppModel {
    /// Create the model with a seed heading (CLI `--heading`, default 0).
    pub fn new(initial_heading: f64) -> Self {
        Self {
            heading: initial_heading.rem_euclid(FULL_ROTATION),
            location: None,
            permission: PermissionState::default(),
            face_cache: canvas::Cache::new(),
        }
    }

    /// Fold one orientation sample into the heading.
    ///
    /// An absent sample leaves the heading untouched. Returns whether
    /// the heading changed, so the caller knows to invalidate the face.
    pub fn apply_orientation(&mut self, reading: OrientationReading) -> bool {
        let Some(alpha) = reading.alpha else {
            return false;
        };

        let heading = normalize_heading(alpha);
        if heading == self.heading {
            return false;
        }

        self.heading = heading;
        true
    }

    /// Record the one-shot fix. Later fixes are ignored; the location
    /// is never re-queried once set.
    pub fn apply_fix(&mut self, location: Location) -> bool {
        if self.location.is_some() {
            return false;
        }
        self.location = Some(location);
        true
    }

    /// Compass point label for the current heading.
    #[must_use]
    pub fn direction(&self) -> CompassPoint {
        CompassPoint::from_heading(self.heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_heading_is_wrapped_into_range() {
        assert_eq!(AppModel::new(0.0).heading, 0.0);
        assert_eq!(AppModel::new(450.0).heading, 90.0);
        assert_eq!(AppModel::new(-90.0).heading, 270.0);
    }

    #[test]
    fn orientation_sample_updates_the_heading() {
        let mut model = AppModel::new(0.0);
        assert!(model.apply_orientation(OrientationReading::new(90.0)));
        assert_eq!(model.heading, 270.0);
        assert_eq!(model.direction(), CompassPoint::W);
    }

    #[test]
    fn absent_sample_leaves_heading_unchanged() {
        let mut model = AppModel::new(42.0);
        assert!(!model.apply_orientation(OrientationReading::empty()));
        assert_eq!(model.heading, 42.0);
    }

    #[test]
    fn repeated_sample_reports_no_change() {
        let mut model = AppModel::new(0.0);
        assert!(model.apply_orientation(OrientationReading::new(45.0)));
        assert!(!model.apply_orientation(OrientationReading::new(45.0)));
    }

    #[test]
    fn fix_is_recorded_once() {
        let mut model = AppModel::new(0.0);
        let first = Location::new(48.2, 16.4);
        let second = Location::new(-33.9, 151.2);

        assert!(model.apply_fix(first));
        assert!(!model.apply_fix(second));
        assert_eq!(model.location, Some(first));
    }

    #[test]
    fn denied_permission_leaves_initial_state_frozen() {
        // Without a grant no events ever reach the model; the display
        // keeps the seed heading and no location.
        let model = AppModel::new(10.0);
        assert!(!model.permission.granted());
        assert_eq!(model.heading, 10.0);
        assert_eq!(model.location, None);
    }
}
