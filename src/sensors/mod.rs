// SPDX-License-Identifier: GPL-3.0-or-later
// src/sensors/mod.rs
//
// Sensor boundary: permission gate and platform event sources.

pub mod geolocation;
pub mod orientation;

pub use orientation::{OrientationReading, OrientationSource};

/// One-way permission latch for the sensor stack.
///
/// Starts denied and can only move to granted; a grant is never
/// revoked for the lifetime of the app instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermissionState {
    granted: bool,
}

impl PermissionState {
    pub fn grant(&mut self) {
        self.granted = true;
    }

    #[must_use]
    pub fn granted(self) -> bool {
        self.granted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_starts_denied() {
        assert!(!PermissionState::default().granted());
    }

    #[test]
    fn grant_is_monotonic() {
        let mut state = PermissionState::default();
        state.grant();
        assert!(state.granted());

        // Granting again is a no-op; there is no path back to denied.
        state.grant();
        assert!(state.granted());
    }
}
