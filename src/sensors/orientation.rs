// SPDX-License-Identifier: GPL-3.0-or-later
// src/sensors/orientation.rs
//
// Device orientation source: industrial-I/O compass channel.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Base directory of the industrial-I/O device tree.
const IIO_DEVICES_DIR: &str = "/sys/bus/iio/devices";

/// Magnetometer channel exposed by iio compass drivers: rotation from
/// magnetic north, tilt compensated.
const COMPASS_CHANNEL: &str = "in_rot_from_north_magnetic_tilt_comp_raw";

/// Optional per-channel scale file (raw * scale = degrees).
const COMPASS_SCALE: &str = "in_rot_from_north_magnetic_tilt_comp_scale";

/// One orientation sample from the platform.
///
/// `alpha` is the rotation of the device frame about the vertical axis,
/// counterclockwise in degrees. `None` means the sensor had no value
/// for this sample; consumers keep their previous heading.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrientationReading {
    pub alpha: Option<f64>,
}

impl OrientationReading {
    #[must_use]
    pub fn new(alpha: f64) -> Self {
        Self { alpha: Some(alpha) }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self { alpha: None }
    }
}

/// A source of orientation samples.
///
/// Reads are best-effort: an `Err` covers transport problems (device
/// vanished, unreadable sysfs node), while a successful read may still
/// carry no value.
pub trait OrientationSource {
    fn read(&mut self) -> Result<OrientationReading>;
}

/// Compass backed by a sysfs industrial-I/O rotation channel.
pub struct IioCompass {
    channel_path: PathBuf,
    scale: f64,
}

impl IioCompass {
    /// Scan the iio device tree for a compass rotation channel.
    pub fn discover() -> Result<Self> {
        Self::discover_in(Path::new(IIO_DEVICES_DIR))
    }

    fn discover_in(devices_dir: &Path) -> Result<Self> {
        let entries = fs::read_dir(devices_dir)
            .with_context(|| format!("no iio device tree at {}", devices_dir.display()))?;

        for entry in entries.flatten() {
            let channel_path = entry.path().join(COMPASS_CHANNEL);
            if !channel_path.is_file() {
                continue;
            }

            // Scale file is optional; raw values are degrees when absent.
            let scale = fs::read_to_string(entry.path().join(COMPASS_SCALE))
                .ok()
                .and_then(|s| s.trim().parse::<f64>().ok())
                .unwrap_or(1.0);

            log::info!("using iio compass at {}", channel_path.display());
            return Ok(Self {
                channel_path,
                scale,
            });
        }

        anyhow::bail!("no iio compass channel found under {}", devices_dir.display())
    }
}

impl OrientationSource for IioCompass {
    fn read(&mut self) -> Result<OrientationReading> {
        let text = fs::read_to_string(&self.channel_path)
            .with_context(|| format!("reading {}", self.channel_path.display()))?;

        // Drivers occasionally report an empty line between samples.
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(OrientationReading::empty());
        }

        let raw: f64 = trimmed
            .parse()
            .with_context(|| format!("unexpected compass value {trimmed:?}"))?;

        Ok(OrientationReading::new(raw * self.scale))
    }
}

#[cfg(test)]
pub mod mock {
    //! Scripted orientation source for tests.

    use std::collections::VecDeque;

    use super::{OrientationReading, OrientationSource};
    use anyhow::Result;

    pub struct ScriptedSource {
        readings: VecDeque<OrientationReading>,
    }

    impl ScriptedSource {
        pub fn new(readings: impl IntoIterator<Item = OrientationReading>) -> Self {
            Self {
                readings: readings.into_iter().collect(),
            }
        }
    }

    impl OrientationSource for ScriptedSource {
        fn read(&mut self) -> Result<OrientationReading> {
            Ok(self.readings.pop_front().unwrap_or_default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::ScriptedSource;
    use super::*;

    #[test]
    fn scripted_source_replays_in_order() {
        let mut source = ScriptedSource::new([
            OrientationReading::new(10.0),
            OrientationReading::empty(),
            OrientationReading::new(-45.0),
        ]);

        assert_eq!(source.read().unwrap().alpha, Some(10.0));
        assert_eq!(source.read().unwrap().alpha, None);
        assert_eq!(source.read().unwrap().alpha, Some(-45.0));

        // Exhausted scripts degrade to empty samples, not errors.
        assert_eq!(source.read().unwrap().alpha, None);
    }

    #[test]
    fn discover_fails_cleanly_without_a_device_tree() {
        let missing = Path::new("/nonexistent/iio/devices");
        assert!(IioCompass::discover_in(missing).is_err());
    }

    #[test]
    fn discover_finds_a_compass_channel() {
        let dir = std::env::temp_dir().join(format!("rosa-iio-test-{}", std::process::id()));
        let device = dir.join("iio:device0");
        fs::create_dir_all(&device).unwrap();
        fs::write(device.join(COMPASS_CHANNEL), "1805\n").unwrap();
        fs::write(device.join(COMPASS_SCALE), "0.1\n").unwrap();

        let mut compass = IioCompass::discover_in(&dir).unwrap();
        let reading = compass.read().unwrap();
        assert_eq!(reading.alpha, Some(180.5));

        fs::remove_dir_all(&dir).ok();
    }
}
