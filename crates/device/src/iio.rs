//! Accelerometer samples from Linux IIO sysfs attributes.

use crate::error::{DeviceError, DeviceResult};
use crate::provider::AccelSource;
use std::path::{Path, PathBuf};
use tablet_mode_geometry::AccelSample;

/// IIO device exposing the display half's accelerometer.
pub const DEFAULT_DISPLAY_DEVICE: &str = "/sys/bus/iio/devices/iio:device0";

/// IIO device exposing the base half's accelerometer.
pub const DEFAULT_BASE_DEVICE: &str = "/sys/bus/iio/devices/iio:device1";

/// Reads `in_accel_{x,y,z}_raw` from two IIO device directories.
#[derive(Debug, Clone)]
pub struct IioAccelSource {
    display: PathBuf,
    base: PathBuf,
}

impl Default for IioAccelSource {
    fn default() -> Self {
        Self::new(DEFAULT_DISPLAY_DEVICE, DEFAULT_BASE_DEVICE)
    }
}

impl IioAccelSource {
    pub fn new(display: impl Into<PathBuf>, base: impl Into<PathBuf>) -> Self {
        Self {
            display: display.into(),
            base: base.into(),
        }
    }

    pub fn display_device(&self) -> &Path {
        &self.display
    }

    pub fn base_device(&self) -> &Path {
        &self.base
    }
}

impl AccelSource for IioAccelSource {
    fn read_display(&self) -> DeviceResult<AccelSample> {
        read_accel(&self.display)
    }

    fn read_base(&self) -> DeviceResult<AccelSample> {
        read_accel(&self.base)
    }
}

/// Read all three axes of one IIO accelerometer.
///
/// Stops at the first axis that fails.
pub fn read_accel(device: &Path) -> DeviceResult<AccelSample> {
    let x = read_raw_value(&device.join("in_accel_x_raw"))?;
    let y = read_raw_value(&device.join("in_accel_y_raw"))?;
    let z = read_raw_value(&device.join("in_accel_z_raw"))?;
    Ok(AccelSample::from_raw(x, y, z))
}

/// Read a single integer attribute, ignoring surrounding whitespace.
pub fn read_raw_value(path: &Path) -> DeviceResult<i64> {
    let content = std::fs::read_to_string(path).map_err(|source| DeviceError::ReadValue {
        path: path.to_path_buf(),
        source,
    })?;

    content
        .trim()
        .parse::<i64>()
        .map_err(|_| DeviceError::ParseValue {
            path: path.to_path_buf(),
            content: content.trim().to_string(),
        })
}
