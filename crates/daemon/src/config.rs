//! Runtime configuration.
//!
//! There is no configuration file; values come from defaults and CLI flags.

use std::path::PathBuf;
use std::time::Duration;

use tablet_mode_device::{
    DeviceIdentity, IioAccelSource, DEFAULT_BASE_DEVICE, DEFAULT_DISPLAY_DEVICE,
};
use tablet_mode_geometry::{AngleEngine, OrientationConvention};

/// Default sampling interval.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct DaemonConfig {
    /// Time between ticks.
    pub interval: Duration,

    /// IIO device directory of the display accelerometer.
    pub display_device: PathBuf,

    /// IIO device directory of the base accelerometer.
    pub base_device: PathBuf,

    /// Angle sign convention for this hardware.
    pub convention: OrientationConvention,

    /// Identity of the virtual switch device.
    pub identity: DeviceIdentity,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            display_device: PathBuf::from(DEFAULT_DISPLAY_DEVICE),
            base_device: PathBuf::from(DEFAULT_BASE_DEVICE),
            convention: OrientationConvention::Default,
            identity: DeviceIdentity::default(),
        }
    }
}

impl DaemonConfig {
    pub fn with_convention(mut self, convention: OrientationConvention) -> Self {
        self.convention = convention;
        self
    }

    pub fn engine(&self) -> AngleEngine {
        AngleEngine::new(self.convention)
    }

    pub fn accel_source(&self) -> IioAccelSource {
        IioAccelSource::new(&self.display_device, &self.base_device)
    }
}
