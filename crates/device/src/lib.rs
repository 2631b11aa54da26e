//! Device access for tablet-mode.
//!
//! - Accelerometer samples from IIO sysfs (`in_accel_{x,y,z}_raw`)
//! - Lid state from systemd-logind (`LidClosed` on the system bus)
//! - A virtual `SW_TABLET_MODE` switch via uinput
//!
//! The polling loop only sees the traits in [`provider`]; the Linux
//! implementations live in [`platform`] and [`iio`].
//!
//! # Example
//!
//! ```ignore
//! use tablet_mode_device::{platform, AccelSource, DeviceIdentity, IioAccelSource, PostureSink};
//!
//! let sensors = IioAccelSource::default();
//! let display = sensors.read_display()?;
//!
//! let mut switch = platform::PlatformSwitch::create(&DeviceIdentity::default())?;
//! switch.set_tablet_mode(true)?;
//! ```

mod error;
mod identity;
mod provider;

pub mod iio;
pub mod platform;

pub use error::{DeviceError, DeviceResult};
pub use identity::DeviceIdentity;
pub use iio::{IioAccelSource, DEFAULT_BASE_DEVICE, DEFAULT_DISPLAY_DEVICE};
pub use provider::{AccelSource, LidStateProvider, NullProvider, PostureSink};
