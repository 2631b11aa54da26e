//! Provider traits for sensors and the posture switch.
//!
//! These traits abstract the Linux implementations in [`crate::platform`],
//! allowing the polling loop to be tested with in-memory fakes.

use crate::error::DeviceResult;
use tablet_mode_geometry::AccelSample;

/// Source of raw accelerometer samples for both chassis halves.
pub trait AccelSource: Send {
    /// Sample from the display half.
    fn read_display(&self) -> DeviceResult<AccelSample>;

    /// Sample from the base half.
    fn read_base(&self) -> DeviceResult<AccelSample>;
}

/// Provider for the lid switch state.
pub trait LidStateProvider: Send + Sync {
    /// Whether the lid is closed. Failures must resolve to `false`.
    fn is_lid_closed(&self) -> bool;
}

/// Receiver of tablet-mode switch transitions.
pub trait PostureSink: Send {
    /// Emit a switch event: `true` for tablet, `false` otherwise.
    fn set_tablet_mode(&mut self, on: bool) -> DeviceResult<()>;
}

impl<T: AccelSource + ?Sized> AccelSource for Box<T> {
    fn read_display(&self) -> DeviceResult<AccelSample> {
        (**self).read_display()
    }

    fn read_base(&self) -> DeviceResult<AccelSample> {
        (**self).read_base()
    }
}

impl<T: LidStateProvider + ?Sized> LidStateProvider for Box<T> {
    fn is_lid_closed(&self) -> bool {
        (**self).is_lid_closed()
    }
}

impl<T: PostureSink + ?Sized> PostureSink for Box<T> {
    fn set_tablet_mode(&mut self, on: bool) -> DeviceResult<()> {
        (**self).set_tablet_mode(on)
    }
}

/// Null lid provider for testing or platforms without logind.
pub struct NullProvider;

impl LidStateProvider for NullProvider {
    fn is_lid_closed(&self) -> bool {
        false
    }
}
