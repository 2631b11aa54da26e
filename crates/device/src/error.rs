//! Error types for device access.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for device operations.
pub type DeviceResult<T> = Result<T, DeviceError>;

/// Errors that can occur while reading sensors or driving the switch device.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// A raw value file could not be read (missing, permission, I/O).
    #[error("failed to read '{path}': {source}")]
    ReadValue {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A raw value file did not hold an integer.
    #[error("invalid raw value in '{path}': {content:?}")]
    ParseValue { path: PathBuf, content: String },

    /// The virtual input device could not be created.
    #[error("failed to create virtual input device: {0}")]
    CreateDevice(#[source] std::io::Error),

    /// Writing a switch event to the virtual device failed.
    #[error("failed to emit switch event: {0}")]
    EmitEvent(#[source] std::io::Error),

    /// System bus connection or property query failed.
    #[error("D-Bus error: {0}")]
    Bus(String),

    /// Virtual input devices are not available on this platform.
    #[error("virtual input devices are not supported on this platform")]
    Unsupported,
}

impl DeviceError {
    /// Whether the error is expected to clear up by itself on a later tick.
    pub fn is_transient(&self) -> bool {
        match self {
            DeviceError::ReadValue { .. } | DeviceError::ParseValue { .. } => true,
            DeviceError::Bus(_) => true,
            DeviceError::CreateDevice(_) | DeviceError::EmitEvent(_) => false,
            DeviceError::Unsupported => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_errors_are_transient() {
        let err = DeviceError::ParseValue {
            path: PathBuf::from("/sys/bus/iio/devices/iio:device0/in_accel_x_raw"),
            content: "abc".to_string(),
        };
        assert!(err.is_transient());
        assert!(err.to_string().contains("in_accel_x_raw"));
    }

    #[test]
    fn test_device_errors_are_not_transient() {
        let err =
            DeviceError::CreateDevice(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert!(!err.is_transient());
        assert!(!DeviceError::Unsupported.is_transient());
    }
}
