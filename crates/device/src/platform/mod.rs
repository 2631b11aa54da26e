//! Platform-specific implementations.

#[cfg(target_os = "linux")]
mod logind;
#[cfg(target_os = "linux")]
mod uinput;

#[cfg(target_os = "linux")]
pub use logind::LogindLidState;
#[cfg(target_os = "linux")]
pub use uinput::UinputSwitch;

// Re-export the appropriate providers for the current platform
#[cfg(target_os = "linux")]
pub type PlatformLidState = LogindLidState;

#[cfg(not(target_os = "linux"))]
pub type PlatformLidState = crate::provider::NullProvider;

#[cfg(target_os = "linux")]
pub type PlatformSwitch = UinputSwitch;

#[cfg(not(target_os = "linux"))]
pub type PlatformSwitch = UnsupportedSwitch;

/// Stub switch for platforms without uinput; creation always fails.
#[cfg(not(target_os = "linux"))]
pub struct UnsupportedSwitch;

#[cfg(not(target_os = "linux"))]
impl UnsupportedSwitch {
    pub fn create(_identity: &crate::identity::DeviceIdentity) -> crate::error::DeviceResult<Self> {
        Err(crate::error::DeviceError::Unsupported)
    }
}

#[cfg(not(target_os = "linux"))]
impl crate::provider::PostureSink for UnsupportedSwitch {
    fn set_tablet_mode(&mut self, _on: bool) -> crate::error::DeviceResult<()> {
        Err(crate::error::DeviceError::Unsupported)
    }
}

/// Create the lid state provider for this platform.
pub fn lid_state() -> PlatformLidState {
    #[cfg(target_os = "linux")]
    {
        LogindLidState::new()
    }
    #[cfg(not(target_os = "linux"))]
    {
        crate::provider::NullProvider
    }
}
