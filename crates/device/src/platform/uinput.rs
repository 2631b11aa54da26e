//! Virtual `SW_TABLET_MODE` switch backed by uinput.

use crate::error::{DeviceError, DeviceResult};
use crate::identity::DeviceIdentity;
use crate::provider::PostureSink;
use evdev::uinput::{VirtualDevice, VirtualDeviceBuilder};
use evdev::{AttributeSet, BusType, EventType, InputEvent, InputId, SwitchType};

/// uinput device exposing a single tablet-mode switch.
///
/// The kernel removes the device when this value is dropped.
pub struct UinputSwitch {
    device: VirtualDevice,
    identity: DeviceIdentity,
}

impl UinputSwitch {
    /// Create the device. Needs write access to `/dev/uinput`.
    pub fn create(identity: &DeviceIdentity) -> DeviceResult<Self> {
        let mut switches = AttributeSet::<SwitchType>::new();
        switches.insert(SwitchType::SW_TABLET_MODE);

        let device = VirtualDeviceBuilder::new()
            .and_then(|builder| {
                builder
                    .name(identity.name.as_str())
                    .input_id(InputId::new(
                        BusType(identity.bus_type),
                        identity.vendor,
                        identity.product,
                        identity.version,
                    ))
                    .with_switches(&switches)
            })
            .and_then(|builder| builder.build())
            .map_err(DeviceError::CreateDevice)?;

        tracing::info!(device = %identity, "created virtual switch device");

        Ok(Self {
            device,
            identity: identity.clone(),
        })
    }
}

impl PostureSink for UinputSwitch {
    fn set_tablet_mode(&mut self, on: bool) -> DeviceResult<()> {
        // emit() appends an unstamped SYN_REPORT; uinput stamps both events on
        // injection, so only the switch event carries a local timestamp.
        let event = InputEvent::new_now(
            EventType::SWITCH,
            SwitchType::SW_TABLET_MODE.0,
            i32::from(on),
        );
        self.device.emit(&[event]).map_err(DeviceError::EmitEvent)
    }
}

impl Drop for UinputSwitch {
    fn drop(&mut self) {
        tracing::debug!(device = %self.identity, "destroying virtual switch device");
    }
}
