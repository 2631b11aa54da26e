//! Identity of the virtual switch device.

/// Name and IDs the virtual input device registers with.
///
/// Keep these stable so desktop environments recognize the device across
/// restarts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceIdentity {
    pub name: String,
    /// Bus type, 0x03 is USB.
    pub bus_type: u16,
    pub vendor: u16,
    pub product: u16,
    pub version: u16,
}

impl Default for DeviceIdentity {
    fn default() -> Self {
        Self {
            name: "Software Tablet Mode".to_string(),
            bus_type: 0x03,
            vendor: 0x4711,
            product: 0x0816,
            version: 1,
        }
    }
}

impl std::fmt::Display for DeviceIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({:04x}:{:04x})",
            self.name, self.vendor, self.product
        )
    }
}
