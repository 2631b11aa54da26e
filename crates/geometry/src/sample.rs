//! Raw accelerometer samples.

/// One raw 3-axis accelerometer reading from a chassis half.
///
/// Components are in the sensor's raw units. Only ratios between them are
/// used downstream, so no scaling to g is applied.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AccelSample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl AccelSample {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Build a sample from the integer values exposed by IIO `*_raw` files.
    pub fn from_raw(x: i64, y: i64, z: i64) -> Self {
        Self::new(x as f64, y as f64, z as f64)
    }
}
