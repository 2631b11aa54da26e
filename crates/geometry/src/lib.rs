//! Hinge geometry for tablet-mode.
//!
//! Turns two raw accelerometer samples (display half and base half) into a
//! hinge-axle angle, a hinge-fold angle and a [`Posture`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  sample.rs     - AccelSample                                │
//! │  convention.rs - OrientationConvention (default / mirrored) │
//! │  angle.rs      - AngleEngine: axle angle, fold angle        │
//! │  posture.rs    - Posture, classify(), Reading               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is pure: no I/O, no clocks, no global state.
//!
//! # Example
//!
//! ```
//! use tablet_mode_geometry::{AccelSample, AngleEngine, OrientationConvention, Posture};
//!
//! let engine = AngleEngine::new(OrientationConvention::Default);
//! let flat = AccelSample::new(1000.0, 0.0, 0.0);
//!
//! let reading = engine.read(&flat, &flat, || false);
//! assert_eq!(reading.posture(), Some(Posture::Laptop));
//! ```

mod angle;
mod convention;
mod posture;
mod sample;

pub use angle::{
    hinge_axle_angle, planar_angle, AngleEngine, MIRRORED_WRAP_MARGIN_DEG, WRAP_MARGIN_DEG,
};
pub use convention::OrientationConvention;
pub use posture::{
    classify, is_axle_near_vertical, Measurement, Posture, Reading, AXLE_VERTICAL_MARGIN_DEG,
    TABLET_THRESHOLD_DEG,
};
pub use sample::AccelSample;
