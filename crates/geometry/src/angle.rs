//! Hinge angle computation from a pair of accelerometer samples.

use crate::convention::OrientationConvention;
use crate::posture::{classify, is_axle_near_vertical, Measurement, Reading};
use crate::sample::AccelSample;

/// Default-convention fold angles below this are reinterpreted as 360°.
pub const WRAP_MARGIN_DEG: f64 = 5.0;

/// Wider wraparound margin for the mirrored convention.
pub const MIRRORED_WRAP_MARGIN_DEG: f64 = 10.0;

/// Angle between the display's gravity vector and its y axis, in degrees
/// [0, 180].
///
/// The hinge rotates around the y axis, so values near 0° or 180° mean the
/// hinge is vertical.
pub fn hinge_axle_angle(display: &AccelSample) -> f64 {
    (display.z * display.z + display.x * display.x)
        .sqrt()
        .atan2(display.y)
        .to_degrees()
}

/// Tilt of one chassis half in its x/z plane, in degrees (-180, 180].
pub fn planar_angle(sample: &AccelSample) -> f64 {
    sample.z.atan2(sample.x).to_degrees()
}

/// Computes hinge angles under a fixed orientation convention.
#[derive(Debug, Clone, Copy, Default)]
pub struct AngleEngine {
    convention: OrientationConvention,
}

impl AngleEngine {
    pub fn new(convention: OrientationConvention) -> Self {
        Self { convention }
    }

    pub fn convention(&self) -> OrientationConvention {
        self.convention
    }

    /// Relative angle between display and base, 0° closed, 180° flat, up to
    /// 360° folded back.
    ///
    /// The accelerometers alone cannot tell 0° from 360°, so the lid switch
    /// decides: a closed lid forces 0°, otherwise readings near the wrap point
    /// are taken as fully folded back.
    pub fn hinge_fold_angle(
        &self,
        display: &AccelSample,
        base: &AccelSample,
        lid_closed: bool,
    ) -> f64 {
        let mut delta = planar_angle(display) - planar_angle(base);
        if delta < -180.0 {
            delta += 360.0;
        }
        if delta > 180.0 {
            delta -= 360.0;
        }

        let angle = match self.convention {
            OrientationConvention::Default => delta + 180.0,
            OrientationConvention::Mirrored => {
                let mirrored = -delta;
                if mirrored < 0.0 {
                    mirrored + 360.0
                } else {
                    mirrored
                }
            }
        };

        if lid_closed {
            0.0
        } else if angle < WRAP_MARGIN_DEG {
            360.0
        } else if angle < MIRRORED_WRAP_MARGIN_DEG && self.convention.is_mirrored() {
            360.0
        } else {
            angle
        }
    }

    /// Run the full pipeline on one sample pair.
    ///
    /// `lid_closed` is only queried when the hinge axle is usable, so a
    /// near-vertical reading costs no IPC round trip.
    pub fn read<F>(&self, display: &AccelSample, base: &AccelSample, lid_closed: F) -> Reading
    where
        F: FnOnce() -> bool,
    {
        let axle_angle = hinge_axle_angle(display);
        if is_axle_near_vertical(axle_angle) {
            return Reading::Skipped { axle_angle };
        }

        let lid_closed = lid_closed();
        let fold_angle = self.hinge_fold_angle(display, base, lid_closed);

        Reading::Classified(Measurement {
            axle_angle,
            display_angle: planar_angle(display),
            base_angle: planar_angle(base),
            fold_angle,
            lid_closed,
            posture: classify(axle_angle, fold_angle),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posture::Posture;

    const EPS: f64 = 1e-9;

    /// Sample lying in the x/z plane at `deg` degrees.
    fn tilted(deg: f64) -> AccelSample {
        let r = deg.to_radians();
        AccelSample::new(1000.0 * r.cos(), 0.0, 1000.0 * r.sin())
    }

    fn default_engine() -> AngleEngine {
        AngleEngine::new(OrientationConvention::Default)
    }

    fn mirrored_engine() -> AngleEngine {
        AngleEngine::new(OrientationConvention::Mirrored)
    }

    #[test]
    fn test_axle_angle_horizontal_hinge() {
        let a = hinge_axle_angle(&AccelSample::new(1000.0, 0.0, 0.0));
        assert!((a - 90.0).abs() < EPS);
    }

    #[test]
    fn test_axle_angle_vertical_hinge() {
        assert!(hinge_axle_angle(&AccelSample::new(0.0, 1000.0, 0.0)).abs() < EPS);
        assert!((hinge_axle_angle(&AccelSample::new(0.0, -1000.0, 0.0)) - 180.0).abs() < EPS);
    }

    #[test]
    fn test_planar_angle() {
        assert!(planar_angle(&AccelSample::new(1.0, 0.0, 0.0)).abs() < EPS);
        assert!((planar_angle(&AccelSample::new(0.0, 0.0, 1.0)) - 90.0).abs() < EPS);
        assert!((planar_angle(&AccelSample::new(-1.0, 0.0, 0.0)) - 180.0).abs() < EPS);
    }

    #[test]
    fn test_aligned_halves_are_flat_open() {
        let engine = default_engine();
        let s = AccelSample::new(1000.0, 0.0, 0.0);
        let angle = engine.hinge_fold_angle(&s, &s, false);
        assert!((angle - 180.0).abs() < EPS);
    }

    #[test]
    fn test_delta_wraps_into_half_open_range() {
        let engine = default_engine();
        // display at 170°, base at -170° -> raw delta 340°, wrapped to -20°
        let angle = engine.hinge_fold_angle(&tilted(170.0), &tilted(-170.0), false);
        assert!((angle - 160.0).abs() < 1e-6);

        // display at -170°, base at 170° -> raw delta -340°, wrapped to 20°
        let angle = engine.hinge_fold_angle(&tilted(-170.0), &tilted(170.0), false);
        assert!((angle - 200.0).abs() < 1e-6);
    }

    #[test]
    fn test_lid_closed_forces_zero() {
        for engine in [default_engine(), mirrored_engine()] {
            let angle = engine.hinge_fold_angle(&tilted(10.0), &tilted(-100.0), true);
            assert_eq!(angle, 0.0);
            assert_eq!(classify(90.0, angle), Posture::Laptop);
        }
    }

    #[test]
    fn test_near_zero_wraps_to_full_fold() {
        let engine = default_engine();
        // delta -178 -> 2° before correction
        let angle = engine.hinge_fold_angle(&tilted(0.0), &tilted(178.0), false);
        assert_eq!(angle, 360.0);
        assert_eq!(classify(90.0, angle), Posture::Tablet);
    }

    #[test]
    fn test_mirrored_wider_wrap_margin() {
        let default = default_engine();
        let mirrored = mirrored_engine();
        // mirrored: -(0 - 7) = 7° -> inside the 10° margin
        let angle = mirrored.hinge_fold_angle(&tilted(0.0), &tilted(7.0), false);
        assert_eq!(angle, 360.0);

        // default: 0 - 173 + 180 = 7° -> outside the 5° margin, kept
        let angle = default.hinge_fold_angle(&tilted(0.0), &tilted(173.0), false);
        assert!((angle - 7.0).abs() < 1e-6);
    }

    #[test]
    fn test_mirrored_negative_wraps_positive() {
        let default = default_engine();
        let mirrored = mirrored_engine();
        // mirrored: -(90 - 0) = -90 -> 270°
        let angle = mirrored.hinge_fold_angle(&tilted(90.0), &tilted(0.0), false);
        assert!((angle - 270.0).abs() < 1e-6);

        // default convention on the same pair: 90 + 180 = 270°
        let angle = default.hinge_fold_angle(&tilted(90.0), &tilted(0.0), false);
        assert!((angle - 270.0).abs() < 1e-6);
    }

    #[test]
    fn test_default_output_range_with_lid_open() {
        let engine = default_engine();
        for d in (-179..=180).step_by(7) {
            for b in (-179..=180).step_by(11) {
                let angle = engine.hinge_fold_angle(&tilted(d as f64), &tilted(b as f64), false);
                assert!(
                    (WRAP_MARGIN_DEG..=360.0).contains(&angle),
                    "display {d} base {b} -> {angle}"
                );
            }
        }
    }

    #[test]
    fn test_read_skips_vertical_axle_without_querying_lid() {
        let display = AccelSample::new(0.0, 0.0, 1.0);
        let display_vertical = AccelSample::new(0.0, 1000.0, 0.0);
        let base = AccelSample::new(1000.0, 0.0, 0.0);

        // (0, 0, 1) has its gravity vector in the x/z plane: axle is horizontal
        assert!(!default_engine().read(&display, &base, || false).is_skipped());

        let reading = default_engine().read(&display_vertical, &base, || {
            panic!("lid state must not be queried for a vertical axle")
        });
        assert!(reading.is_skipped());
        assert!(reading.axle_angle().abs() < EPS);
    }

    #[test]
    fn test_read_classifies_flat_open_as_laptop() {
        let s = AccelSample::new(1000.0, 0.0, 0.0);
        match default_engine().read(&s, &s, || false) {
            Reading::Classified(m) => {
                assert!((m.axle_angle - 90.0).abs() < EPS);
                assert!(m.display_angle.abs() < EPS);
                assert!(m.base_angle.abs() < EPS);
                assert!((m.fold_angle - 180.0).abs() < EPS);
                assert!(!m.lid_closed);
                assert_eq!(m.posture, Posture::Laptop);
            }
            other => panic!("expected classified reading, got {other:?}"),
        }
    }

    #[test]
    fn test_read_is_idempotent() {
        let engine = mirrored_engine();
        let display = tilted(40.0);
        let base = tilted(-60.0);
        let first = engine.read(&display, &base, || false);
        for _ in 0..5 {
            assert_eq!(engine.read(&display, &base, || false), first);
        }
    }
}
