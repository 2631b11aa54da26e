//! Posture definitions and classification.
//!
//! Pure domain logic - no I/O, no platform dependencies.

/// Hinge axle angles closer than this to vertical (0° or 180°) make the fold
/// angle unreliable.
pub const AXLE_VERTICAL_MARGIN_DEG: f64 = 10.0;

/// Fold angles at or above this classify as tablet. Deliberately past flat
/// (180°) so a fully opened laptop stays a laptop.
pub const TABLET_THRESHOLD_DEG: f64 = 190.0;

/// Physical configuration of the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Posture {
    /// Not yet known, or the fold angle was invalid.
    #[default]
    Indeterminate,

    /// Halves opened less than ~190°.
    Laptop,

    /// Display folded back past flat.
    Tablet,
}

impl Posture {
    /// Lower-case label, as shown in the debug display.
    pub fn label(&self) -> &'static str {
        match self {
            Posture::Indeterminate => "unknown",
            Posture::Laptop => "laptop",
            Posture::Tablet => "tablet",
        }
    }

    /// Value of the tablet-mode switch for this posture.
    pub fn is_tablet(&self) -> bool {
        matches!(self, Posture::Tablet)
    }
}

impl std::fmt::Display for Posture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Whether the hinge axle is too close to vertical for fold-angle math.
pub fn is_axle_near_vertical(axle_angle: f64) -> bool {
    axle_angle < AXLE_VERTICAL_MARGIN_DEG || axle_angle > 180.0 - AXLE_VERTICAL_MARGIN_DEG
}

/// Classify a fold angle into a posture.
///
/// Callers are expected to have rejected near-vertical axle angles already
/// (see [`crate::AngleEngine::read`]); if one slips through the result is
/// [`Posture::Indeterminate`].
pub fn classify(axle_angle: f64, fold_angle: f64) -> Posture {
    if is_axle_near_vertical(axle_angle) || fold_angle.is_nan() || fold_angle < 0.0 {
        Posture::Indeterminate
    } else if fold_angle < TABLET_THRESHOLD_DEG {
        Posture::Laptop
    } else {
        Posture::Tablet
    }
}

/// All values computed for one classified tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub axle_angle: f64,
    /// Planar tilt of the display half, degrees.
    pub display_angle: f64,
    /// Planar tilt of the base half, degrees.
    pub base_angle: f64,
    /// Hinge fold angle after convention and corner-case corrections.
    pub fold_angle: f64,
    pub lid_closed: bool,
    pub posture: Posture,
}

/// Outcome of running the angle/classification pipeline on one sample pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    /// Hinge axle near vertical; classification was not attempted.
    Skipped { axle_angle: f64 },

    Classified(Measurement),
}

impl Reading {
    pub fn axle_angle(&self) -> f64 {
        match self {
            Reading::Skipped { axle_angle } => *axle_angle,
            Reading::Classified(m) => m.axle_angle,
        }
    }

    pub fn posture(&self) -> Option<Posture> {
        match self {
            Reading::Skipped { .. } => None,
            Reading::Classified(m) => Some(m.posture),
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Reading::Skipped { .. })
    }
}
