//! Device-specific angle sign conventions.

/// How the fold angle is derived from the planar tilt difference.
///
/// Chosen once at startup and passed into [`crate::AngleEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrientationConvention {
    /// `delta + 180`: closed maps to the 0/360 boundary, flat open to 180.
    #[default]
    Default,

    /// Negated delta, wrapped into [0, 360). Needed by some Chuwi devices whose
    /// accelerometer axes have inverted chirality.
    Mirrored,
}

impl OrientationConvention {
    pub fn from_mirrored(mirrored: bool) -> Self {
        if mirrored {
            OrientationConvention::Mirrored
        } else {
            OrientationConvention::Default
        }
    }

    pub fn is_mirrored(&self) -> bool {
        matches!(self, OrientationConvention::Mirrored)
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrientationConvention::Default => "default",
            OrientationConvention::Mirrored => "mirrored",
        }
    }
}

impl std::fmt::Display for OrientationConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
