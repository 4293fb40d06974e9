use std::fmt;
use std::str::FromStr;

use crate::error::RoundError;

/// Default tolerance handed to the curve flattener, in path units.
pub const DEFAULT_FLATTEN_TOLERANCE: f64 = 0.6;

/// Default minimum edge length kept by the point sanitizer.
pub const DEFAULT_MIN_SEGMENT_LENGTH: f64 = 1.0;

/// All rounding parameters in one struct.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundingConfig {
    /// Requested corner radius. `<= 0` (or NaN) leaves the shape untouched.
    ///
    /// Each corner clamps this to half of its shorter adjacent edge.
    pub radius: f64,
    /// Curvature style of the generated corner curves.
    pub style: RoundingStyle,
    /// Accuracy used when flattening curved input segments into lines.
    pub flatten_tolerance: f64,
    /// Edges shorter than this are collapsed before rounding.
    pub min_segment_length: f64,
}

impl RoundingConfig {
    /// Default config with the given radius.
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            ..Self::default()
        }
    }

    /// True when the radius asks for any rounding at all.
    pub fn rounds(&self) -> bool {
        self.radius > 0.0
    }

    /// Check the parameters the pipeline depends on.
    pub fn validate(&self) -> Result<(), RoundError> {
        if !self.flatten_tolerance.is_finite() || self.flatten_tolerance <= 0.0 {
            return Err(RoundError::InvalidConfig(format!(
                "flatten tolerance must be positive and finite, got {}",
                self.flatten_tolerance
            )));
        }
        if !self.min_segment_length.is_finite() || self.min_segment_length < 0.0 {
            return Err(RoundError::InvalidConfig(format!(
                "minimum segment length must be non-negative and finite, got {}",
                self.min_segment_length
            )));
        }
        Ok(())
    }
}

impl Default for RoundingConfig {
    fn default() -> Self {
        Self {
            radius: 0.0,
            style: RoundingStyle::default(),
            flatten_tolerance: DEFAULT_FLATTEN_TOLERANCE,
            min_segment_length: DEFAULT_MIN_SEGMENT_LENGTH,
        }
    }
}

/// How full the curve placed at each corner is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingStyle {
    /// Closest cubic fit to a true circular arc.
    Strict,
    /// Angle-adaptive fullness: tighter at sharp corners, flatter at wide ones.
    #[default]
    Natural,
    /// Exaggerated convex bulge.
    Freestyle,
}

impl RoundingStyle {
    pub const ALL: [RoundingStyle; 3] = [Self::Strict, Self::Natural, Self::Freestyle];

    pub fn name(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Natural => "natural",
            Self::Freestyle => "freestyle",
        }
    }
}

impl fmt::Display for RoundingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoundingStyle {
    type Err = RoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RoundError::InvalidConfig(format!("unknown rounding style '{s}'")))
    }
}
