use thiserror::Error;

/// Errors that can occur while rounding a shape.
///
/// Degenerate geometry (short edges, fewer than three vertices, a zero
/// radius) is never an error; it passes through unrounded.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RoundError {
    /// A curved segment reached contour extraction. Paths must be
    /// flattened before their contours are extracted.
    #[error("unsupported {kind} segment at element {index}; flatten the path first")]
    UnsupportedSegment { index: usize, kind: &'static str },

    #[error("invalid rounding config: {0}")]
    InvalidConfig(String),
}
