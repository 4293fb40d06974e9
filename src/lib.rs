//! smoothcorners: sharp polygon corners → smooth bezier curves.
//!
//! Rounds every corner of an arbitrary closed shape, including
//! multi-contour shapes, within a maximum radius and one of several
//! curvature styles.
//!
//! # Example
//!
//! ```
//! use smoothcorners::{round, RoundingConfig, RoundingStyle};
//! use smoothcorners::kurbo::{BezPath, PathSeg, Rect, Shape};
//!
//! let square = Rect::new(0.0, 0.0, 100.0, 100.0).to_path(0.1);
//! let config = RoundingConfig {
//!     style: RoundingStyle::Strict,
//!     ..RoundingConfig::new(10.0)
//! };
//! let rounded: BezPath = round(&square, &config)?;
//! let curves = rounded.segments().filter(|s| matches!(s, PathSeg::Cubic(_)));
//! assert_eq!(curves.count(), 4);
//! # Ok::<(), smoothcorners::RoundError>(())
//! ```

#![forbid(unsafe_code)]

mod assemble;
mod cleanup;
mod config;
mod contour;
mod corners;
mod geom;
mod rects;

pub mod error;

// Re-export kurbo so downstream users get the same path types.
pub use kurbo;

pub use assemble::RoundedShape;
pub use config::{
    RoundingConfig, RoundingStyle, DEFAULT_FLATTEN_TOLERANCE, DEFAULT_MIN_SEGMENT_LENGTH,
};
pub use contour::Contour;
pub use error::RoundError;
pub use geom::{PointExt, VectorExt};
pub use rects::round_rects;

use kurbo::BezPath;
use rayon::prelude::*;

/// Round the corners of `path`, returning one compound path.
///
/// The input is never modified. A non-positive radius returns an exact
/// copy, curves included.
pub fn round(path: &BezPath, config: &RoundingConfig) -> Result<BezPath, RoundError> {
    round_contours(path, config).map(RoundedShape::into_path)
}

/// Round the corners of `path`, keeping one subpath per contour.
///
/// Pipeline: flatten → extract contours → sanitize → round each contour
/// (in parallel) → collect in drawing order.
pub fn round_contours(path: &BezPath, config: &RoundingConfig) -> Result<RoundedShape, RoundError> {
    if !config.rounds() {
        log::debug!("radius {} rounds nothing; returning input", config.radius);
        return Ok(RoundedShape::new(assemble::split_subpaths(path)));
    }
    config.validate()?;

    let mut flat = BezPath::new();
    path.flatten(config.flatten_tolerance, |el| flat.push(el));

    let contours = contour::extract(flat.elements())?;
    let contours = cleanup::sanitize_all(&contours, config.min_segment_length);
    log::debug!(
        "rounding {} contours ({} flattened elements), radius {}, style {}",
        contours.len(),
        flat.elements().len(),
        config.radius,
        config.style,
    );

    Ok(RoundedShape::new(round_each(&contours, config)))
}

/// Round already-flattened contours directly.
///
/// Fails with [`RoundError::UnsupportedSegment`] if `path` still has curves.
pub fn round_flattened(path: &BezPath, config: &RoundingConfig) -> Result<BezPath, RoundError> {
    let contours = contour::extract(path.elements())?;
    if !config.rounds() {
        return Ok(path.clone());
    }
    config.validate()?;
    let contours = cleanup::sanitize_all(&contours, config.min_segment_length);
    Ok(assemble::assemble(round_each(&contours, config)))
}

/// Contours are independent, so they round in parallel; collecting
/// keeps their input order.
fn round_each(contours: &[Contour], config: &RoundingConfig) -> Vec<BezPath> {
    contours
        .par_iter()
        .filter(|c| !c.is_empty())
        .map(|c| corners::round_contour(c, config.radius, config.style))
        .collect()
}
