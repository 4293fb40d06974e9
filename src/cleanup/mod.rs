//! Point sanitizing for extracted contours.
//!
//! Two streaming passes run before rounding: exact duplicate removal,
//! then collapse of edges shorter than the configured minimum. The
//! result is re-closed so the rounder always sees a closed loop.

mod collapse;
mod dedup;

pub use collapse::collapse_short;
pub use dedup::dedup;

use crate::contour::Contour;

/// Sanitize one contour: dedup → collapse short edges → re-close.
pub fn sanitize(contour: &Contour, min_segment_length: f64) -> Contour {
    let deduped = dedup(&contour.points);
    let mut points = collapse_short(&deduped, min_segment_length);

    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        if first != last {
            points.push(first);
        }
    }

    Contour::new(points)
}

/// Sanitize every contour, keeping their order.
pub fn sanitize_all(contours: &[Contour], min_segment_length: f64) -> Vec<Contour> {
    contours
        .iter()
        .map(|c| sanitize(c, min_segment_length))
        .collect()
}
