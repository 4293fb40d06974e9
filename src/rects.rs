//! Rounded outline of a union of axis-aligned rectangles.
//!
//! Rectangles are merged with geo's boolean union, every ring of the
//! merged polygon becomes a contour, and each corner gets one quadratic
//! with the corner as its control point.

use geo::{coord, BooleanOps, LineString, MultiPolygon, Polygon};
use kurbo::{BezPath, Point, Rect};
use rayon::prelude::*;

use crate::assemble::assemble;
use crate::cleanup;
use crate::contour::Contour;
use crate::corners;

/// Union `rects` and round the outline's corners by `roundness`.
///
/// Empty rectangles are ignored; `None` when nothing is left to union.
/// A non-positive `roundness` returns the merged outline unrounded.
pub fn round_rects(rects: &[Rect], roundness: f64) -> Option<BezPath> {
    let polygons: Vec<Polygon<f64>> = rects.iter().filter_map(|r| to_polygon(*r)).collect();
    if polygons.len() < rects.len() {
        log::debug!("ignoring {} empty rects", rects.len() - polygons.len());
    }

    let merged = union_all(polygons)?;
    // Union rings are exact, so any non-empty edge is real: dedup and
    // re-close only, never collapse short edges.
    let contours = cleanup::sanitize_all(&rings(&merged), 0.0);
    log::debug!(
        "rect union: {} rects -> {} polygons, {} contours, roundness {}",
        rects.len(),
        merged.0.len(),
        contours.len(),
        roundness,
    );

    if !(roundness > 0.0) {
        return Some(assemble(contours.iter().map(Contour::to_polygon)));
    }

    let rounded: Vec<BezPath> = contours
        .par_iter()
        .map(|c| corners::round_contour_quad(c, roundness))
        .collect();
    Some(assemble(rounded))
}

/// `None` for rects with no area or non-finite coordinates.
fn to_polygon(rect: Rect) -> Option<Polygon<f64>> {
    let r = rect.abs();
    if !r.is_finite() || r.width() <= 0.0 || r.height() <= 0.0 {
        return None;
    }
    let rect = geo::Rect::new(coord! { x: r.x0, y: r.y0 }, coord! { x: r.x1, y: r.y1 });
    Some(rect.to_polygon())
}

/// Fold polygons into one multipolygon with repeated boolean union.
fn union_all(polygons: Vec<Polygon<f64>>) -> Option<MultiPolygon<f64>> {
    let mut iter = polygons.into_iter();
    let first = MultiPolygon::new(vec![iter.next()?]);
    Some(iter.fold(first, |acc, p| acc.union(&MultiPolygon::new(vec![p]))))
}

/// Exterior then holes, polygon by polygon.
fn rings(shape: &MultiPolygon<f64>) -> Vec<Contour> {
    shape
        .0
        .iter()
        .flat_map(|poly| std::iter::once(poly.exterior()).chain(poly.interiors()))
        .map(ring_to_contour)
        .filter(|c| !c.is_empty())
        .collect()
}

fn ring_to_contour(ring: &LineString<f64>) -> Contour {
    Contour::new(ring.coords().map(|c| Point::new(c.x, c.y)).collect())
}
