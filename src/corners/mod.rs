//! Corner rounding for sanitized, closed contours.
//!
//! Every vertex is visited with its cyclic neighbours. Real corners are
//! replaced by a curve running between two anchors placed `r` along each
//! adjacent edge, with `r` clamped to half of the shorter edge so curves
//! from neighbouring corners never overlap. Straight or reversing
//! vertices are kept as plain line points.

pub mod arc;

use kurbo::{BezPath, PathEl, Point, Vec2};

use crate::config::RoundingStyle;
use crate::contour::Contour;
use crate::geom::{PointExt, VectorExt};

/// Decimal places kept on every generated point.
pub const PRECISION_DIGITS: u32 = 3;

/// Geometry of one vertex and its two edges.
#[derive(Debug, Clone, Copy)]
struct CornerFrame {
    corner: Point,
    /// Unit vector back along the incoming edge.
    n1: Vec2,
    /// Unit vector forward along the outgoing edge.
    n2: Vec2,
    theta: f64,
    /// Clamped radius.
    r: f64,
}

impl CornerFrame {
    /// `None` when the vertex is not a real corner.
    fn at(vertices: &[Point], i: usize, radius: f64) -> Option<Self> {
        let n = vertices.len();
        let prev = vertices[(i + n - 1) % n];
        let corner = vertices[i];
        let next = vertices[(i + 1) % n];

        let v1 = prev - corner;
        let v2 = next - corner;
        let theta = angle_between(v1, v2);
        let r = effective_radius(v1, v2, radius);

        if arc::is_straight(theta) || r <= 0.0 {
            return None;
        }

        Some(Self {
            corner,
            n1: v1.normal(),
            n2: v2.normal(),
            theta,
            r,
        })
    }

    fn anchor(&self, dir: Vec2, dist: f64) -> Point {
        (self.corner + dir * dist).limiting_precision(PRECISION_DIGITS)
    }
}

/// Unsigned angle between two vectors, in radians [0, pi].
pub fn angle_between(a: Vec2, b: Vec2) -> f64 {
    a.cross(b).atan2(a.dot(b)).abs()
}

/// Requested radius clamped to half of each adjacent edge.
pub fn effective_radius(v1: Vec2, v2: Vec2, radius: f64) -> f64 {
    radius.min(v1.hypot() / 2.0).min(v2.hypot() / 2.0)
}

/// Round every corner of `contour` with cubic curves in the given style.
///
/// Contours with fewer than three vertices, or a non-positive radius,
/// come back as their straight polygon.
pub fn round_contour(contour: &Contour, radius: f64, style: RoundingStyle) -> BezPath {
    round_with(contour, radius, |frame| {
        let d = arc::control_distance(style, frame.theta, frame.r);
        let start = frame.anchor(frame.n1, frame.r);
        let control1 = frame.anchor(frame.n1, frame.r - d);
        let control2 = frame.anchor(frame.n2, frame.r - d);
        let end = frame.anchor(frame.n2, frame.r);
        (start, PathEl::CurveTo(control1, control2, end))
    })
}

/// Round every corner with a single quadratic whose control point is the
/// corner itself. Used for merged axis-aligned rectangles.
pub fn round_contour_quad(contour: &Contour, radius: f64) -> BezPath {
    round_with(contour, radius, |frame| {
        let start = frame.anchor(frame.n1, frame.r);
        let end = frame.anchor(frame.n2, frame.r);
        (start, PathEl::QuadTo(frame.corner, end))
    })
}

fn round_with<F>(contour: &Contour, radius: f64, mut corner_curve: F) -> BezPath
where
    F: FnMut(&CornerFrame) -> (Point, PathEl),
{
    let vertices = contour.vertices();
    let n = vertices.len();
    if n < 3 || !(radius > 0.0) {
        log::trace!("contour with {n} vertices passed through unrounded");
        return contour.to_polygon();
    }

    let mut path = BezPath::new();
    let mut first: Option<Point> = None;
    let mut last = Point::ZERO;
    let mut straight = 0usize;

    for i in 0..n {
        match CornerFrame::at(vertices, i, radius) {
            Some(frame) => {
                let (start, curve) = corner_curve(&frame);
                connect(&mut path, &mut first, start);
                path.push(curve);
                last = curve.end_point().unwrap_or(start);
            }
            None => {
                straight += 1;
                connect(&mut path, &mut first, vertices[i]);
                last = vertices[i];
            }
        }
    }

    if straight > 0 {
        log::trace!("kept {straight} of {n} vertices as plain line points");
    }

    if let Some(first) = first {
        if last != first {
            path.line_to(first);
        }
        path.close_path();
    }
    path
}

/// Move to the first point of the contour, line to every later one.
fn connect(path: &mut BezPath, first: &mut Option<Point>, p: Point) {
    if first.is_none() {
        path.move_to(p);
        *first = Some(p);
    } else {
        path.line_to(p);
    }
}
