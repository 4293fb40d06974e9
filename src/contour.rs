use kurbo::{BezPath, PathEl, Point};

use crate::error::RoundError;

/// One closed boundary loop of a flattened shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contour {
    /// Points in drawing order. A closed contour repeats its first point last.
    pub points: Vec<Point>,
}

impl Contour {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when the last point coincides with the first.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first == last,
            _ => false,
        }
    }

    /// The cyclic vertices, without the repeated closing point.
    pub fn vertices(&self) -> &[Point] {
        if self.is_closed() {
            &self.points[..self.points.len() - 1]
        } else {
            &self.points
        }
    }

    /// The contour as a straight-line subpath.
    pub fn to_polygon(&self) -> BezPath {
        let mut path = BezPath::new();
        let vertices = self.vertices();
        if let Some((&first, rest)) = vertices.split_first() {
            path.move_to(first);
            for &p in rest {
                path.line_to(p);
            }
            path.close_path();
        }
        path
    }
}

/// Split a flattened element stream into contours, in drawing order.
///
/// Only `MoveTo`, `LineTo` and `ClosePath` are accepted; a curve segment
/// means the caller skipped flattening and fails the whole extraction.
pub fn extract<'a, I>(elements: I) -> Result<Vec<Contour>, RoundError>
where
    I: IntoIterator<Item = &'a PathEl>,
{
    let mut contours = Vec::new();
    let mut current: Vec<Point> = Vec::new();

    for (index, el) in elements.into_iter().enumerate() {
        match *el {
            PathEl::MoveTo(p) => {
                if !current.is_empty() {
                    contours.push(Contour::new(std::mem::take(&mut current)));
                }
                current.push(p);
            }
            PathEl::LineTo(p) => current.push(p),
            PathEl::ClosePath => {
                if let (Some(&first), Some(&last)) = (current.first(), current.last()) {
                    if first != last {
                        current.push(first);
                    }
                    contours.push(Contour::new(std::mem::take(&mut current)));
                }
            }
            PathEl::QuadTo(..) => {
                return Err(RoundError::UnsupportedSegment { index, kind: "quadratic" });
            }
            PathEl::CurveTo(..) => {
                return Err(RoundError::UnsupportedSegment { index, kind: "cubic" });
            }
        }
    }

    // Unterminated trailing contour.
    if !current.is_empty() {
        contours.push(Contour::new(current));
    }

    Ok(contours)
}
