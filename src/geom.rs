//! Shared geometry utilities.
//!
//! kurbo's `Point`, `Vec2` and `Size` are views over the same pair of
//! coordinates and convert losslessly (`to_vec2`, `to_point`, `to_size`).
//! The extension traits here add the few operations kurbo leaves out.

use kurbo::{Point, Vec2};

/// Extra operations on displacement vectors.
pub trait VectorExt {
    /// Unit vector in the same direction, or zero for a zero-length vector.
    fn normal(self) -> Vec2;
    /// The vector rotated 90° counter-clockwise.
    fn perpendicular(self) -> Vec2;
    /// Each component rounded to `digits` decimal places.
    fn limiting_precision(self, digits: u32) -> Vec2;
}

impl VectorExt for Vec2 {
    fn normal(self) -> Vec2 {
        let len = self.hypot();
        if len == 0.0 {
            self * 0.0
        } else {
            self / len
        }
    }

    fn perpendicular(self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }

    fn limiting_precision(self, digits: u32) -> Vec2 {
        Vec2::new(round_to(self.x, digits), round_to(self.y, digits))
    }
}

/// Precision limiting for positions.
pub trait PointExt {
    fn limiting_precision(self, digits: u32) -> Point;
}

impl PointExt for Point {
    fn limiting_precision(self, digits: u32) -> Point {
        self.to_vec2().limiting_precision(digits).to_point()
    }
}

/// Round `value` to `digits` decimal places, halves away from zero.
pub fn round_to(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;

    #[test]
    fn precision_rounds_half_away_from_zero() {
        assert_eq!(round_to(1.23456, 3), 1.235);
        assert_eq!(round_to(1.2344, 3), 1.234);
        assert_eq!(round_to(-2.5, 0), -3.0);
        let v = Vec2::new(1.23456, -1.2344).limiting_precision(3);
        assert_eq!(v, Vec2::new(1.235, -1.234));
        let p = Point::new(0.0004, 9.9996).limiting_precision(3);
        assert_eq!(p, Point::new(0.0, 10.0));
    }

    #[test]
    fn normal_of_zero_is_zero() {
        let n = Vec2::ZERO.normal();
        assert_eq!(n, Vec2::ZERO);
        assert!(!n.x.is_nan());

        let n = Vec2::new(3.0, 4.0).normal();
        assert!((n.hypot() - 1.0).abs() < 1e-12);
        assert!((n.x - 0.6).abs() < 1e-12);
    }

    #[test]
    fn perpendicular_rotates_counter_clockwise() {
        let v = Vec2::new(2.0, 1.0);
        assert_eq!(v.perpendicular(), Vec2::new(-1.0, 2.0));
        assert_eq!(v.dot(v.perpendicular()), 0.0);
    }

    #[test]
    fn point_size_and_vector_views_interconvert() {
        let v = Vec2::new(12.5, -3.0);
        assert_eq!(v.to_point().to_vec2(), v);
        assert_eq!(v.to_size().to_vec2(), v);
        assert_eq!(Size::new(12.5, -3.0).to_vec2(), v);
    }
}
