use kurbo::Point;

/// Drop points closer than `min_length` to the last kept point.
///
/// The first point is always kept, so a contour can shrink to one point
/// but never disappear.
pub fn collapse_short(points: &[Point], min_length: f64) -> Vec<Point> {
    let Some((&first, rest)) = points.split_first() else {
        return Vec::new();
    };

    let mut kept = vec![first];
    let mut last = first;
    for &p in rest {
        if p.distance(last) >= min_length {
            kept.push(p);
            last = p;
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_measured_from_last_kept_point() {
        // Each step is 0.6, so only every other point clears 1.0.
        let points: Vec<Point> = (0..6).map(|i| Point::new(i as f64 * 0.6, 0.0)).collect();
        let kept = collapse_short(&points, 1.0);
        let xs: Vec<f64> = kept.iter().map(|p| p.x).collect();
        assert_eq!(xs.len(), 3);
        assert_eq!(xs[0], 0.0);
        assert!((xs[1] - 1.2).abs() < 1e-12);
        assert!((xs[2] - 2.4).abs() < 1e-12);
    }

    #[test]
    fn exact_minimum_length_is_kept() {
        let points = [Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        assert_eq!(collapse_short(&points, 1.0).len(), 2);
    }

    #[test]
    fn zero_minimum_keeps_everything() {
        let points = [Point::new(0.0, 0.0), Point::new(0.0, 0.0), Point::new(0.1, 0.0)];
        assert_eq!(collapse_short(&points, 0.0).len(), 3);
    }
}
