use kurbo::Point;

/// Drop points equal to the previously kept point (exact comparison).
pub fn dedup(points: &[Point]) -> Vec<Point> {
    let mut kept: Vec<Point> = Vec::with_capacity(points.len());
    for &p in points {
        if kept.last() != Some(&p) {
            kept.push(p);
        }
    }
    kept
}
