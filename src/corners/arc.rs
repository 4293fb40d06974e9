//! Circular-arc kernel shared by all rounding styles.
//!
//! A corner with angle `θ` between its two edges is rounded by the arc
//! tangent to both edges at distance `r` from the corner. That arc has
//! radius `r·tan(θ/2)` and sweeps `π − θ`; a cubic approximates it with
//! handles of length `(4/3)·tan(sweep/4)·radius`. Styles scale that
//! handle length.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::config::RoundingStyle;

/// Angles this close to 0 (reversal) or π (straight) get no curve.
pub const ANGLE_EPSILON: f64 = 1e-6;

/// Handle length of the cubic closest to a true circular arc.
pub fn arc_handle_length(theta: f64, r: f64) -> f64 {
    let half = theta / 2.0;
    let sweep = PI - theta;
    4.0 / 3.0 * (sweep / 4.0).tan() * r * half.tan()
}

/// Fullness multiplier applied on top of the arc handle length.
pub fn style_factor(style: RoundingStyle, theta: f64) -> f64 {
    match style {
        RoundingStyle::Strict => 1.0,
        RoundingStyle::Natural if theta < FRAC_PI_2 => 1.0 + theta.cos(),
        RoundingStyle::Natural => 2.0 - theta.sin(),
        RoundingStyle::Freestyle => 2.0 + theta.sin(),
    }
}

/// Distance from each curve anchor to its control point.
pub fn control_distance(style: RoundingStyle, theta: f64, r: f64) -> f64 {
    arc_handle_length(theta, r) * style_factor(style, theta)
}

/// True for angles where rounding is meaningless.
pub fn is_straight(theta: f64) -> bool {
    theta < ANGLE_EPSILON || PI - theta < ANGLE_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_angle_uses_kappa() {
        // The classic quarter-circle constant 0.5523.
        let d = arc_handle_length(FRAC_PI_2, 1.0);
        assert!((d - 0.552_284_749_8).abs() < 1e-9, "got {d}");
    }

    #[test]
    fn natural_factor_is_continuous_at_right_angle() {
        let below = style_factor(RoundingStyle::Natural, FRAC_PI_2 - 1e-9);
        let above = style_factor(RoundingStyle::Natural, FRAC_PI_2);
        assert!((below - above).abs() < 1e-6);
        assert!((above - 1.0).abs() < 1e-12);
    }

    #[test]
    fn styles_order_by_fullness_at_obtuse_angles() {
        let theta = 2.0;
        let strict = control_distance(RoundingStyle::Strict, theta, 10.0);
        let natural = control_distance(RoundingStyle::Natural, theta, 10.0);
        let free = control_distance(RoundingStyle::Freestyle, theta, 10.0);
        assert!(strict < natural && natural < free);
    }

    #[test]
    fn nearly_straight_corner_stays_finite() {
        let d = arc_handle_length(PI - 1e-4, 10.0);
        assert!(d.is_finite());
        // Limit is two thirds of r.
        assert!((d - 20.0 / 3.0).abs() < 1e-3);
        assert!(is_straight(PI));
        assert!(is_straight(0.0));
        assert!(!is_straight(FRAC_PI_2));
    }
}
