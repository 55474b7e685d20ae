//! Joint geometry over 2-D keypoints

use crate::Keypoint;

/// Angle in degrees at vertex `b` between rays `b->a` and `b->c`.
///
/// Always the non-reflex angle, in [0, 180], regardless of the order the
/// outer points are given in. Coincident points (a == b or c == b) and
/// non-finite coordinates yield NaN, which rubric checks treat as a failure.
pub fn angle(a: &Keypoint, b: &Keypoint, c: &Keypoint) -> f64 {
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return f64::NAN;
    }
    if same_position(a, b) || same_position(c, b) {
        return f64::NAN;
    }

    let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let mut degrees = radians.to_degrees().abs();
    if degrees > 180.0 {
        degrees = 360.0 - degrees;
    }
    degrees.clamp(0.0, 180.0)
}

/// Absolute difference of the x coordinates
pub fn horizontal_distance(p: &Keypoint, q: &Keypoint) -> f64 {
    (p.x - q.x).abs()
}

/// Absolute difference of the y coordinates
pub fn vertical_distance(p: &Keypoint, q: &Keypoint) -> f64 {
    (p.y - q.y).abs()
}

fn same_position(p: &Keypoint, q: &Keypoint) -> bool {
    p.x == q.x && p.y == q.y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kp(x: f64, y: f64) -> Keypoint {
        Keypoint::new(x, y)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_right_angle() {
        assert_eq!(angle(&kp(0.0, 0.0), &kp(0.0, -10.0), &kp(10.0, -10.0)), 90.0);
    }

    #[test]
    fn test_straight_line_is_180() {
        assert_eq!(angle(&kp(0.0, 20.0), &kp(0.0, 0.0), &kp(0.0, -10.0)), 180.0);
    }

    #[test]
    fn test_reflex_angle_is_folded() {
        // Rays at +135 and -135 degrees: raw difference is 270
        let a = kp(-1.0, 1.0);
        let b = kp(0.0, 0.0);
        let c = kp(-1.0, -1.0);
        assert_close(angle(&a, &b, &c), 90.0);
    }

    #[test]
    fn test_order_of_outer_points_does_not_matter() {
        let a = kp(3.0, 7.0);
        let b = kp(-2.0, 1.0);
        let c = kp(5.0, -4.0);
        assert_close(angle(&a, &b, &c), angle(&c, &b, &a));
    }

    #[test]
    fn test_coincident_points_are_nan() {
        let p = kp(1.0, 1.0);
        assert!(angle(&p, &p, &kp(2.0, 2.0)).is_nan());
        assert!(angle(&kp(2.0, 2.0), &p, &p).is_nan());
    }

    #[test]
    fn test_non_finite_input_is_nan() {
        let b = kp(0.0, 0.0);
        assert!(angle(&kp(f64::INFINITY, 1.0), &b, &kp(1.0, 0.0)).is_nan());
        assert!(angle(&kp(1.0, 1.0), &b, &kp(f64::NAN, 0.0)).is_nan());
    }

    #[test]
    fn test_distances() {
        let p = kp(10.0, -5.0);
        let q = kp(-2.5, 20.0);
        assert_eq!(horizontal_distance(&p, &q), 12.5);
        assert_eq!(vertical_distance(&p, &q), 25.0);
        assert_eq!(horizontal_distance(&q, &p), 12.5);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn coordinate() -> impl Strategy<Value = f64> {
            -1.0e4..1.0e4
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn angle_stays_in_range(
                ax in coordinate(), ay in coordinate(),
                bx in coordinate(), by in coordinate(),
                cx in coordinate(), cy in coordinate(),
            ) {
                let (a, b, c) = (kp(ax, ay), kp(bx, by), kp(cx, cy));
                prop_assume!(a != b && c != b);
                let deg = angle(&a, &b, &c);
                prop_assert!((0.0..=180.0).contains(&deg), "angle {} out of range", deg);
            }

            #[test]
            fn angle_is_symmetric(
                ax in coordinate(), ay in coordinate(),
                bx in coordinate(), by in coordinate(),
                cx in coordinate(), cy in coordinate(),
            ) {
                let (a, b, c) = (kp(ax, ay), kp(bx, by), kp(cx, cy));
                prop_assume!(a != b && c != b);
                prop_assert_eq!(angle(&a, &b, &c), angle(&c, &b, &a));
            }
        }
    }
}
