//! Membership shape library
//!
//! Triangle and trapezoid shapes map a scalar measurement to a degree in
//! [0, 1]. Control points are gameplay-tuned; the boundary semantics here
//! (zero test first, plateau second, ramps last) are load-bearing and must
//! not shift by an epsilon.

use serde::{Deserialize, Serialize};

/// A membership shape parameterized by its control points
///
/// Stateless and referentially transparent: two shapes with the same
/// control points are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Zero at and beyond `a` and `c`, exactly 1.0 at `b`
    Triangle { a: f32, b: f32, c: f32 },
    /// Zero at and beyond `a` and `d`, exactly 1.0 on the plateau `[b, c]`
    Trapezoid { a: f32, b: f32, c: f32, d: f32 },
}

impl Shape {
    pub const fn triangle(a: f32, b: f32, c: f32) -> Self {
        Shape::Triangle { a, b, c }
    }

    pub const fn trapezoid(a: f32, b: f32, c: f32, d: f32) -> Self {
        Shape::Trapezoid { a, b, c, d }
    }

    /// Membership degree of `x`, always in [0, 1] for a validated shape
    ///
    /// The zero test runs before the ramp interpolations, so shoulder sets
    /// with a degenerate ramp (equal adjacent control points, e.g. a far
    /// set ending `c == d`) never divide by zero: the degenerate ramp is
    /// an unreachable branch and the shared point reads 0.
    pub fn degree(&self, x: f32) -> f32 {
        match *self {
            Shape::Triangle { a, b, c } => {
                if x <= a || x >= c {
                    0.0
                } else if x <= b {
                    (x - a) / (b - a)
                } else {
                    (c - x) / (c - b)
                }
            }
            Shape::Trapezoid { a, b, c, d } => {
                if x <= a || x >= d {
                    0.0
                } else if x >= b && x <= c {
                    1.0
                } else if x < b {
                    (x - a) / (b - a)
                } else {
                    (d - x) / (d - c)
                }
            }
        }
    }

    /// Outer control points: membership is exactly 0 at and beyond these
    pub fn support(&self) -> (f32, f32) {
        match *self {
            Shape::Triangle { a, c, .. } => (a, c),
            Shape::Trapezoid { a, d, .. } => (a, d),
        }
    }

    /// Check control-point consistency
    ///
    /// Triangles need strictly increasing points (a degenerate side would
    /// leave the peak unreachable). Trapezoids need monotone points with
    /// nonzero overall width; equal adjacent points form a shoulder and
    /// are allowed.
    pub fn validate(&self) -> Result<(), String> {
        match *self {
            Shape::Triangle { a, b, c } => {
                if !(a < b && b < c) {
                    return Err(format!(
                        "triangle control points must satisfy a < b < c (got {}, {}, {})",
                        a, b, c
                    ));
                }
                Ok(())
            }
            Shape::Trapezoid { a, b, c, d } => {
                if !(a <= b && b <= c && c <= d) {
                    return Err(format!(
                        "trapezoid control points must satisfy a <= b <= c <= d (got {}, {}, {}, {})",
                        a, b, c, d
                    ));
                }
                if !(a < d) {
                    return Err(format!("trapezoid support has zero width (a == d == {})", a));
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_triangle_zero_outside_support() {
        let tri = Shape::triangle(4.0, 10.0, 16.0);
        assert_eq!(tri.degree(4.0), 0.0);
        assert_eq!(tri.degree(16.0), 0.0);
        assert_eq!(tri.degree(3.0), 0.0);
        assert_eq!(tri.degree(17.0), 0.0);
        assert_eq!(tri.degree(-100.0), 0.0);
        assert_eq!(tri.degree(1e9), 0.0);
    }

    #[test]
    fn test_triangle_peak_is_exactly_one() {
        let tri = Shape::triangle(4.0, 10.0, 16.0);
        assert_eq!(tri.degree(10.0), 1.0);
    }

    #[test]
    fn test_triangle_ramp_midpoints() {
        let tri = Shape::triangle(0.0, 5.0, 10.0);
        assert!((tri.degree(2.5) - 0.5).abs() < 1e-6);
        assert!((tri.degree(7.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_trapezoid_zero_outside_support() {
        let trap = Shape::trapezoid(-1.0, 0.0, 4.0, 8.0);
        assert_eq!(trap.degree(-1.0), 0.0);
        assert_eq!(trap.degree(8.0), 0.0);
        assert_eq!(trap.degree(-2.0), 0.0);
        assert_eq!(trap.degree(9.0), 0.0);
    }

    #[test]
    fn test_trapezoid_plateau_is_exactly_one() {
        let trap = Shape::trapezoid(-1.0, 0.0, 4.0, 8.0);
        assert_eq!(trap.degree(0.0), 1.0);
        assert_eq!(trap.degree(2.0), 1.0);
        assert_eq!(trap.degree(4.0), 1.0);
    }

    #[test]
    fn test_trapezoid_ramp_midpoints() {
        let trap = Shape::trapezoid(0.0, 2.0, 4.0, 6.0);
        assert!((trap.degree(1.0) - 0.5).abs() < 1e-6);
        assert!((trap.degree(5.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_right_shoulder_boundary_reads_zero() {
        // Shoulder set with c == d: the zero test wins at the shared point
        let far = Shape::trapezoid(10.0, 16.0, 100.0, 100.0);
        assert_eq!(far.degree(100.0), 0.0);
        assert_eq!(far.degree(99.9), 1.0);
        assert_eq!(far.degree(150.0), 0.0);
    }

    #[test]
    fn test_left_shoulder_boundary_reads_zero() {
        let shoulder = Shape::trapezoid(3.0, 3.0, 5.0, 7.0);
        assert_eq!(shoulder.degree(3.0), 0.0);
        assert_eq!(shoulder.degree(3.1), 1.0);
    }

    #[test]
    fn test_validate_accepts_shoulder_trapezoids() {
        assert!(Shape::trapezoid(10.0, 16.0, 100.0, 100.0).validate().is_ok());
        assert!(Shape::trapezoid(5.0, 8.0, 20.0, 20.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_monotone_points() {
        assert!(Shape::triangle(10.0, 5.0, 16.0).validate().is_err());
        assert!(Shape::trapezoid(0.0, 5.0, 3.0, 8.0).validate().is_err());
        assert!(Shape::trapezoid(8.0, 5.0, 3.0, 0.0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_degenerate_triangle_sides() {
        assert!(Shape::triangle(5.0, 5.0, 10.0).validate().is_err());
        assert!(Shape::triangle(0.0, 5.0, 5.0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_width_trapezoid() {
        assert!(Shape::trapezoid(5.0, 5.0, 5.0, 5.0).validate().is_err());
    }

    #[test]
    fn test_support() {
        assert_eq!(Shape::triangle(4.0, 10.0, 16.0).support(), (4.0, 16.0));
        assert_eq!(Shape::trapezoid(-1.0, 0.0, 4.0, 8.0).support(), (-1.0, 8.0));
    }

    proptest! {
        #[test]
        fn prop_triangle_degree_in_unit_interval(x in -1000.0f32..1000.0) {
            let tri = Shape::triangle(4.0, 10.0, 16.0);
            let degree = tri.degree(x);
            prop_assert!((0.0..=1.0).contains(&degree));
        }

        #[test]
        fn prop_trapezoid_degree_in_unit_interval(x in -1000.0f32..1000.0) {
            let trap = Shape::trapezoid(10.0, 16.0, 100.0, 100.0);
            let degree = trap.degree(x);
            prop_assert!((0.0..=1.0).contains(&degree));
        }

        #[test]
        fn prop_rising_ramp_is_monotone(x1 in 0.0f32..5.0, x2 in 0.0f32..5.0) {
            let tri = Shape::triangle(0.0, 5.0, 10.0);
            let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
            prop_assert!(tri.degree(lo) <= tri.degree(hi));
        }

        #[test]
        fn prop_falling_ramp_is_monotone(x1 in 5.0f32..10.0, x2 in 5.0f32..10.0) {
            let tri = Shape::triangle(0.0, 5.0, 10.0);
            let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
            prop_assert!(tri.degree(lo) >= tri.degree(hi));
        }
    }
}
