//! 2D vector helpers
//!
//! Thin named operations over `glam::Vec2`. Every function returns a new
//! value; nothing is mutated.

use glam::Vec2;

/// Vector type used throughout the simulation
pub type Vector = Vec2;

#[inline]
pub fn add(a: Vector, b: Vector) -> Vector {
    a + b
}

#[inline]
pub fn sub(a: Vector, b: Vector) -> Vector {
    a - b
}

#[inline]
pub fn scale(a: Vector, k: f32) -> Vector {
    a * k
}

/// Euclidean length
#[inline]
pub fn magnitude(a: Vector) -> f32 {
    a.length()
}

/// Unit vector in the direction of `a`, or zero when `a` has no length
#[inline]
pub fn normalize(a: Vector) -> Vector {
    let mag = magnitude(a);
    if mag == 0.0 {
        return Vec2::ZERO;
    }
    a / mag
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_zero_is_zero() {
        let n = normalize(Vec2::ZERO);
        assert_eq!(n, Vec2::ZERO);
        assert!(!n.x.is_nan() && !n.y.is_nan());
    }

    #[test]
    fn test_magnitude_3_4_5() {
        assert!((magnitude(Vec2::new(3.0, -4.0)) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(-3.0, 0.5);
        assert_eq!(add(a, b), Vec2::new(-2.0, 2.5));
        assert_eq!(sub(a, b), Vec2::new(4.0, 1.5));
        assert_eq!(scale(a, -2.0), Vec2::new(-2.0, -4.0));
    }

    proptest! {
        #[test]
        fn prop_normalize_is_unit_or_zero(x in -1.0e4f32..1.0e4, y in -1.0e4f32..1.0e4) {
            let v = Vec2::new(x, y);
            let n = normalize(v);
            // Subnormal lengths lose precision in the square
            prop_assume!(magnitude(v) == 0.0 || magnitude(v) > 1e-3);
            if magnitude(v) == 0.0 {
                prop_assert_eq!(n, Vec2::ZERO);
            } else {
                prop_assert!((magnitude(n) - 1.0).abs() < 1e-4);
                // Same direction as the input
                prop_assert!(n.dot(v) > 0.0);
            }
        }
    }
}
