//! # Plane Geometry
//!
//! Circle area and Heron's formula for the triangle.
//!
//! Neither function validates its inputs. Heron's formula on three lengths
//! that cannot close into a triangle produces either zero (degenerate) or NaN
//! (negative radicand); use [`satisfies_triangle_inequality`] first when the
//! caller needs to tell these apart.

use crate::constants::PI;

/// Area of a circle, A = π·r²
///
/// A negative radius is accepted; squaring absorbs the sign.
#[inline]
pub fn circle_area(radius: f64) -> f64 {
    PI * radius * radius
}

/// Check the strict triangle inequality for sides `a`, `b`, `c`
///
/// Returns `false` for degenerate (collinear) triangles, where one side equals
/// the sum of the other two.
#[inline]
pub fn satisfies_triangle_inequality(a: f64, b: f64, c: f64) -> bool {
    a + b > c && b + c > a && a + c > b
}

/// Area of a triangle from its three side lengths (Heron's formula)
///
/// ```text
///          /\
///       a /  \ b
///        /    \
///       /______\
///           c
/// ```
///
/// # Formula
/// s = (a + b + c) / 2
///
/// A = √(s(s−a)(s−b)(s−c))
///
/// # Permissive input
/// The triangle inequality is **not** enforced. Impossible side lengths are
/// passed straight through the formula, which yields NaN when the radicand
/// goes negative.
///
/// # Example
/// ```rust
/// use formula_core::formulas::triangle_area;
///
/// assert_eq!(triangle_area(3.0, 4.0, 5.0), 6.0);
/// assert!(triangle_area(1.0, 1.0, 5.0).is_nan());
/// ```
#[inline]
pub fn triangle_area(a: f64, b: f64, c: f64) -> f64 {
    if !satisfies_triangle_inequality(a, b, c) {
        tracing::debug!(a, b, c, "triangle inequality violated, computing anyway");
    }
    let s = (a + b + c) / 2.0;
    (s * (s - a) * (s - b) * (s - c)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_area_unit_radius() {
        assert!((circle_area(1.0) - 3.14159265359).abs() < 1e-10);
    }

    #[test]
    fn test_circle_area_negative_radius() {
        assert_eq!(circle_area(-2.0), circle_area(2.0));
    }

    #[test]
    fn test_triangle_area_right_triangle() {
        // 3-4-5: s = 6, A = √(6·3·2·1) = 6
        assert_eq!(triangle_area(3.0, 4.0, 5.0), 6.0);
    }

    #[test]
    fn test_triangle_area_equilateral() {
        // side 2: A = √3
        assert!((triangle_area(2.0, 2.0, 2.0) - 3.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_triangle_area_degenerate_is_zero() {
        assert_eq!(triangle_area(1.0, 2.0, 3.0), 0.0);
        assert!(!satisfies_triangle_inequality(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_triangle_area_impossible_is_nan() {
        // s = 3.5, s - c = -1.5: negative radicand
        assert!(triangle_area(1.0, 1.0, 5.0).is_nan());
        assert!(!satisfies_triangle_inequality(1.0, 1.0, 5.0));
    }

    #[test]
    fn test_triangle_inequality_holds() {
        assert!(satisfies_triangle_inequality(3.0, 4.0, 5.0));
        assert!(satisfies_triangle_inequality(5.0, 3.0, 4.0));
    }
}
