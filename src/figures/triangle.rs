//! Triangles given by their three side lengths.

use crate::error::{FiguraError, Result};
use crate::figure::Area;
use crate::validate::{finite_result, non_negative_finite, triangle_sides};
use num_traits::Float;

/// A triangle defined by its side lengths.
///
/// Sides are fixed at construction, so the triangle inequality only has to be
/// checked once. Area and the right-angle flag are derived up front and
/// stored.
///
/// # Example
///
/// ```
/// use figura::{Area, Triangle};
///
/// let t = Triangle::new(3.0, 4.0, 5.0).unwrap();
/// assert_eq!(t.area().unwrap(), 6.0);
/// assert!(t.is_right());
///
/// assert!(Triangle::new(9.0, 3.0, 12.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<F = f64> {
    a: F,
    b: F,
    c: F,
    area: F,
    right: bool,
}

impl<F: Float> Triangle<F> {
    /// Creates a triangle from three side lengths.
    ///
    /// Every side must be finite and positive, and each pair of sides must
    /// sum to more than the third by at least `F::epsilon()`.
    ///
    /// The stored area is not checked afterwards: sides near `F::max_value()`
    /// give an infinite area rather than an error.
    ///
    /// The epsilon margin is absolute, so it does not scale with the sides.
    /// Triangles whose sides are all around `F::epsilon()` or smaller are
    /// rejected as degenerate even when their proportions are fine.
    pub fn new(a: F, b: F, c: F) -> Result<Self> {
        let eps = F::epsilon();
        triangle_sides(a, b, c, eps)?;
        Ok(Self {
            a,
            b,
            c,
            area: heron(a, b, c),
            right: right_angled(a, b, c, eps),
        })
    }

    /// Returns the three sides in construction order.
    #[inline]
    pub fn sides(&self) -> [F; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns true if one side is strictly the longest and satisfies
    /// Pythagoras within `F::epsilon()`.
    #[inline]
    pub fn is_right(&self) -> bool {
        self.right
    }

    /// Returns the perimeter of the triangle.
    #[inline]
    pub fn perimeter(&self) -> F {
        self.a + self.b + self.c
    }
}

impl<F: Float> Area<F> for Triangle<F> {
    fn area(&self) -> Result<F> {
        Ok(self.area)
    }
}

impl<F: Float> TryFrom<[F; 3]> for Triangle<F> {
    type Error = FiguraError;

    fn try_from([a, b, c]: [F; 3]) -> Result<Self> {
        Self::new(a, b, c)
    }
}

/// Heron's formula. Sides are assumed valid.
#[inline]
pub(crate) fn heron<F: Float>(a: F, b: F, c: F) -> F {
    let two = F::one() + F::one();
    let s = (a + b + c) / two;
    (s * (s - a) * (s - b) * (s - c)).sqrt()
}

/// Only a side strictly longer than both others can be the hypotenuse, so
/// equilateral and "two longest equal" triangles are never right-angled.
fn right_angled<F: Float>(a: F, b: F, c: F, eps: F) -> bool {
    let hypotenuse =
        |h: F, p: F, q: F| h > p && h > q && (h * h - (p * p + q * q)).abs() <= eps;
    hypotenuse(a, b, c) || hypotenuse(b, a, c) || hypotenuse(c, a, b)
}

/// Computes the area of a triangle from its side lengths.
///
/// Fails on invalid sides (see [`Triangle::new`]) and also when the area
/// overflows to infinity or becomes NaN.
///
/// # Example
///
/// ```
/// use figura::triangle_area;
///
/// let area: f64 = triangle_area(2.0, 4.21, 3.47).unwrap();
/// assert!((area - 3.4443907095450124).abs() < 1e-12);
///
/// assert!(triangle_area(97.0, 12.0, 20.0).is_err());
/// ```
pub fn triangle_area<F: Float>(a: F, b: F, c: F) -> Result<F> {
    triangle_sides(a, b, c, F::epsilon())?;
    finite_result(heron(a, b, c))
}

/// Tests whether the sides form a right triangle, using `F::epsilon()` as
/// the tolerance on `c² - (a² + b²)`.
///
/// Fails on invalid sides, like [`triangle_area`].
///
/// The tolerance is absolute. For very small sides the squared terms fall
/// below it and almost any triangle with a strictly longest side passes, so
/// `is_right_triangle(1e-9, 1e-9, 1.5e-9)` is `Ok(true)`. Use
/// [`is_right_triangle_with_tolerance`] with a tolerance suited to the scale.
pub fn is_right_triangle<F: Float>(a: F, b: F, c: F) -> Result<bool> {
    is_right_triangle_with_tolerance(a, b, c, F::epsilon())
}

/// Tests whether the sides form a right triangle within `eps`.
///
/// `eps` is compared against `|h² - (p² + q²)|`, where `h` is the side
/// strictly longer than the other two. It only affects the right-angle
/// test: the sides are validated exactly as in [`triangle_area`].
///
/// # Errors
///
/// Fails on invalid sides, and on an `eps` that is negative or not finite.
///
/// # Example
///
/// ```
/// use figura::is_right_triangle_with_tolerance;
///
/// assert!(!is_right_triangle_with_tolerance(3.0, 4.0, 5.001, 1e-6).unwrap());
/// assert!(is_right_triangle_with_tolerance(3.0, 4.0, 5.001, 0.1).unwrap());
/// ```
pub fn is_right_triangle_with_tolerance<F: Float>(a: F, b: F, c: F, eps: F) -> Result<bool> {
    let eps = non_negative_finite("eps", eps)?;
    triangle_sides(a, b, c, F::epsilon())?;
    Ok(right_angled(a, b, c, eps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_new() {
        let t = Triangle::new(2.0, 4.21, 3.47).unwrap();
        assert_eq!(t.sides(), [2.0, 4.21, 3.47]);
        assert_relative_eq!(t.area().unwrap(), 3.4443907095450124, epsilon = 1e-12);
        assert!(!t.is_right());
    }

    #[test]
    fn test_try_from_array() {
        let t: Triangle = Triangle::try_from([3.0, 4.0, 5.0]).unwrap();
        assert_eq!(t, Triangle::new(3.0, 4.0, 5.0).unwrap());
        assert!(Triangle::<f64>::try_from([1.0, 1.0, 3.0]).is_err());
    }

    #[test]
    fn test_perimeter() {
        let t = Triangle::new(3.0, 4.0, 5.0).unwrap();
        assert_eq!(t.perimeter(), 12.0);
    }

    #[test]
    fn test_new_rejects_degenerate() {
        // Sum of two sides equals the third
        let err = Triangle::new(9.0, 3.0, 12.0).unwrap_err();
        assert!(matches!(err, FiguraError::TriangleInequality { .. }));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        // Sum of two sides less than the third
        assert!(matches!(
            Triangle::new(97.0, 12.0, 20.0),
            Err(FiguraError::TriangleInequality { .. })
        ));
    }

    #[test]
    fn test_new_rejects_bad_sides() {
        assert!(Triangle::new(0.0, 12.0, 3.0).is_err());
        assert!(Triangle::new(-24.0, 2.0, 5.0).is_err());
        assert!(Triangle::new(f64::NAN, 2.0, 0.2).is_err());
        assert!(Triangle::new(f64::INFINITY, 2.0, 3.0).is_err());
    }

    #[test]
    fn test_area_is_stable() {
        let t: Triangle = Triangle::new(2.0, 4.21, 3.47).unwrap();
        let first = t.area().unwrap();
        let second = t.area().unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_stored_area_is_lenient() {
        let t: Triangle = Triangle::new(1e200, 1e200, 1e200).unwrap();
        assert!(t.area().unwrap().is_infinite());
    }

    #[test]
    fn test_triangle_area_known_values() {
        assert_relative_eq!(
            triangle_area(2.0, 4.21, 3.47).unwrap(),
            3.4443907095450124,
            epsilon = 1e-12
        );
        // Nearly degenerate but still valid
        assert_relative_eq!(
            triangle_area(9.0, 3.0, 11.9999999999).unwrap(),
            0.00012727809540592021,
            max_relative = 1e-6
        );
        // Tiny sides
        assert_relative_eq!(
            triangle_area(1e-8, 1e-8, 1e-8).unwrap(),
            4.3301270189221959e-17,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_triangle_area_rejects() {
        assert!(triangle_area(97.0, 12.0, 20.0).is_err());
        assert!(triangle_area(9.0, 3.0, 12.0).is_err());
        assert!(triangle_area(0.0, 12.0, 3.0).is_err());
        assert!(triangle_area(-24.0, 2.0, 5.0).is_err());
        assert!(triangle_area(f64::NAN, 2.0, 0.2).is_err());
        assert!(triangle_area(f64::MAX, 1.0, 4.0).is_err());
    }

    #[test]
    fn test_triangle_area_rejects_overflow() {
        assert!(matches!(
            triangle_area(1e200, 1e200, 1e200),
            Err(FiguraError::NonFiniteResult { .. })
        ));
    }

    #[test]
    fn test_is_right_triangle() {
        assert!(is_right_triangle(3.0, 4.0, 5.0).unwrap());
        assert!(is_right_triangle(5.0, 3.0, 4.0).unwrap());
        assert!(is_right_triangle(4.0, 5.0, 3.0).unwrap());

        assert!(!is_right_triangle(3.0, 4.0, 5.000000000001).unwrap());
        assert!(!is_right_triangle(3.0, 4.0, 4.999999999999).unwrap());
        assert!(!is_right_triangle(2.0, 4.21, 3.47).unwrap());
    }

    #[test]
    fn test_is_right_triangle_needs_strict_longest_side() {
        assert!(!is_right_triangle(1.0, 1.0, 1.0).unwrap());
        assert!(!is_right_triangle(5.0, 5.0, 3.0).unwrap());
        // Huge tolerance, but no side is strictly the longest
        assert!(!is_right_triangle_with_tolerance(5.0, 5.0, 5.0, 1.0).unwrap());
    }

    #[test]
    fn test_is_right_triangle_rejects() {
        assert!(is_right_triangle(9.0, 3.0, 12.0).is_err());
        assert!(is_right_triangle(0.0, 4.0, 5.0).is_err());
    }

    #[test]
    fn test_tolerance_does_not_loosen_validation() {
        assert!(matches!(
            is_right_triangle_with_tolerance(1.0, 1.0, 2.5, -1.0),
            Err(FiguraError::Negative { name: "eps", .. })
        ));
        assert!(matches!(
            is_right_triangle_with_tolerance(1.0, 1.0, 2.5, 0.0),
            Err(FiguraError::TriangleInequality { .. })
        ));
        assert!(matches!(
            is_right_triangle_with_tolerance(3.0, 4.0, 5.0, f64::NAN),
            Err(FiguraError::NotFinite { name: "eps", .. })
        ));
    }

    #[test]
    fn test_tolerance_does_not_tighten_validation() {
        // Valid triangle, even though 1 + 1 - 1.95 is below the tolerance
        assert!(!is_right_triangle_with_tolerance(1.0, 1.0, 1.95, 0.1).unwrap());
        assert!(is_right_triangle_with_tolerance(1.0, 1.0, 1.42, 0.1).unwrap());
    }

    #[test]
    fn test_absolute_epsilon_at_small_scale() {
        assert!(is_right_triangle(1e-9, 1e-9, 1.5e-9).unwrap());
        assert!(!is_right_triangle_with_tolerance(1e-9, 1e-9, 1.5e-9, 1e-30).unwrap());
        assert!(matches!(
            Triangle::new(1e-17, 1e-17, 1e-17),
            Err(FiguraError::TriangleInequality { .. })
        ));
    }

    #[test]
    fn test_object_and_free_function_agree() {
        let t = Triangle::new(3.0, 4.0, 5.0).unwrap();
        assert!(t.is_right());
        assert_eq!(t.area().unwrap(), triangle_area(3.0, 4.0, 5.0).unwrap());
    }

    #[test]
    fn test_f32_support() {
        let t: Triangle<f32> = Triangle::new(3.0, 4.0, 5.0).unwrap();
        assert_relative_eq!(t.area().unwrap(), 6.0f32);
        assert!(t.is_right());
    }

    proptest! {
        #[test]
        fn prop_scaled_right_triangle(k in 1e-3f64..1e3) {
            // Pythagorean triples scaled by a power of two stay exact.
            let scale = k.log2().round().exp2();
            let t = Triangle::new(3.0 * scale, 4.0 * scale, 5.0 * scale).unwrap();
            prop_assert!(t.is_right());
            prop_assert_eq!(t.area().unwrap(), 6.0 * scale * scale);
        }

        #[test]
        fn prop_area_is_symmetric(a in 1.0f64..100.0, b in 1.0f64..100.0, c in 1.0f64..100.0) {
            prop_assume!(a + b > c + 1e-3 && a + c > b + 1e-3 && b + c > a + 1e-3);
            let abc = triangle_area(a, b, c).unwrap();
            let cab = triangle_area(c, a, b).unwrap();
            prop_assert!((abc - cab).abs() <= 1e-9 * abc.max(1.0));
        }
    }
}
