//! Regular polygons given by side count and side length.

use crate::error::Result;
use crate::figure::Area;
use crate::validate::{non_negative_finite, side_count};
use num_traits::{Float, FloatConst};

/// A regular polygon: `sides` equal edges of length `side_length`.
///
/// Both parameters can be changed after construction; the area is never
/// cached.
///
/// # Example
///
/// ```
/// use figura::{Area, RegularPolygon};
///
/// let mut square: RegularPolygon = RegularPolygon::new(4, 2.0).unwrap();
/// assert!((square.area().unwrap() - 4.0).abs() < 1e-12);
///
/// square.set_side_length(3.0).unwrap();
/// assert!((square.area().unwrap() - 9.0).abs() < 1e-12);
///
/// assert!(square.set_sides(2).is_err());
/// assert_eq!(square.sides(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegularPolygon<F = f64> {
    sides: usize,
    side_length: F,
}

impl<F: Float + FloatConst> RegularPolygon<F> {
    /// Creates a regular polygon with at least three sides and a finite,
    /// non-negative side length.
    pub fn new(sides: usize, side_length: F) -> Result<Self> {
        Ok(Self {
            sides: side_count(sides)?,
            side_length: non_negative_finite("side_length", side_length)?,
        })
    }

    /// Returns the number of sides.
    #[inline]
    pub fn sides(&self) -> usize {
        self.sides
    }

    /// Changes the number of sides. On error the previous count is kept.
    pub fn set_sides(&mut self, sides: usize) -> Result<()> {
        self.sides = side_count(sides)?;
        Ok(())
    }

    /// Returns the length of each side.
    #[inline]
    pub fn side_length(&self) -> F {
        self.side_length
    }

    /// Changes the side length. On error the previous length is kept.
    pub fn set_side_length(&mut self, side_length: F) -> Result<()> {
        self.side_length = non_negative_finite("side_length", side_length)?;
        Ok(())
    }

    /// Returns the perimeter.
    pub fn perimeter(&self) -> F {
        count::<F>(self.sides) * self.side_length
    }
}

impl<F: Float + FloatConst> Area<F> for RegularPolygon<F> {
    fn area(&self) -> Result<F> {
        Ok(raw_area(self.sides, self.side_length))
    }
}

/// Side counts beyond the float range become infinity.
#[inline]
fn count<F: Float>(sides: usize) -> F {
    F::from(sides).unwrap_or_else(F::infinity)
}

/// `n * s² / (4 * tan(π / n))`
fn raw_area<F: Float + FloatConst>(sides: usize, side_length: F) -> F {
    let n = count::<F>(sides);
    let four = F::from(4.0).unwrap_or_else(|| F::one() + F::one() + F::one() + F::one());
    n * (side_length * side_length) / (four * (F::PI() / n).tan())
}

/// Computes the area of a regular polygon.
///
/// Fails when `sides < 3` or when `side_length` is negative, NaN or
/// infinite. The result itself is not checked, so extreme inputs may give
/// `+inf`.
///
/// # Example
///
/// ```
/// use figura::regular_polygon_area;
///
/// assert_eq!(regular_polygon_area(3, 0.0).unwrap(), 0.0);
/// assert!(regular_polygon_area(2, 1.0).is_err());
/// ```
pub fn regular_polygon_area<F: Float + FloatConst>(sides: usize, side_length: F) -> Result<F> {
    let sides = side_count(sides)?;
    let side_length = non_negative_finite("side_length", side_length)?;
    Ok(raw_area(sides, side_length))
}
