//! Circle defined by its radius.

use crate::error::Result;
use crate::figure::Area;
use crate::validate::{finite_result, non_negative_finite};
use num_traits::{Float, FloatConst};

/// A circle defined by its radius.
///
/// The radius is validated on construction and on every change; the area is
/// recomputed from the current radius each time it is requested.
///
/// # Example
///
/// ```
/// use figura::{Area, Circle};
///
/// let mut circle = Circle::new(1.0).unwrap();
/// assert_eq!(circle.area().unwrap(), std::f64::consts::PI);
///
/// circle.set_radius(2.0).unwrap();
/// assert_eq!(circle.area().unwrap(), 4.0 * std::f64::consts::PI);
///
/// assert!(circle.set_radius(-1.0).is_err());
/// assert_eq!(circle.radius(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle<F = f64> {
    radius: F,
}

impl<F: Float + FloatConst> Circle<F> {
    /// Creates a circle, rejecting negative, NaN and infinite radii.
    pub fn new(radius: F) -> Result<Self> {
        Ok(Self {
            radius: non_negative_finite("radius", radius)?,
        })
    }

    /// Creates a unit circle.
    #[inline]
    pub fn unit() -> Self {
        Self { radius: F::one() }
    }

    /// Returns the radius.
    #[inline]
    pub fn radius(&self) -> F {
        self.radius
    }

    /// Replaces the radius. On error the previous radius is kept.
    pub fn set_radius(&mut self, radius: F) -> Result<()> {
        self.radius = non_negative_finite("radius", radius)?;
        Ok(())
    }

    /// Returns the diameter of the circle.
    #[inline]
    pub fn diameter(&self) -> F {
        self.radius + self.radius
    }

    /// Returns the circumference of the circle.
    #[inline]
    pub fn circumference(&self) -> F {
        F::TAU() * self.radius
    }
}

impl<F: Float + FloatConst> Default for Circle<F> {
    fn default() -> Self {
        Self::unit()
    }
}

impl<F: Float + FloatConst> Area<F> for Circle<F> {
    /// Returns `radius * radius * π`.
    ///
    /// A radius large enough to overflow yields `Ok(inf)`.
    fn area(&self) -> Result<F> {
        Ok(raw_area(self.radius))
    }
}

#[inline]
fn raw_area<F: Float + FloatConst>(radius: F) -> F {
    radius * radius * F::PI()
}

/// Computes the area of a circle from its radius.
///
/// Fails if the radius is negative, NaN or infinite, and also if the area
/// itself overflows to infinity.
///
/// # Example
///
/// ```
/// use figura::circle_area;
///
/// assert_eq!(circle_area(0.0).unwrap(), 0.0);
/// assert!(circle_area(-654.0).is_err());
/// assert!(circle_area(f64::MAX).is_err());
/// ```
pub fn circle_area<F: Float + FloatConst>(radius: F) -> Result<F> {
    let radius = non_negative_finite("radius", radius)?;
    finite_result(raw_area(radius))
}
