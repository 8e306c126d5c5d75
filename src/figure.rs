//! The shared "has an area" capability.

use crate::error::Result;
use num_traits::Float;

/// A plane figure whose area can be computed.
///
/// Every figure kind in this crate implements `Area`, so figures can be
/// handled without knowing their concrete type:
///
/// ```
/// use figura::{Area, Circle, RegularPolygon, Triangle};
///
/// let figures: Vec<Box<dyn Area>> = vec![
///     Box::new(Circle::new(1.0).unwrap()),
///     Box::new(Triangle::new(3.0, 4.0, 5.0).unwrap()),
///     Box::new(RegularPolygon::new(4, 2.0).unwrap()),
/// ];
///
/// for figure in &figures {
///     assert!(figure.area().unwrap() > 0.0);
/// }
/// ```
///
/// Implementations on the real-valued figures are lenient: an area that
/// overflows to infinity is returned as `Ok`. Use the free functions
/// (e.g. [`circle_area`](crate::circle_area)) when such results must be
/// treated as errors.
pub trait Area<F: Float = f64> {
    /// Computes the area of the figure.
    fn area(&self) -> Result<F>;
}

impl<F: Float, A: Area<F> + ?Sized> Area<F> for &A {
    fn area(&self) -> Result<F> {
        (**self).area()
    }
}

impl<F: Float, A: Area<F> + ?Sized> Area<F> for Box<A> {
    fn area(&self) -> Result<F> {
        (**self).area()
    }
}

/// Sums the areas of several figures.
///
/// Stops at the first figure whose area cannot be computed.
pub fn total_area(figures: &[&dyn Area]) -> Result<f64> {
    figures
        .iter()
        .try_fold(0.0, |sum, figure| figure.area().map(|area| sum + area))
}
