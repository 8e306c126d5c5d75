//! 2D point type.

use num_traits::Zero;

/// A point in the plane.
///
/// The coordinate type is left open; polygon vertices use `Point2<i32>`.
///
/// # Example
///
/// ```
/// use figura::Point2;
///
/// let p = Point2::new(3, -4);
/// assert_eq!(p.x, 3);
/// assert_eq!(Point2::from((3, -4)), p);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point2<T> {
    /// X coordinate
    pub x: T,
    /// Y coordinate
    pub y: T,
}

impl<T> Point2<T> {
    /// Creates a new point.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Zero> Point2<T> {
    /// Returns the origin.
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
        }
    }
}

impl<T> From<(T, T)> for Point2<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> From<Point2<T>> for (T, T) {
    #[inline]
    fn from(p: Point2<T>) -> Self {
        (p.x, p.y)
    }
}
