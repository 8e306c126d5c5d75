//! Arbitrary polygons over integer vertices.
//!
//! The area is computed with the shoelace formula in `i64` using checked
//! arithmetic, so even coordinates at the limits of `i32` never wrap
//! silently: an overflowing accumulation is reported as
//! [`FiguraError::Overflow`].

use crate::error::{FiguraError, Result};
use crate::figure::Area;
use crate::primitives::Point2;
use crate::validate::non_empty;
use tracing::trace;

/// A polygon given by its vertices in order.
///
/// The polygon is implicitly closed (the last vertex connects to the first)
/// and may wind either way. Vertices can be changed freely after
/// construction, including through [`vertices_mut`](Self::vertices_mut), so
/// the area is recomputed on every call.
///
/// # Example
///
/// ```
/// use figura::{Area, ArbitraryPolygon, Point2};
///
/// let mut square = ArbitraryPolygon::new(vec![
///     Point2::new(0, 0),
///     Point2::new(2, 0),
///     Point2::new(2, 2),
///     Point2::new(0, 2),
/// ])
/// .unwrap();
/// assert_eq!(square.area().unwrap(), 4.0);
///
/// square.vertices_mut()[2] = Point2::new(4, 2);
/// assert_eq!(square.area().unwrap(), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArbitraryPolygon {
    vertices: Vec<Point2<i32>>,
}

impl ArbitraryPolygon {
    /// Creates a polygon from at least one vertex.
    pub fn new(vertices: Vec<Point2<i32>>) -> Result<Self> {
        non_empty("vertices", &vertices)?;
        Ok(Self { vertices })
    }

    /// Creates a polygon from `(x, y)` pairs.
    pub fn from_coords<I>(coords: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        Self::new(coords.into_iter().map(Point2::from).collect())
    }

    /// Returns the vertices.
    #[inline]
    pub fn vertices(&self) -> &[Point2<i32>] {
        &self.vertices
    }

    /// Returns the vertices for in-place editing.
    ///
    /// Emptying the vector is not prevented here; the next call to
    /// [`area`](Area::area) reports it as [`FiguraError::EmptyCollection`].
    #[inline]
    pub fn vertices_mut(&mut self) -> &mut Vec<Point2<i32>> {
        &mut self.vertices
    }

    /// Replaces all vertices. On error the previous vertices are kept.
    pub fn set_vertices(&mut self, vertices: Vec<Point2<i32>>) -> Result<()> {
        non_empty("vertices", &vertices)?;
        self.vertices = vertices;
        Ok(())
    }

    /// Appends a vertex.
    #[inline]
    pub fn push(&mut self, vertex: Point2<i32>) {
        self.vertices.push(vertex);
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the vertex list has been emptied through
    /// [`vertices_mut`](Self::vertices_mut).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl Area for ArbitraryPolygon {
    fn area(&self) -> Result<f64> {
        polygon_area(&self.vertices)
    }
}

/// Cross product of two position vectors, widened to `i64`.
#[inline]
fn cross(p: Point2<i32>, q: Point2<i32>) -> Option<i64> {
    let lhs = i64::from(p.x).checked_mul(i64::from(q.y))?;
    let rhs = i64::from(p.y).checked_mul(i64::from(q.x))?;
    lhs.checked_sub(rhs)
}

/// Twice the signed area, positive for counter-clockwise winding.
///
/// Returns `None` if any step of the accumulation overflows.
fn doubled_signed_area(vertices: &[Point2<i32>]) -> Option<i64> {
    let (&first, &last) = (vertices.first()?, vertices.last()?);
    vertices
        .windows(2)
        .try_fold(cross(last, first)?, |sum, edge| {
            sum.checked_add(cross(edge[0], edge[1])?)
        })
}

/// Computes the area of a polygon using the shoelace formula.
///
/// A single vertex or a collinear vertex set has area `0.0`. Winding order
/// does not matter.
///
/// The doubled area is halved in floating point, so odd sums keep their
/// half unit: the unit right triangle has area `0.5`, not `0`.
///
/// # Errors
///
/// - [`FiguraError::EmptyCollection`] if `vertices` is empty.
/// - [`FiguraError::Overflow`] if the `i64` accumulation overflows.
///
/// # Example
///
/// ```
/// use figura::{polygon_area, Point2};
///
/// let triangle = [Point2::new(0, 0), Point2::new(0, 4), Point2::new(3, 0)];
/// assert_eq!(polygon_area(&triangle).unwrap(), 6.0);
/// ```
pub fn polygon_area(vertices: &[Point2<i32>]) -> Result<f64> {
    non_empty("vertices", vertices)?;
    match doubled_signed_area(vertices) {
        Some(doubled) => Ok(doubled.unsigned_abs() as f64 / 2.0),
        None => {
            trace!(vertices = vertices.len(), "shoelace accumulation overflowed");
            Err(FiguraError::Overflow)
        }
    }
}

/// Like [`polygon_area`], but also accepts an absent vertex list.
///
/// `None` fails with [`FiguraError::MissingArgument`], which is distinct
/// from the [`FiguraError::EmptyCollection`] returned for `Some(&[])`.
pub fn polygon_area_opt(vertices: Option<&[Point2<i32>]>) -> Result<f64> {
    let vertices = vertices.ok_or(FiguraError::MissingArgument { name: "vertices" })?;
    polygon_area(vertices)
}
