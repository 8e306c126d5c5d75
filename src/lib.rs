//! figura - Areas of plane figures
//!
//! Circles, triangles, regular polygons, integer-vertex polygons and
//! caller-defined figures, all behind one [`Area`] trait, plus free
//! functions for callers who only have the raw numbers.
//!
//! Inputs are validated eagerly and every failure is returned as a
//! [`FiguraError`]; use [`FiguraError::kind`] to tell a missing argument
//! from an invalid one or from an arithmetic overflow.
//!
//! ```
//! use figura::{circle_area, polygon_area, triangle_area, Point2};
//!
//! assert_eq!(circle_area(0.0).unwrap(), 0.0);
//! assert_eq!(triangle_area(3.0, 4.0, 5.0).unwrap(), 6.0);
//!
//! let square = [
//!     Point2::new(0, 0),
//!     Point2::new(2, 0),
//!     Point2::new(2, 2),
//!     Point2::new(0, 2),
//! ];
//! assert_eq!(polygon_area(&square).unwrap(), 4.0);
//! ```

pub mod error;
pub mod figure;
pub mod figures;
pub mod primitives;
pub mod validate;

pub use error::{ErrorKind, FiguraError, Result};
pub use figure::{total_area, Area};
pub use figures::{
    circle_area, is_right_triangle, is_right_triangle_with_tolerance, polygon_area,
    polygon_area_opt, regular_polygon_area, triangle_area, ArbitraryPolygon, Circle,
    GenericFigure, GenericFigureBuilder, RegularPolygon, Triangle,
};
pub use primitives::Point2;
