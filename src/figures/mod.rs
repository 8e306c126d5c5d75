//! Figure kinds and their free-function counterparts.
//!
//! Every figure can be used in two ways:
//!
//! - as a value implementing [`Area`](crate::Area), holding validated
//!   parameters;
//! - through a free function taking the raw parameters.
//!
//! For circles and triangles the two paths differ on overflow: the free
//! functions reject an infinite or NaN area, the types return it.
//!
//! # Example
//!
//! ```
//! use figura::figures::{circle_area, Circle};
//! use figura::Area;
//!
//! let huge = Circle::new(f64::MAX).unwrap();
//! assert!(huge.area().unwrap().is_infinite());
//! assert!(circle_area(f64::MAX).is_err());
//! ```

mod arbitrary;
mod circle;
mod generic;
mod regular;
mod triangle;

pub use arbitrary::{polygon_area, polygon_area_opt, ArbitraryPolygon};
pub use circle::{circle_area, Circle};
pub use generic::{AreaFn, GenericFigure, GenericFigureBuilder};
pub use regular::{regular_polygon_area, RegularPolygon};
pub use triangle::{
    is_right_triangle, is_right_triangle_with_tolerance, triangle_area, Triangle,
};
