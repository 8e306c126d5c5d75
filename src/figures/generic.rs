//! Figures described by a list of elements and a caller-supplied area
//! function.
//!
//! This is the escape hatch for shapes the crate does not model. Nothing
//! checks that the elements mean what the function expects: passing
//! `[angle, a, b]` to a function written for `[a, b, angle]` is not
//! detected. The function is run once at construction so that outright
//! failures show up early.
//!
//! # Example
//!
//! ```
//! use figura::{Area, GenericFigure};
//!
//! // Parallelogram from two sides and the angle between them
//! let parallelogram = GenericFigure::new(vec![3.0, 4.0, std::f64::consts::FRAC_PI_6], |e| {
//!     Ok(e[0] * e[1] * e[2].sin())
//! })
//! .unwrap();
//!
//! assert!((parallelogram.area().unwrap() - 6.0).abs() < 1e-12);
//! ```

use std::fmt;

use crate::error::{FiguraError, Result};
use crate::figure::Area;
use crate::validate::non_empty;

/// Boxed area function stored by [`GenericFigure`].
pub type AreaFn<T> = Box<dyn Fn(&[T]) -> Result<f64>>;

/// A figure whose area is computed by a caller-supplied function.
pub struct GenericFigure<T> {
    elements: Vec<T>,
    area_fn: AreaFn<T>,
}

impl<T> GenericFigure<T> {
    /// Creates a figure from its elements and area function.
    ///
    /// `elements` must not be empty. `area_fn` is called once on `elements`
    /// and any error it returns is passed through; its result is discarded.
    pub fn new<A>(elements: Vec<T>, area_fn: A) -> Result<Self>
    where
        A: Fn(&[T]) -> Result<f64> + 'static,
    {
        Self::from_parts(elements, Box::new(area_fn))
    }

    /// Starts a builder, for callers whose parts may be absent.
    pub fn builder() -> GenericFigureBuilder<T> {
        GenericFigureBuilder::default()
    }

    fn from_parts(elements: Vec<T>, area_fn: AreaFn<T>) -> Result<Self> {
        non_empty("elements", &elements)?;
        area_fn(&elements)?;
        Ok(Self { elements, area_fn })
    }

    /// Returns the elements.
    #[inline]
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// Returns the elements for in-place editing.
    ///
    /// Emptying the vector is reported by the next [`area`](Area::area)
    /// call as [`FiguraError::EmptyCollection`].
    #[inline]
    pub fn elements_mut(&mut self) -> &mut Vec<T> {
        &mut self.elements
    }

    /// Replaces the elements. Only emptiness is checked; the area function
    /// is not re-run.
    pub fn set_elements(&mut self, elements: Vec<T>) -> Result<()> {
        non_empty("elements", &elements)?;
        self.elements = elements;
        Ok(())
    }

    /// Replaces the area function without running it.
    pub fn set_area_fn<A>(&mut self, area_fn: A)
    where
        A: Fn(&[T]) -> Result<f64> + 'static,
    {
        self.area_fn = Box::new(area_fn);
    }
}

impl<T> Area for GenericFigure<T> {
    fn area(&self) -> Result<f64> {
        non_empty("elements", &self.elements)?;
        (self.area_fn)(&self.elements)
    }
}

impl<T: fmt::Debug> fmt::Debug for GenericFigure<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericFigure")
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}

/// Builder for [`GenericFigure`].
///
/// Both parts are optional until [`build`](Self::build), which reports a
/// missing part as [`FiguraError::MissingArgument`].
///
/// ```
/// use figura::{ErrorKind, GenericFigure};
///
/// let err = GenericFigure::<f64>::builder()
///     .elements(vec![1.0])
///     .build()
///     .unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::NullArgument);
/// ```
pub struct GenericFigureBuilder<T> {
    elements: Option<Vec<T>>,
    area_fn: Option<AreaFn<T>>,
}

impl<T> Default for GenericFigureBuilder<T> {
    fn default() -> Self {
        Self {
            elements: None,
            area_fn: None,
        }
    }
}

impl<T> GenericFigureBuilder<T> {
    /// Sets the elements.
    pub fn elements(mut self, elements: Vec<T>) -> Self {
        self.elements = Some(elements);
        self
    }

    /// Sets the area function.
    pub fn area_fn<A>(mut self, area_fn: A) -> Self
    where
        A: Fn(&[T]) -> Result<f64> + 'static,
    {
        self.area_fn = Some(Box::new(area_fn));
        self
    }

    /// Validates the parts and builds the figure.
    ///
    /// Elements are checked before the function, so a builder with neither
    /// part reports the missing elements.
    pub fn build(self) -> Result<GenericFigure<T>> {
        let elements = self
            .elements
            .ok_or(FiguraError::MissingArgument { name: "elements" })?;
        non_empty("elements", &elements)?;
        let area_fn = self
            .area_fn
            .ok_or(FiguraError::MissingArgument { name: "area_fn" })?;
        GenericFigure::from_parts(elements, area_fn)
    }
}

impl<T: fmt::Debug> fmt::Debug for GenericFigureBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericFigureBuilder")
            .field("elements", &self.elements)
            .field("area_fn", &self.area_fn.as_ref().map(|_| ".."))
            .finish()
    }
}
