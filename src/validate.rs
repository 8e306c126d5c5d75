//! Input validation shared by every figure kind.
//!
//! Each check returns the accepted value (or `()`) so call sites can chain
//! them with `?`. Rejections are logged at `debug` level with the offending
//! field; the error itself is always returned to the caller.

use crate::error::{FiguraError, Result};
use num_traits::Float;
use tracing::debug;

/// Lossy conversion used only to report a value inside an error.
#[inline]
fn report<F: Float>(value: F) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Accepts finite values whose sign bit is clear.
///
/// `-0.0` is rejected along with every other negative value.
///
/// # Example
///
/// ```
/// use figura::validate::non_negative_finite;
///
/// assert_eq!(non_negative_finite("radius", 2.5).unwrap(), 2.5);
/// assert!(non_negative_finite("radius", -1.0).is_err());
/// assert!(non_negative_finite("radius", f64::NAN).is_err());
/// ```
pub fn non_negative_finite<F: Float>(name: &'static str, value: F) -> Result<F> {
    if !value.is_finite() {
        debug!(field = name, value = report(value), "rejected non-finite value");
        return Err(FiguraError::NotFinite {
            name,
            value: report(value),
        });
    }
    if value.is_sign_negative() {
        debug!(field = name, value = report(value), "rejected negative value");
        return Err(FiguraError::Negative {
            name,
            value: report(value),
        });
    }
    Ok(value)
}

/// Accepts finite values strictly greater than zero.
pub fn positive_finite<F: Float>(name: &'static str, value: F) -> Result<F> {
    if !value.is_finite() {
        debug!(field = name, value = report(value), "rejected non-finite value");
        return Err(FiguraError::NotFinite {
            name,
            value: report(value),
        });
    }
    if value <= F::zero() {
        debug!(field = name, value = report(value), "rejected non-positive value");
        return Err(FiguraError::NotPositive {
            name,
            value: report(value),
        });
    }
    Ok(value)
}

/// Checks that `a`, `b`, `c` can be the sides of a non-degenerate triangle.
///
/// Every side must be finite and positive, and every pairwise sum must
/// exceed the remaining side by more than `eps`.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn triangle_sides<F: Float>(a: F, b: F, c: F, eps: F) -> Result<()> {
    positive_finite("a", a)?;
    positive_finite("b", b)?;
    positive_finite("c", c)?;

    // Written as `!(x > eps)` so that a NaN difference is rejected too.
    let violates = |x: F| !(x > eps);
    if violates(a + b - c) || violates(a + c - b) || violates(b + c - a) {
        debug!(
            a = report(a),
            b = report(b),
            c = report(c),
            "rejected triangle sides"
        );
        return Err(FiguraError::TriangleInequality {
            a: report(a),
            b: report(b),
            c: report(c),
        });
    }
    Ok(())
}

/// Accepts side counts of at least three.
pub fn side_count(sides: usize) -> Result<usize> {
    if sides < 3 {
        debug!(sides, "rejected side count");
        return Err(FiguraError::TooFewSides { sides });
    }
    Ok(sides)
}

/// Checks that a collection holds at least one element.
pub fn non_empty<T>(name: &'static str, items: &[T]) -> Result<()> {
    if items.is_empty() {
        debug!(field = name, "rejected empty collection");
        return Err(FiguraError::EmptyCollection { name });
    }
    Ok(())
}

/// Promotes an infinite or NaN result to an error.
///
/// Used by the strict free functions; the figure types skip this check.
pub fn finite_result<F: Float>(value: F) -> Result<F> {
    if value.is_finite() {
        Ok(value)
    } else {
        debug!(value = report(value), "rejected non-finite result");
        Err(FiguraError::NonFiniteResult {
            value: report(value),
        })
    }
}
