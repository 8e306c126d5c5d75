//! Error types for figura operations.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = FiguraError> = std::result::Result<T, E>;

/// Coarse classification of a [`FiguraError`].
///
/// Callers that only care about *what went wrong* at the level of
/// "something was missing", "a value was out of its domain" or "the
/// arithmetic overflowed" can match on this instead of on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required collection or function was not supplied.
    NullArgument,
    /// A value violates a domain precondition.
    InvalidArgument,
    /// Integer accumulation exceeded the representable range.
    Overflow,
}

/// Errors that can occur while building figures or computing areas.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FiguraError {
    /// A required argument was not supplied.
    #[error("missing argument: {name}")]
    MissingArgument {
        /// Name of the missing argument.
        name: &'static str,
    },

    /// A value is NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NotFinite {
        /// Name of the offending argument.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A value is negative (including negative zero).
    #[error("{name} must not be negative, got {value}")]
    Negative {
        /// Name of the offending argument.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A value is zero or negative where a strictly positive one is required.
    #[error("{name} must be positive, got {value}")]
    NotPositive {
        /// Name of the offending argument.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The sum of two sides does not exceed the third.
    #[error("sides {a}, {b}, {c} violate the triangle inequality")]
    TriangleInequality {
        /// First side.
        a: f64,
        /// Second side.
        b: f64,
        /// Third side.
        c: f64,
    },

    /// A regular polygon needs at least three sides.
    #[error("a regular polygon needs at least 3 sides, got {sides}")]
    TooFewSides {
        /// The rejected side count.
        sides: usize,
    },

    /// A collection that must hold at least one element is empty.
    #[error("{name} must not be empty")]
    EmptyCollection {
        /// Name of the empty collection.
        name: &'static str,
    },

    /// A strict computation produced an infinite or NaN area.
    #[error("arguments produced a non-finite area ({value})")]
    NonFiniteResult {
        /// The non-finite result.
        value: f64,
    },

    /// A client-supplied area function rejected its input.
    #[error("area function failed: {0}")]
    AreaFunction(String),

    /// Widened integer accumulation overflowed.
    #[error("arithmetic overflow while accumulating polygon area")]
    Overflow,
}

impl FiguraError {
    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArgument { .. } => ErrorKind::NullArgument,
            Self::Overflow => ErrorKind::Overflow,
            Self::NotFinite { .. }
            | Self::Negative { .. }
            | Self::NotPositive { .. }
            | Self::TriangleInequality { .. }
            | Self::TooFewSides { .. }
            | Self::EmptyCollection { .. }
            | Self::NonFiniteResult { .. }
            | Self::AreaFunction(_) => ErrorKind::InvalidArgument,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            FiguraError::MissingArgument { name: "vertices" }.kind(),
            ErrorKind::NullArgument
        );
        assert_eq!(
            FiguraError::EmptyCollection { name: "vertices" }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(FiguraError::Overflow.kind(), ErrorKind::Overflow);
        assert_eq!(
            FiguraError::TooFewSides { sides: 2 }.kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_missing_and_empty_are_distinct() {
        let missing = FiguraError::MissingArgument { name: "elements" };
        let empty = FiguraError::EmptyCollection { name: "elements" };
        assert_ne!(missing, empty);
        assert_ne!(missing.kind(), empty.kind());
    }

    #[test]
    fn test_display() {
        let err = FiguraError::Negative {
            name: "radius",
            value: -1.5,
        };
        assert_eq!(err.to_string(), "radius must not be negative, got -1.5");

        let err = FiguraError::TriangleInequality {
            a: 9.0,
            b: 3.0,
            c: 12.0,
        };
        assert_eq!(
            err.to_string(),
            "sides 9, 3, 12 violate the triangle inequality"
        );
    }
}
