//! Error types for quaternion operations.

use thiserror::Error;

/// Result type alias for quaternion operations.
pub type QuaternionResult<T> = Result<T, QuaternionError>;

/// Errors that can occur when constructing or transforming quaternions.
///
/// Only construction from slices and the operations that divide by the norm
/// can fail. Everything else is total over `f64`, including `NaN` and
/// infinite inputs.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuaternionError {
    /// A slice had the wrong number of elements.
    #[error("dimension mismatch: expected {expected} elements, got {actual}")]
    DimensionMismatch {
        /// Required number of elements.
        expected: usize,
        /// Number of elements provided.
        actual: usize,
    },

    /// The norm is exactly zero, so the quaternion cannot be normalized or inverted.
    #[error("zero norm")]
    ZeroNorm,
}

impl QuaternionError {
    /// Creates a dimension mismatch error.
    #[must_use]
    pub const fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Check if this is a dimension mismatch error.
    #[must_use]
    pub const fn is_dimension_mismatch(&self) -> bool {
        matches!(self, Self::DimensionMismatch { .. })
    }

    /// Check if this is a zero norm error.
    #[must_use]
    pub const fn is_zero_norm(&self) -> bool {
        matches!(self, Self::ZeroNorm)
    }
}

/// Fails with [`QuaternionError::DimensionMismatch`] unless `actual == expected`.
pub(crate) fn check_dimension(expected: usize, actual: usize) -> QuaternionResult<()> {
    if actual == expected {
        Ok(())
    } else {
        tracing::debug!(expected, actual, "rejecting slice with wrong dimension");
        Err(QuaternionError::dimension_mismatch(expected, actual))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = QuaternionError::dimension_mismatch(4, 2);
        let msg = format!("{err}");
        assert!(msg.contains("expected 4"));
        assert!(msg.contains("got 2"));

        let msg = QuaternionError::ZeroNorm.to_string();
        assert!(msg.contains("zero norm"));
    }

    #[test]
    fn error_predicates() {
        let err = QuaternionError::dimension_mismatch(3, 5);
        assert!(err.is_dimension_mismatch());
        assert!(!err.is_zero_norm());

        let err = QuaternionError::ZeroNorm;
        assert!(err.is_zero_norm());
        assert!(!err.is_dimension_mismatch());
    }

    #[test]
    fn check_dimension_accepts_exact_length() {
        assert!(check_dimension(3, 3).is_ok());
        assert_eq!(
            check_dimension(4, 3),
            Err(QuaternionError::DimensionMismatch {
                expected: 4,
                actual: 3
            })
        );
    }
}
