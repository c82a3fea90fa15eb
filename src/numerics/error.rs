// src/numerics/error.rs
// Errors for the handful of fallible numerics entry points.

/// Errors raised by conversions and configuration parsing.
///
/// Arithmetic never returns this type: degenerate inputs propagate NaN/Inf
/// through the result instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NumericsError {
    #[error("Dimension mismatch: expected {expected} components, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = NumericsError::DimensionMismatch { expected: 3, actual: 2 };
        assert_eq!(err.to_string(), "Dimension mismatch: expected 3 components, got 2");

        let err = NumericsError::InvalidParameters("near must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameters: near must be positive");
    }
}
