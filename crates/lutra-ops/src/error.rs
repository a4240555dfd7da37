//! Error types for pixel operators.
//!
//! Provides unified error handling for all lutra-ops operations.

use thiserror::Error;

/// Error type for pixel operators.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Table dimensions out of range or inconsistent.
    #[error("invalid shape: {0}")]
    Shape(String),

    /// Operation parameter not supported.
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// API contract violated by the caller.
    #[error("contract violation: {0}")]
    Contract(String),
}

/// Result type for pixel operators.
pub type OpsResult<T> = Result<T, OpsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = OpsError::Shape("LUT 1D length '1' needs to be at least 2".into());
        assert!(err.to_string().contains('1'));

        let err = OpsError::Unsupported("interpolation algorithm: cubic".into());
        assert!(err.to_string().contains("cubic"));
    }
}
