//! Error handling for RipperKit
//!
//! Provides the error types shared by every layer:
//! - Quadrant errors (invalid line or hit target identifiers)
//! - Serialization failures on change notification payloads
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Quadrant identifier error type
///
/// Raised when a raw identifier crosses into the typed model and is not one
/// of the known values. This is a caller contract violation, never a user
/// input error: hosts should treat it as an internal logic defect.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadrantError {
    /// Identifier is not a quadrant line (valid: 1..=4)
    #[error("Invalid quad line: {0}")]
    InvalidLine(u8),

    /// Identifier is not a hit target (valid: 0..=5)
    #[error("Invalid hit target: {0}")]
    InvalidTarget(u8),
}

/// Main error type for RipperKit
///
/// A unified error type that can represent any error from the core layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Quadrant identifier error
    #[error(transparent)]
    Quadrant(#[from] QuadrantError),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Check if this is a quadrant contract violation
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Error::Quadrant(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadrant_error_display() {
        assert_eq!(
            QuadrantError::InvalidLine(7).to_string(),
            "Invalid quad line: 7"
        );
        assert_eq!(
            QuadrantError::InvalidTarget(6).to_string(),
            "Invalid hit target: 6"
        );
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = QuadrantError::InvalidLine(9).into();
        assert!(err.is_contract_violation());
        assert_eq!(err.to_string(), "Invalid quad line: 9");

        let json_err = serde_json::from_str::<u8>("[").unwrap_err();
        let err: Error = json_err.into();
        assert!(!err.is_contract_violation());
        assert!(matches!(err, Error::Serialization(_)));
    }
}
