//! Error types for the CAM tools crate.

use ripperkit_core::QuadrantError;
use thiserror::Error;

/// Errors that can occur during CAM tool operations.
#[derive(Error, Debug)]
pub enum CamToolError {
    /// A quadrant id outside the known range reached the generator.
    ///
    /// Always a caller bug: hosts should report it as an internal defect.
    #[error("Quadrant contract violation: {0}")]
    Quadrant(#[from] QuadrantError),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for CAM tool operations.
pub type CamToolResult<T> = Result<T, CamToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cam_tool_error_display() {
        let err: CamToolError = QuadrantError::InvalidLine(7).into();
        assert_eq!(
            err.to_string(),
            "Quadrant contract violation: Invalid quad line: 7"
        );
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
        let err: CamToolError = json_err.into();
        assert!(matches!(err, CamToolError::SerializationError(_)));
    }
}
