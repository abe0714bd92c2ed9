//! Error types for the component crate.
//!
//! This module provides structured error types for building, writing and
//! reading component descriptors.

use std::io;
use thiserror::Error;

/// Errors that can occur while exporting a component.
#[derive(Error, Debug)]
pub enum ComponentError {
    /// The descriptor fields are inconsistent.
    #[error("Invalid component: {0}")]
    InvalidComponent(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for component operations.
pub type ComponentResult<T> = Result<T, ComponentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_error_display() {
        let err = ComponentError::InvalidComponent("LedCount is 3 but 2 coordinates".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid component: LedCount is 3 but 2 coordinates"
        );
    }

    #[test]
    fn test_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let err: ComponentError = io_err.into();
        assert!(matches!(err, ComponentError::IoError(_)));

        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: ComponentError = json_err.into();
        assert!(matches!(err, ComponentError::SerializationError(_)));
    }
}
