//! Error handling for advprune-store
//!
//! Wraps advprune-core ExError with store-specific helpers

use std::path::Path;

use advprune_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a rules file read/write error
pub fn rules_io(path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("rules_io")
        .with_entity_id(path.display().to_string())
        .with_message(err.to_string())
}

/// Create a rules file parse error
pub fn rules_parse(path: &Path, err: &toml::de::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op("rules_parse")
        .with_entity_id(path.display().to_string())
        .with_message(err.message().to_string())
}

/// Create a snapshot fixture validation error
pub fn snapshot_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("snapshot_parse")
        .with_message(reason.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
