//! Error types for Storelens
//!
//! The search core itself is total: scoring, extraction, and term building
//! are defined for every input and never fail. Errors exist only at the
//! boundary where catalogs are loaded or parsed. Uses `thiserror` for
//! ergonomic error handling with automatic `Display` and `Error` trait
//! implementations.

use thiserror::Error;

/// The primary error type for Storelens operations.
#[derive(Error, Debug)]
pub enum StorelensError {
    /// Catalog loading/parsing errors (unreadable file, malformed records, etc.)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Configuration-related errors (invalid search options, bad weight overrides, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Resource not found (unknown product name or SKU, etc.)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Standard I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for Storelens operations.
pub type Result<T> = std::result::Result<T, StorelensError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorelensError::Catalog("empty product array".to_string());
        assert_eq!(err.to_string(), "Catalog error: empty product array");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: StorelensError = io_err.into();
        assert!(matches!(err, StorelensError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: StorelensError = json_err.into();
        assert!(matches!(err, StorelensError::Json(_)));
    }

    #[test]
    fn test_result_type() {
        fn returns_result() -> Result<i32> {
            Ok(7)
        }
        assert_eq!(returns_result().unwrap(), 7);
    }
}
