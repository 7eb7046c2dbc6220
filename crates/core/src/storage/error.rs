use thiserror::Error;

/// Errors that can occur when the store touches its backing document.
///
/// A missing backing document is not an error; `load` returns an empty
/// mapping for first-run scenarios. Only a document that exists but cannot
/// be read, parsed, or written surfaces here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("I/O failure: {0}")]
    Io(String),
    #[error("Malformed document: {0}")]
    Malformed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_display() {
        let error = StoreError::Io("permission denied".to_string());
        assert_eq!(error.to_string(), "I/O failure: permission denied");
    }

    #[test]
    fn test_malformed_display() {
        let error = StoreError::Malformed("expected value at line 1".to_string());
        assert_eq!(
            error.to_string(),
            "Malformed document: expected value at line 1"
        );
    }

    #[test]
    fn test_serialization_display() {
        let error = StoreError::Serialization("key must be a string".to_string());
        assert_eq!(
            error.to_string(),
            "Serialization error: key must be a string"
        );
    }
}
