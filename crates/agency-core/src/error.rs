//! Error types for Agency Access

use thiserror::Error;

/// Main error type for Agency Access operations
#[derive(Error, Debug)]
pub enum AccessError {
    /// Slot index outside of `0..SLOT_COUNT`
    #[error("Slot index out of range: {0}")]
    SlotOutOfRange(usize),

    /// Secret code is not exactly eight decimal digits
    #[error("Invalid secret code: {0}")]
    InvalidSecret(String),

    /// Configuration value rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using AccessError
pub type AccessResult<T> = Result<T, AccessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AccessError::SlotOutOfRange(9);
        assert_eq!(format!("{}", err), "Slot index out of range: 9");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let access_err: AccessError = io_err.into();
        assert!(matches!(access_err, AccessError::Io(_)));
    }
}
