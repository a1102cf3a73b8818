//! Error types for Heartfall

use thiserror::Error;

/// Errors raised while loading page content from disk.
#[derive(Error, Debug)]
pub enum ContentError {
    /// Content file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Content file is not valid JSON for [`crate::SiteContent`]
    #[error("Content parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Content parsed but fails a structural requirement
    #[error("Invalid content: {0}")]
    Invalid(String),
}

/// Result type alias using ContentError
pub type ContentResult<T> = Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContentError::Invalid("no particle images".to_string());
        assert_eq!(format!("{}", err), "Invalid content: no particle images");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ContentError = io_err.into();
        assert!(matches!(err, ContentError::Io(_)));
    }
}
