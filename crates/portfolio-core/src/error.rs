//! Error types for the portfolio site

use thiserror::Error;

/// Main error type for portfolio operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// An expected DOM node is absent from the page
    #[error("Element not found: {0}")]
    MissingElement(String),

    /// A DOM call failed (detached node, rejected style write, ...)
    #[error("DOM error: {0}")]
    Dom(String),

    /// The request never produced a response
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The form relay answered but did not accept the submission
    #[error("Form submission failed")]
    RelayRejected,

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PortfolioError {
    /// Shorthand for a missing-element error.
    pub fn missing(what: impl Into<String>) -> Self {
        Self::MissingElement(what.into())
    }

    /// Missing elements disable a component; they are not failures.
    pub fn is_missing_element(&self) -> bool {
        matches!(self, Self::MissingElement(_))
    }
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::missing("#certificates-grid");
        assert_eq!(format!("{}", err), "Element not found: #certificates-grid");
        assert!(err.is_missing_element());
    }

    #[test]
    fn test_status_display_matches_console_wording() {
        let err = PortfolioError::Status(404);
        assert_eq!(err.to_string(), "HTTP error! status: 404");
        assert!(!err.is_missing_element());
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PortfolioError = io_err.into();
        assert!(matches!(err, PortfolioError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PortfolioError = json_err.into();
        assert!(matches!(err, PortfolioError::Serialization(_)));
    }
}
