//! Error types
//!
//! Content-type and file-content failures are hard errors for the caller.
//! `NoAgreeableLanguage` never leaves the representation resolver.

use thiserror::Error;

/// Negotiation produced no agreeable choice
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NegotiationError {
    #[error("no agreeable content-type among {preferences:?}")]
    NoAgreeableContentType { preferences: Vec<String> },

    #[error("no agreeable language among {preferences:?}")]
    NoAgreeableLanguage { preferences: Vec<String> },
}

/// Representation could not be resolved for a request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepresentationError {
    #[error("None of the content-types in {accept:?} are supported.")]
    ContentTypeNotSupported {
        accept: Vec<String>,
        #[source]
        source: NegotiationError,
    },
}

/// Uploaded bytes do not conform to their declared extension
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Carries the underlying parser or decoder message
    #[error("{0}")]
    InvalidFileContent(String),
}

/// Upload rejected before it reaches storage
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("file extension {extension:?} of {file_name:?} is not supported")]
    UnsupportedExtension { file_name: String, extension: String },

    #[error("content-type {0:?} is not supported")]
    UnsupportedContentType(String),

    #[error("file content is not valid: {0}")]
    InvalidContent(#[from] ValidationError),
}

/// Configuration could not be loaded
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Logger could not be installed
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("invalid log filter {filter:?}: {message}")]
    InvalidFilter { filter: String, message: String },

    #[error("logger already initialized")]
    AlreadyInitialized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_not_supported_message() {
        let err = RepresentationError::ContentTypeNotSupported {
            accept: vec!["application/json".to_string()],
            source: NegotiationError::NoAgreeableContentType {
                preferences: vec!["application/json".to_string()],
            },
        };
        assert_eq!(
            err.to_string(),
            "None of the content-types in [\"application/json\"] are supported."
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_invalid_content_keeps_parser_message() {
        let err = UploadError::from(ValidationError::InvalidFileContent("line 1".to_string()));
        assert_eq!(err.to_string(), "file content is not valid: line 1");
    }
}
