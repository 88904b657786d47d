//! Logger module
//!
//! Provides logging utilities including:
//! - Global subscriber setup (pretty or JSON output)
//! - Structured events for negotiation and upload decisions

use crate::config::LoggingConfig;
use crate::error::{LoggerError, NegotiationError, UploadError, ValidationError};
use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber with configuration
///
/// Should be called once at application startup. `RUST_LOG` takes precedence
/// over the configured level.
pub fn init(config: &LoggingConfig) -> Result<(), LoggerError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| LoggerError::InvalidFilter {
            filter: config.level.clone(),
            message: e.to_string(),
        })?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if config.format.eq_ignore_ascii_case("json") {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|_| LoggerError::AlreadyInitialized)
}

pub fn log_content_type_rejected(accept: &[String]) {
    tracing::warn!(?accept, "no supported content-type matches the Accept header");
}

pub fn log_language_fallback(err: &NegotiationError, fallback: &str) {
    tracing::debug!(error = %err, fallback, "falling back to default language");
}

pub fn log_invalid_file_content(extension: &str, err: &ValidationError) {
    tracing::warn!(extension, error = %err, "uploaded file content is not valid");
}

pub fn log_upload_rejected(file_name: &str, err: &UploadError) {
    tracing::warn!(file_name, error = %err, "upload rejected");
}

pub fn log_response_build_failed(status: hyper::StatusCode, err: &hyper::http::Error) {
    tracing::error!(%status, error = %err, "failed to build response");
}
