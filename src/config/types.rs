// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub negotiation: NegotiationConfig,
    pub logging: LoggingConfig,
}

/// Server-wide representation support
///
/// Passed to negotiation when a resource declares nothing narrower.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct NegotiationConfig {
    pub supported_content_types: Vec<String>,
    pub supported_languages: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `static_rdf_negotiation=debug`
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

impl Default for NegotiationConfig {
    fn default() -> Self {
        Self {
            supported_content_types: vec!["text/turtle".to_string(), "text/html".to_string()],
            supported_languages: vec!["nb".to_string(), "nn".to_string(), "en".to_string()],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
