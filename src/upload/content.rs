//! Uploaded file content validation
//!
//! Only Turtle is structurally checked. Other formats are stored as-is.

use crate::error::ValidationError;
use crate::logger;
use hyper::body::Bytes;
use oxigraph::io::{RdfFormat, RdfParser};

const TURTLE_EXTENSION: &str = "ttl";

/// Base for relative IRIs in uploaded documents
const BASE_IRI: &str = "http://localhost/";

/// Check that `content` really is in the format named by `extension`
///
/// Only the lowercase `ttl` extension triggers a parse.
///
/// # Examples
/// ```
/// use static_rdf_negotiation::upload::validate_file_content;
///
/// assert!(validate_file_content("ttl", b"<http://a> <http://b> <http://c> .").is_ok());
/// assert!(validate_file_content("ttl", b"not turtle at all").is_err());
/// assert!(validate_file_content("pdf", b"not a pdf either").is_ok());
/// ```
pub fn validate_file_content(extension: &str, content: &[u8]) -> Result<(), ValidationError> {
    if extension != TURTLE_EXTENSION {
        return Ok(());
    }

    let result = parse_turtle(content);
    if let Err(err) = &result {
        logger::log_invalid_file_content(extension, err);
    }
    result
}

/// Run [`validate_file_content`] on the blocking pool
///
/// Parsing large documents is CPU-bound; this keeps it off the async workers.
pub async fn validate_file_content_async(
    extension: String,
    content: Bytes,
) -> Result<(), ValidationError> {
    tokio::task::spawn_blocking(move || validate_file_content(&extension, &content))
        .await
        .map_err(|e| ValidationError::InvalidFileContent(e.to_string()))?
}

fn parse_turtle(content: &[u8]) -> Result<(), ValidationError> {
    let text = std::str::from_utf8(content).map_err(invalid)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let parser = RdfParser::from_format(RdfFormat::Turtle)
        .with_base_iri(BASE_IRI)
        .map_err(invalid)?;

    for quad in parser.for_reader(text.as_bytes()) {
        quad.map_err(invalid)?;
    }
    Ok(())
}

#[allow(clippy::needless_pass_by_value)]
fn invalid(err: impl std::fmt::Display) -> ValidationError {
    ValidationError::InvalidFileContent(err.to_string())
}
