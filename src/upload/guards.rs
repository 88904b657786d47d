//! Format whitelists
//!
//! Static membership checks, independent of any negotiated value.

const SUPPORTED_EXTENSIONS: [&str; 4] = ["ttl", "html", "png", "pdf"];

const SUPPORTED_CONTENT_TYPES: [&str; 4] =
    ["text/turtle", "text/html", "application/pdf", "image/png"];

/// True if the server stores files with this extension (case-insensitive)
pub fn is_valid_extension(extension: &str) -> bool {
    let extension = extension.to_ascii_lowercase();
    SUPPORTED_EXTENSIONS.contains(&extension.as_str())
}

/// True if the server accepts this content-type (case-insensitive, no parameters)
pub fn is_valid_content_type(content_type: &str) -> bool {
    let content_type = content_type.to_ascii_lowercase();
    SUPPORTED_CONTENT_TYPES.contains(&content_type.as_str())
}
