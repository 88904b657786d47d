//! Content-type to storage extension table
//!
//! Representations are stored on disk under the suffix for their content-type.

/// Storage extension for a negotiated content-type
///
/// Parameters such as `charset` are ignored. Unknown types yield `None`.
///
/// # Examples
/// ```
/// use static_rdf_negotiation::http::mime::extension_for_content_type;
/// assert_eq!(extension_for_content_type("text/turtle"), Some("ttl"));
/// assert_eq!(extension_for_content_type("text/html; charset=utf-8"), Some("html"));
/// assert_eq!(extension_for_content_type("application/json"), None);
/// ```
pub fn extension_for_content_type(content_type: &str) -> Option<&'static str> {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.as_str() {
        // RDF
        "text/turtle" => Some("ttl"),

        // Text
        "text/html" => Some("html"),

        // Documents
        "application/pdf" => Some("pdf"),

        // Images
        "image/png" => Some("png"),

        _ => None,
    }
}
