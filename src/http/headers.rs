//! Request header extraction

use crate::config::NegotiationConfig;
use crate::error::RepresentationError;
use crate::representation::{resolve, RepresentationTriple};
use hyper::header::{HeaderMap, HeaderName, ACCEPT, ACCEPT_LANGUAGE};

/// Ordered, comma-split tokens of every value of `name`
///
/// Quality parameters stay attached to their token. Values that are not
/// visible ASCII are skipped.
fn header_tokens(headers: &HeaderMap, name: &HeaderName) -> Vec<String> {
    headers
        .get_all(name)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Tokens of the `Accept` header, empty if absent
pub fn accept_tokens(headers: &HeaderMap) -> Vec<String> {
    header_tokens(headers, &ACCEPT)
}

/// Tokens of the `Accept-Language` header, empty if absent
pub fn accept_language_tokens(headers: &HeaderMap) -> Vec<String> {
    header_tokens(headers, &ACCEPT_LANGUAGE)
}

/// Resolve the representation for a request using server-wide support lists
pub fn representation_for_headers(
    headers: &HeaderMap,
    config: &NegotiationConfig,
) -> Result<RepresentationTriple, RepresentationError> {
    resolve(
        &accept_tokens(headers),
        &config.supported_content_types,
        &accept_language_tokens(headers),
        &config.supported_languages,
    )
}
