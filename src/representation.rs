//! Representation resolution
//!
//! Combines content-type and language negotiation into the triple the serving
//! layer uses to pick a stored file and set response headers.
//!
//! The two negotiations fail differently. An unsatisfiable `Accept` list is an
//! error for the caller, while an unsatisfiable `Accept-Language` list falls
//! back to [`DEFAULT_LANGUAGE`].

use crate::error::RepresentationError;
use crate::http::mime;
use crate::logger;
use crate::negotiation::{negotiate_content_type, negotiate_language};

/// Content-type assumed when the request carries no `Accept` tokens
pub const DEFAULT_CONTENT_TYPE: &str = "text/html";

/// Extension matching [`DEFAULT_CONTENT_TYPE`]
pub const DEFAULT_EXTENSION: &str = "html";

/// Language served when none of the requested languages is available
pub const DEFAULT_LANGUAGE: &str = "nb";

const TURTLE: &str = "text/turtle";

/// Resolved (content-type, content-language, extension)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepresentationTriple {
    pub content_type: String,
    /// Empty when not applicable, i.e. for every type except HTML or when no
    /// `Accept-Language` tokens were sent
    pub content_language: String,
    pub extension: String,
}

impl Default for RepresentationTriple {
    fn default() -> Self {
        Self {
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            content_language: String::new(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl RepresentationTriple {
    pub fn is_html(&self) -> bool {
        self.content_type.eq_ignore_ascii_case(DEFAULT_CONTENT_TYPE)
    }
}

/// Storage extension for a negotiated content-type
fn extension_for(content_type: &str) -> String {
    if content_type.eq_ignore_ascii_case(TURTLE) {
        return "ttl".to_string();
    }
    if content_type.eq_ignore_ascii_case(DEFAULT_CONTENT_TYPE) {
        return DEFAULT_EXTENSION.to_string();
    }
    mime::extension_for_content_type(content_type)
        .unwrap_or_default()
        .to_string()
}

/// Resolve the representation to serve for one request
///
/// # Examples
/// ```
/// use static_rdf_negotiation::representation::resolve;
///
/// let none: [&str; 0] = [];
/// let triple = resolve(&["text/turtle"], &["text/turtle", "text/html"], &none, &["nb"]).unwrap();
/// assert_eq!(triple.content_type, "text/turtle");
/// assert_eq!(triple.content_language, "");
/// assert_eq!(triple.extension, "ttl");
/// ```
pub fn resolve<A, T, L, S>(
    accept: &[A],
    supported_types: &[T],
    accept_language: &[L],
    supported_languages: &[S],
) -> Result<RepresentationTriple, RepresentationError>
where
    A: AsRef<str>,
    T: AsRef<str>,
    L: AsRef<str>,
    S: AsRef<str>,
{
    let mut triple = RepresentationTriple::default();

    if !accept.is_empty() {
        let content_type = negotiate_content_type(accept, supported_types).map_err(|source| {
            let accept: Vec<String> = accept.iter().map(|s| s.as_ref().to_string()).collect();
            logger::log_content_type_rejected(&accept);
            RepresentationError::ContentTypeNotSupported { accept, source }
        })?;
        triple.extension = extension_for(content_type);
        triple.content_type = content_type.to_string();
    }

    if triple.is_html() && !accept_language.is_empty() {
        triple.content_language = match negotiate_language(accept_language, supported_languages) {
            Ok(language) => language.to_string(),
            Err(err) => {
                logger::log_language_fallback(&err, DEFAULT_LANGUAGE);
                DEFAULT_LANGUAGE.to_string()
            }
        };
    }

    Ok(triple)
}
