//! Content-type negotiation against the `Accept` preference list

use super::{negotiate, parse_preferences, TokenMatcher};
use crate::error::NegotiationError;

/// Media-range comparison: `*/*` < `type/*` < `type/subtype`
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaRangeMatcher;

impl TokenMatcher for MediaRangeMatcher {
    fn specificity(&self, range: &str, candidate: &str) -> Option<u8> {
        let essence = candidate.split(';').next().unwrap_or_default().trim();
        let (candidate_type, candidate_subtype) = essence.split_once('/')?;

        if range == "*" || range == "*/*" {
            return Some(0);
        }

        let (range_type, range_subtype) = range.split_once('/')?;
        if range_type != candidate_type {
            return None;
        }
        if range_subtype == "*" {
            return Some(1);
        }
        (range_subtype == candidate_subtype).then_some(2)
    }
}

/// Choose the best supported content-type for an `Accept` list
///
/// # Examples
/// ```
/// use static_rdf_negotiation::negotiation::negotiate_content_type;
///
/// let supported = ["text/turtle", "text/html"];
/// assert_eq!(negotiate_content_type(&["text/*;q=0.5", "text/html"], &supported), Ok("text/html"));
/// assert!(negotiate_content_type(&["application/json"], &supported).is_err());
/// ```
pub fn negotiate_content_type<'a, S, T>(
    accept: &[S],
    supported: &'a [T],
) -> Result<&'a str, NegotiationError>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let preferences = parse_preferences(accept);
    negotiate(&MediaRangeMatcher, &preferences, supported).ok_or_else(|| {
        NegotiationError::NoAgreeableContentType {
            preferences: accept.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    })
}
