//! Language negotiation against the `Accept-Language` preference list

use super::{negotiate, parse_preferences, TokenMatcher};
use crate::error::NegotiationError;

/// Language-tag comparison: `*` < one tag extends the other < identical tag
///
/// Sibling regions (`en-US` against `en-GB`) do not match.
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageTagMatcher;

/// True if `longer` is `shorter` followed by further subtags
fn extends(longer: &str, shorter: &str) -> bool {
    longer
        .strip_prefix(shorter)
        .is_some_and(|rest| rest.starts_with(['-', '_']))
}

impl TokenMatcher for LanguageTagMatcher {
    fn specificity(&self, range: &str, candidate: &str) -> Option<u8> {
        if range == "*" {
            return Some(0);
        }
        if range == candidate {
            return Some(2);
        }
        (extends(range, candidate) || extends(candidate, range)).then_some(1)
    }
}

/// Choose the best supported language for an `Accept-Language` list
pub fn negotiate_language<'a, S, T>(
    accept_language: &[S],
    supported: &'a [T],
) -> Result<&'a str, NegotiationError>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let preferences = parse_preferences(accept_language);
    negotiate(&LanguageTagMatcher, &preferences, supported).ok_or_else(|| {
        NegotiationError::NoAgreeableLanguage {
            preferences: accept_language
                .iter()
                .map(|s| s.as_ref().to_string())
                .collect(),
        }
    })
}
