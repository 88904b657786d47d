//! Preference-list negotiation
//!
//! One weighted matcher serves both `Accept` and `Accept-Language`. The
//! token comparison rules come from a [`TokenMatcher`] implementation.

pub mod language;
pub mod media_type;

pub use language::{negotiate_language, LanguageTagMatcher};
pub use media_type::{negotiate_content_type, MediaRangeMatcher};

/// A single client preference with its quality weight
#[derive(Debug, Clone, PartialEq)]
pub struct Preference {
    /// Lowercased range with parameters stripped, e.g. `text/*` or `en-us`
    pub value: String,
    /// Quality weight in `[0, 1]`, `0` meaning "not acceptable"
    pub quality: f32,
}

impl Preference {
    /// Parse a token such as `text/html;level=1;q=0.8`
    ///
    /// Returns `None` for an empty token or an unparsable `q`.
    ///
    /// # Examples
    /// ```
    /// use static_rdf_negotiation::negotiation::Preference;
    ///
    /// let pref = Preference::parse("Text/Turtle; q=0.5").unwrap();
    /// assert_eq!(pref.value, "text/turtle");
    /// assert_eq!(pref.quality, 0.5);
    /// assert!(Preference::parse("text/html;q=high").is_none());
    /// ```
    pub fn parse(token: &str) -> Option<Self> {
        let mut parts = token.split(';');
        let value = parts.next()?.trim();
        if value.is_empty() {
            return None;
        }

        let mut quality = 1.0;
        for param in parts {
            let Some((key, raw)) = param.split_once('=') else {
                continue;
            };
            if key.trim().eq_ignore_ascii_case("q") {
                let q = raw.trim().parse::<f32>().ok().filter(|q| q.is_finite())?;
                quality = q.clamp(0.0, 1.0);
            }
        }

        Some(Self {
            value: value.to_ascii_lowercase(),
            quality,
        })
    }
}

/// Token comparison rules for one negotiation dimension
pub trait TokenMatcher {
    /// How specifically `range` covers `candidate`, higher is more specific.
    /// `None` means no match. Both arguments arrive lowercased.
    fn specificity(&self, range: &str, candidate: &str) -> Option<u8>;
}

/// Parse an ordered list of header tokens, tolerating comma-joined entries
pub fn parse_preferences<S: AsRef<str>>(tokens: &[S]) -> Vec<Preference> {
    tokens
        .iter()
        .flat_map(|token| token.as_ref().split(','))
        .filter_map(Preference::parse)
        .collect()
}

/// Pick the supported token ranked highest by `preferences`
///
/// Each candidate takes the weight of its most specific matching preference,
/// the highest `q` among equally specific ones.
/// Ties go to the candidate listed first in `supported`.
pub fn negotiate<'a, M, S>(
    matcher: &M,
    preferences: &[Preference],
    supported: &'a [S],
) -> Option<&'a str>
where
    M: TokenMatcher + ?Sized,
    S: AsRef<str>,
{
    let mut best: Option<(&'a str, f32)> = None;

    for candidate in supported {
        let candidate = candidate.as_ref();
        let Some(quality) = weight(matcher, preferences, &candidate.to_ascii_lowercase()) else {
            continue;
        };
        if quality <= 0.0 {
            continue;
        }
        match best {
            Some((_, best_quality)) if best_quality >= quality => {}
            _ => best = Some((candidate, quality)),
        }
    }

    best.map(|(candidate, _)| candidate)
}

fn weight<M>(matcher: &M, preferences: &[Preference], candidate: &str) -> Option<f32>
where
    M: TokenMatcher + ?Sized,
{
    let mut best: Option<(u8, f32)> = None;
    for pref in preferences {
        let Some(specificity) = matcher.specificity(&pref.value, candidate) else {
            continue;
        };
        match best {
            Some((best_specificity, best_quality))
                if best_specificity > specificity
                    || (best_specificity == specificity && best_quality >= pref.quality) => {}
            _ => best = Some((specificity, pref.quality)),
        }
    }
    best.map(|(_, quality)| quality)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ExactMatcher;

    impl TokenMatcher for ExactMatcher {
        fn specificity(&self, range: &str, candidate: &str) -> Option<u8> {
            (range == candidate).then_some(1)
        }
    }

    #[test]
    fn test_parse_default_quality() {
        let pref = Preference::parse(" text/html ").unwrap();
        assert_eq!(pref.value, "text/html");
        assert!((pref.quality - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_parse_clamps_quality() {
        let pref = Preference::parse("en;q=3").unwrap();
        assert!((pref.quality - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(Preference::parse("").is_none());
        assert!(Preference::parse(" ;q=0.5").is_none());
    }

    #[test]
    fn test_parse_preferences_splits_commas() {
        let prefs = parse_preferences(&["a, b;q=0.2", "c"]);
        let values: Vec<_> = prefs.iter().map(|p| p.value.as_str()).collect();
        assert_eq!(values, ["a", "b", "c"]);
    }

    #[test]
    fn test_highest_quality_wins() {
        let prefs = parse_preferences(&["a;q=0.2", "b;q=0.9"]);
        assert_eq!(negotiate(&ExactMatcher, &prefs, &["a", "b"]), Some("b"));
    }

    #[test]
    fn test_tie_goes_to_first_supported() {
        let prefs = parse_preferences(&["b", "a"]);
        assert_eq!(negotiate(&ExactMatcher, &prefs, &["a", "b"]), Some("a"));
    }

    #[test]
    fn test_repeated_range_takes_highest_quality() {
        let prefs = parse_preferences(&["a;q=0.1", "b;q=0.5", "a"]);
        assert_eq!(negotiate(&ExactMatcher, &prefs, &["b", "a"]), Some("a"));
    }

    #[test]
    fn test_zero_quality_excludes() {
        let prefs = parse_preferences(&["a;q=0"]);
        assert_eq!(negotiate(&ExactMatcher, &prefs, &["a"]), None);
    }

    #[test]
    fn test_returns_supported_spelling() {
        let prefs = parse_preferences(&["a"]);
        assert_eq!(negotiate(&ExactMatcher, &prefs, &["A"]), Some("A"));
    }
}
