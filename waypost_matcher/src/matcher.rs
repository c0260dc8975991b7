// Copyright 2026 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Candidate iteration and component-by-component matching.
//!
//! ## Algorithm
//!
//! - Canonicalize the input URL and split it on `/` (empty components are
//!   kept; index 0 of a schemed URL holds the scheme token, e.g. `"myapp:"`).
//! - Walk the candidate patterns *in the order given*. For each candidate,
//!   split it the same way and compare component by component: placeholders
//!   bind values, everything else must compare equal verbatim.
//! - A `<path:…>` placeholder consumes every remaining input component and
//!   ends the comparison; pattern text after it is dead. Patterns without a
//!   path placeholder must have exactly as many components as the input.
//! - The first candidate that survives the walk wins. There is no
//!   backtracking and no notion of a better match.
//!
//! Candidate order is the caller's contract. `waypost_navigator` feeds the
//! matcher its registry keys in insertion order, which makes "first
//! registered, first tried" a guarantee rather than an accident of map
//! iteration.

use smallvec::SmallVec;

use crate::normalize::{canonicalize, with_scheme};
use crate::placeholder::{self, Bindings, PATH_PREFIX};
use crate::url::UrlConvertible;

type Components<'a> = SmallVec<[&'a str; 8]>;

/// A successful match: the winning pattern and its extracted values.
///
/// Built fresh per [`UrlMatcher::match_url`] call and intended to be
/// consumed immediately; nothing is cached.
#[derive(Clone, Debug, PartialEq)]
pub struct UrlMatch {
    /// The candidate pattern that matched, exactly as supplied.
    pub pattern: String,
    /// Placeholder keys mapped to their typed values.
    pub values: Bindings,
}

/// The pattern matching engine.
///
/// Stateless apart from one policy knob: strict scheme validation. Both
/// [`normalize`](Self::normalize) and [`match_url`](Self::match_url) are
/// deterministic functions of their arguments and that flag.
///
/// ```rust
/// use waypost_matcher::UrlMatcher;
///
/// let matcher = UrlMatcher::new();
/// let m = matcher
///     .match_url("myapp://user/1", None, ["myapp://user/<id>"])
///     .unwrap();
/// assert_eq!(m.values["id"].as_str(), Some("1"));
/// ```
#[derive(Clone, Debug)]
pub struct UrlMatcher {
    strict_scheme: bool,
}

impl Default for UrlMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlMatcher {
    /// Create a matcher. Strict scheme validation defaults to on in debug
    /// builds and off in release builds.
    pub fn new() -> Self {
        Self {
            strict_scheme: cfg!(debug_assertions),
        }
    }

    /// Set whether a URL without a scheme, matched without a fallback
    /// scheme, is a fatal contract violation.
    ///
    /// Strict mode panics on such inputs so the mistake is caught during
    /// development. With strict mode off the input passes through
    /// normalization unchanged and simply matches no schemed pattern.
    pub fn set_strict_scheme(&mut self, strict: bool) {
        self.strict_scheme = strict;
    }

    /// Canonicalize `url`, injecting `scheme` if the URL carries none.
    ///
    /// A value with no URL form at all is returned verbatim. The result is
    /// idempotent: normalizing a canonical string returns it unchanged.
    ///
    /// # Panics
    ///
    /// With strict scheme validation on, panics when `url` lacks a `://`
    /// separator and no `scheme` is supplied.
    pub fn normalize<U>(&self, url: &U, scheme: Option<&str>) -> String
    where
        U: UrlConvertible + ?Sized,
    {
        let raw = url.url_string();
        if !url.has_url_form() {
            return raw.into_owned();
        }
        let schemed = with_scheme(scheme, &raw);
        if scheme.is_none() && !schemed.contains("://") {
            assert!(
                !self.strict_scheme,
                "URL {schemed:?} has no scheme; pass one to the matcher or register schemed patterns",
            );
        }
        canonicalize(&schemed)
    }

    /// Match `url` against `candidates`, first match wins.
    ///
    /// Candidates are tried in iteration order; supply them from an ordered
    /// container if overlapping patterns must resolve deterministically.
    /// Returns `None` when no candidate matches, which is the expected
    /// outcome for unroutable URLs, not an error.
    ///
    /// # Panics
    ///
    /// As [`normalize`](Self::normalize) under strict scheme validation.
    pub fn match_url<U, C>(&self, url: &U, scheme: Option<&str>, candidates: C) -> Option<UrlMatch>
    where
        U: UrlConvertible + ?Sized,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let normalized = self.normalize(url, scheme);
        let input: Components<'_> = normalized.split('/').collect();
        for candidate in candidates {
            let pattern = candidate.as_ref();
            if let Some(values) = match_components(pattern, &input) {
                return Some(UrlMatch {
                    pattern: pattern.to_owned(),
                    values,
                });
            }
        }
        None
    }
}

/// Walk one pattern against the input components.
fn match_components(pattern: &str, input: &[&str]) -> Option<Bindings> {
    let components: Components<'_> = pattern.split('/').collect();
    let has_path_wildcard = components.iter().any(|c| c.starts_with(PATH_PREFIX));
    if !has_path_wildcard && components.len() != input.len() {
        return None;
    }
    let mut values = Bindings::new();
    for (index, &component) in components.iter().enumerate() {
        if index >= input.len() {
            return None;
        }
        match placeholder::bind(component, input, index) {
            Some((key, value)) => {
                values.insert(key, value);
                // A path placeholder swallows the rest of the input; any
                // pattern text after it is dead and never compared.
                if component.starts_with(PATH_PREFIX) {
                    break;
                }
            }
            None => {
                if component != input[index] {
                    return None;
                }
            }
        }
    }
    Some(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholder::BoundValue;

    fn strict() -> UrlMatcher {
        let mut matcher = UrlMatcher::new();
        matcher.set_strict_scheme(true);
        matcher
    }

    fn lenient() -> UrlMatcher {
        let mut matcher = UrlMatcher::new();
        matcher.set_strict_scheme(false);
        matcher
    }

    #[test]
    fn normalize_is_idempotent() {
        let matcher = strict();
        for input in [
            "myapp:///////user///<id>//hello/??/#abc=/def",
            "myapp://user/1",
            "http://google.com/search/?q=x",
        ] {
            let once = matcher.normalize(input, None);
            assert_eq!(matcher.normalize(once.as_str(), None), once);
        }
    }

    #[test]
    fn normalize_collapses_the_kitchen_sink() {
        let matcher = strict();
        assert_eq!(
            matcher.normalize("myapp:///////user///<id>//hello/??/#abc=/def", None),
            "myapp://user/<id>/hello"
        );
    }

    #[test]
    fn normalize_injects_the_scheme() {
        let matcher = strict();
        assert_eq!(matcher.normalize("/user/1", Some("myapp")), "myapp://user/1");
    }

    #[test]
    fn normalize_returns_non_urls_verbatim() {
        let matcher = strict();
        assert_eq!(matcher.normalize("not a url", None), "not a url");
        assert_eq!(matcher.normalize("", None), "");
    }

    #[test]
    #[should_panic(expected = "has no scheme")]
    fn strict_mode_rejects_schemeless_urls() {
        let _ = strict().normalize("user/1", None);
    }

    #[test]
    fn lenient_mode_passes_schemeless_urls_through() {
        let matcher = lenient();
        assert_eq!(matcher.normalize("user/1", None), "user/1");
        assert_eq!(
            matcher.match_url("user/1", None, ["myapp://user/<id>"]),
            None
        );
    }

    #[test]
    fn exact_literal_match_binds_nothing() {
        let m = strict()
            .match_url("myapp://hello", None, ["myapp://hello"])
            .unwrap();
        assert_eq!(m.pattern, "myapp://hello");
        assert!(m.values.is_empty());
    }

    #[test]
    fn untyped_placeholder_binds_a_string() {
        let m = strict()
            .match_url("myapp://user/1", None, ["myapp://user/<id>"])
            .unwrap();
        assert_eq!(m.values["id"], BoundValue::Str("1".to_owned()));
    }

    #[test]
    fn int_placeholder_binds_an_integer() {
        let m = strict()
            .match_url("myapp://user/123", None, ["myapp://user/<int:id>"])
            .unwrap();
        assert_eq!(m.values["id"], BoundValue::Int(123));
    }

    #[test]
    fn int_parse_failure_rejects_the_candidate() {
        let matcher = strict();
        assert_eq!(
            matcher.match_url("myapp://user/abc", None, ["myapp://user/<int:id>"]),
            None
        );
        // …but a later candidate can still win.
        let m = matcher
            .match_url(
                "myapp://user/abc",
                None,
                ["myapp://user/<int:id>", "myapp://user/<name>"],
            )
            .unwrap();
        assert_eq!(m.pattern, "myapp://user/<name>");
        assert_eq!(m.values["name"], BoundValue::Str("abc".to_owned()));
    }

    #[test]
    fn float_placeholder_binds_a_float() {
        let m = strict()
            .match_url("myapp://volume/0.75", None, ["myapp://volume/<float:level>"])
            .unwrap();
        assert_eq!(m.values["level"], BoundValue::Float(0.75));
    }

    #[test]
    fn first_match_wins_among_overlapping_patterns() {
        let candidates = ["myapp://user/<id>", "myapp://user/<id>/hello"];
        let m = strict()
            .match_url("myapp://user/1", None, candidates)
            .unwrap();
        assert_eq!(m.pattern, "myapp://user/<id>");
    }

    #[test]
    fn candidate_order_decides_ties() {
        let input = "myapp://user/1";
        let forward = ["myapp://user/<id>", "myapp://user/<int:id>"];
        let reverse = ["myapp://user/<int:id>", "myapp://user/<id>"];
        let matcher = strict();
        assert_eq!(
            matcher.match_url(input, None, forward).unwrap().pattern,
            "myapp://user/<id>"
        );
        assert_eq!(
            matcher.match_url(input, None, reverse).unwrap().pattern,
            "myapp://user/<int:id>"
        );
    }

    #[test]
    fn path_wildcard_is_greedy() {
        let m = strict()
            .match_url("http://google.com/search/?q=x", None, ["http://<path:url>"])
            .unwrap();
        assert_eq!(
            m.values["url"],
            BoundValue::Str("google.com/search".to_owned())
        );
    }

    #[test]
    fn pattern_text_after_a_path_wildcard_is_dead() {
        let matcher = strict();
        let candidates = ["myapp://<path:rest>/ignored"];
        let m = matcher.match_url("myapp://a/b/c", None, candidates).unwrap();
        assert_eq!(m.values["rest"], BoundValue::Str("a/b/c".to_owned()));
        // Even input shorter than the pattern matches once the wildcard binds.
        let m = matcher.match_url("myapp://a", None, candidates).unwrap();
        assert_eq!(m.values["rest"], BoundValue::Str("a".to_owned()));
    }

    #[test]
    fn query_and_fragment_never_reach_bindings() {
        let m = strict()
            .match_url(
                "myapp://user/1?from=push#section",
                None,
                ["myapp://user/<id>"],
            )
            .unwrap();
        assert_eq!(m.values["id"], BoundValue::Str("1".to_owned()));
    }

    #[test]
    fn component_count_must_agree_without_a_wildcard() {
        let matcher = strict();
        assert_eq!(
            matcher.match_url("myapp://user/1/extra", None, ["myapp://user/<id>"]),
            None
        );
        assert_eq!(
            matcher.match_url("myapp://user", None, ["myapp://user/<id>"]),
            None
        );
    }

    #[test]
    fn literal_mismatch_is_no_match() {
        assert_eq!(
            strict().match_url("myapp://admin/1", None, ["myapp://user/<id>"]),
            None
        );
    }

    #[test]
    fn empty_candidate_list_is_no_match() {
        let none: [&str; 0] = [];
        assert_eq!(strict().match_url("myapp://user/1", None, none), None);
    }

    #[test]
    fn malformed_placeholder_never_matches() {
        let matcher = strict();
        assert_eq!(
            matcher.match_url("myapp://user/1", None, ["myapp://user/<>"]),
            None
        );
    }

    #[test]
    fn scheme_parameter_routes_bare_paths() {
        let m = strict()
            .match_url("/user/7", Some("myapp"), ["myapp://user/<int:id>"])
            .unwrap();
        assert_eq!(m.values["id"], BoundValue::Int(7));
    }
}
