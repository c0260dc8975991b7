// Copyright 2026 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! URL-like values.
//!
//! The engine accepts anything that can produce a canonical URL string. That
//! string is the *sole* input to normalization and matching; no structured
//! metadata is ever consulted. [`UrlConvertible`] also derives a
//! query-parameter view for callers, but queries are stripped before
//! matching and never become route parameters.

use std::borrow::Cow;

use hashbrown::HashMap;

/// A value with a canonical URL string representation.
///
/// Implemented for `str` and `String`; implement it for your own URL types
/// to pass them to the matcher directly.
///
/// ```rust
/// use waypost_matcher::UrlConvertible;
///
/// let url = "myapp://user/1?from=push&tab=posts";
/// assert_eq!(url.query_parameters()["from"], "push");
/// assert_eq!(url.query_pairs()[1], ("tab".into(), "posts".into()));
/// ```
pub trait UrlConvertible {
    /// The canonical URL string for this value.
    fn url_string(&self) -> Cow<'_, str>;

    /// Whether this value can be interpreted as a URL at all.
    ///
    /// Mirrors the permissive platform-parser notion of URL-ness: any
    /// non-empty string without whitespace or control characters qualifies,
    /// including bare paths like `/user/1`. Values that fail this check pass
    /// through normalization untouched and match nothing.
    fn has_url_form(&self) -> bool {
        let s = self.url_string();
        !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c.is_control())
    }

    /// The query pairs in order of appearance, duplicates preserved.
    ///
    /// Pairs without an `=` are skipped. Values have `+` decoded to a space
    /// and `%XX` escapes resolved; keys are taken verbatim.
    fn query_pairs(&self) -> Vec<(String, String)> {
        let url = self.url_string();
        let Some(query) = query_of(&url) else {
            return Vec::new();
        };
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .map(|(key, value)| {
                (
                    key.to_owned(),
                    percent_decode(&value.replace('+', " ")),
                )
            })
            .collect()
    }

    /// The query pairs as a map. The last occurrence of a duplicate key wins.
    fn query_parameters(&self) -> HashMap<String, String> {
        self.query_pairs().into_iter().collect()
    }
}

impl UrlConvertible for str {
    fn url_string(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl UrlConvertible for String {
    fn url_string(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

/// The raw query portion of `url`: after the first `?`, before any `#`.
fn query_of(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once('?')?;
    Some(match rest.split_once('#') {
        Some((query, _)) => query,
        None => rest,
    })
}

/// Resolve `%XX` escapes; malformed escapes are kept verbatim.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let decoded = (bytes[i] == b'%' && i + 2 < bytes.len())
            .then(|| hex_pair(bytes[i + 1], bytes[i + 2]))
            .flatten();
        match decoded {
            Some(byte) => {
                out.push(byte);
                i += 3;
            }
            None => {
                out.push(bytes[i]);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_pair(hi: u8, lo: u8) -> Option<u8> {
    let hi = (hi as char).to_digit(16)?;
    let lo = (lo as char).to_digit(16)?;
    u8::try_from(hi * 16 + lo).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_form_rejects_whitespace_and_empty() {
        assert!("myapp://user/1".has_url_form());
        assert!("/user/1".has_url_form());
        assert!(!"".has_url_form());
        assert!(!"not a url".has_url_form());
        assert!(!"tab\there".has_url_form());
    }

    #[test]
    fn query_pairs_keep_order_and_duplicates() {
        let pairs = "myapp://list?tag=a&tag=b&page=2".query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("tag".to_owned(), "a".to_owned()),
                ("tag".to_owned(), "b".to_owned()),
                ("page".to_owned(), "2".to_owned()),
            ]
        );
    }

    #[test]
    fn query_parameters_last_duplicate_wins() {
        let params = "myapp://list?tag=a&tag=b".query_parameters();
        assert_eq!(params["tag"], "b");
    }

    #[test]
    fn pairs_without_equals_are_skipped() {
        let pairs = "myapp://x?flag&k=v".query_pairs();
        assert_eq!(pairs, vec![("k".to_owned(), "v".to_owned())]);
    }

    #[test]
    fn values_are_decoded() {
        let params = "myapp://x?q=hello+world&name=Jo%C3%A3o".query_parameters();
        assert_eq!(params["q"], "hello world");
        assert_eq!(params["name"], "João");
    }

    #[test]
    fn fragment_is_not_part_of_the_query() {
        let params = "myapp://x?k=v#frag=nope".query_parameters();
        assert_eq!(params.len(), 1);
        assert_eq!(params["k"], "v");
    }

    #[test]
    fn no_query_means_no_pairs() {
        assert!("myapp://x".query_pairs().is_empty());
        assert!("myapp://x#only=fragment".query_parameters().is_empty());
    }

    #[test]
    fn malformed_escapes_pass_through() {
        let params = "myapp://x?k=100%".query_parameters();
        assert_eq!(params["k"], "100%");
        let params = "myapp://x?k=%zz".query_parameters();
        assert_eq!(params["k"], "%zz");
    }
}
