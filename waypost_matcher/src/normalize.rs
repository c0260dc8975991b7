// Copyright 2026 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! URL canonicalization.
//!
//! Matching compares path components of a *canonical* URL string, produced
//! here in four passes over the scheme-injected input:
//!
//! 1. strip everything from the first `?`, then from the first `#`;
//! 2. collapse three-or-more slashes right after the scheme colon
//!    (`:///…` → `://`);
//! 3. collapse any other run of two-or-more slashes to a single `/`;
//! 4. trim trailing slashes.
//!
//! The passes are idempotent: canonicalizing a canonical string is a no-op.
//! The strictness policy around missing schemes lives on
//! [`UrlMatcher`](crate::UrlMatcher), which drives this module.

use std::borrow::Cow;

use crate::replace::replace;

/// Prefix `url` with `scheme` unless it already carries one.
///
/// A URL containing `://` is returned unchanged, as is any URL when no
/// scheme is supplied. Otherwise the result is `scheme` + `:/` + `url`,
/// which yields the expected `scheme://…` exactly when `url` starts with a
/// slash. An empty scheme intentionally produces a leading `://`; this
/// long-standing quirk is kept verbatim because registered patterns may
/// rely on it.
///
/// ```rust
/// use waypost_matcher::with_scheme;
///
/// assert_eq!(with_scheme(None, "myapp://user/1"), "myapp://user/1");
/// assert_eq!(with_scheme(Some("myapp"), "/user/1"), "myapp://user/1");
/// assert_eq!(with_scheme(Some(""), "/user/1"), "://user/1");
/// ```
pub fn with_scheme<'a>(scheme: Option<&str>, url: &'a str) -> Cow<'a, str> {
    match scheme {
        Some(scheme) if !url.contains("://") => Cow::Owned(format!("{scheme}:/{url}")),
        _ => Cow::Borrowed(url),
    }
}

/// Run the canonicalization passes on a scheme-injected URL string.
pub(crate) fn canonicalize(url: &str) -> String {
    let url = match url.find('?') {
        Some(i) => &url[..i],
        None => url,
    };
    let url = match url.find('#') {
        Some(i) => &url[..i],
        None => url,
    };
    let url = replace(":/{3,}", "://", url);
    // The reference pass is `(?<!:)/{2,}`; regex has no look-behind, so the
    // non-colon prefix is captured and re-emitted instead.
    let url = replace("([^:]|^)/{2,}", "${1}/", &url);
    replace("/+$", "", &url)
}
