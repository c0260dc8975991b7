// Copyright 2026 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-pass regex search/replace used by the normalizer.
//!
//! The normalizer drives this with a handful of fixed, trusted patterns, so
//! a pattern that fails to compile degrades to a no-op instead of surfacing
//! an error. Do not reuse this for untrusted patterns; the silent fallback
//! would mask the failure.

use regex::Regex;

/// Replace every non-overlapping match of `pattern` in `subject`.
///
/// Returns `subject` unchanged when `pattern` does not compile.
pub(crate) fn replace(pattern: &str, replacement: &str, subject: &str) -> String {
    match Regex::new(pattern) {
        Ok(re) => re.replace_all(subject, replacement).into_owned(),
        Err(_) => subject.to_owned(),
    }
}
