// Copyright 2026 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waypost Matcher: a URL pattern matching engine.
//!
//! This crate maps URL-like strings onto templated patterns with typed
//! placeholders, such as `myapp://user/<int:id>`. It is the pure core of the
//! Waypost workspace: every operation is a deterministic function over its
//! inputs, with no registry, no I/O, and no global state. The registry and
//! dispatch layer lives in `waypost_navigator`.
//!
//! - Normalize raw URL strings into a canonical form (scheme injection,
//!   query/fragment stripping, slash collapsing, trailing-slash trimming).
//! - Compare the canonical path components against candidate patterns,
//!   component by component.
//! - Extract placeholder values, coerced to their declared type (`string`,
//!   `int`, `float`, or the greedy `path`).
//! - Select the first matching pattern from an ordered candidate list.
//!
//! ## Pattern grammar
//!
//! A pattern is a `/`-delimited sequence of components. A component is either
//! a literal, matched verbatim, or a placeholder written `<type:key>` or
//! `<key>` (the type defaults to `string`). The supported types are:
//!
//! | Type | Bound value | Failure mode |
//! |---|---|---|
//! | `string` | the raw component | never fails |
//! | `int` | `i64` | non-integer component rejects the pattern |
//! | `float` | `f64` | non-numeric component rejects the pattern |
//! | `path` | all remaining components rejoined with `/` | never fails |
//!
//! ## Minimal example
//!
//! ```rust
//! use waypost_matcher::{BoundValue, UrlMatcher};
//!
//! let matcher = UrlMatcher::new();
//! let candidates = ["myapp://user/<int:id>", "myapp://user/<int:id>/<action>"];
//!
//! let m = matcher
//!     .match_url("myapp://user/27/follow", None, candidates)
//!     .unwrap();
//! assert_eq!(m.pattern, "myapp://user/<int:id>/<action>");
//! assert_eq!(m.values["id"], BoundValue::Int(27));
//! assert_eq!(m.values["action"], BoundValue::Str("follow".into()));
//!
//! // Queries and fragments are stripped before matching and never bind.
//! let m = matcher
//!     .match_url("myapp://user/3?from=push#top", None, candidates)
//!     .unwrap();
//! assert_eq!(m.pattern, "myapp://user/<int:id>");
//! ```
//!
//! ## Scheme injection
//!
//! Bare paths can be matched against schemed patterns by supplying a scheme:
//!
//! ```rust
//! use waypost_matcher::UrlMatcher;
//!
//! let matcher = UrlMatcher::new();
//! assert_eq!(matcher.normalize("/user/1", Some("myapp")), "myapp://user/1");
//! ```
//!
//! Without a scheme on either the URL or the call, strict validation (on by
//! default in debug builds) treats the input as a programmer error; see
//! [`UrlMatcher::set_strict_scheme`].

mod matcher;
mod normalize;
mod placeholder;
mod replace;
mod url;

pub use matcher::{UrlMatch, UrlMatcher};
pub use normalize::with_scheme;
pub use placeholder::{Bindings, BoundValue};
pub use url::UrlConvertible;
