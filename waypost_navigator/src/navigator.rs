// Copyright 2026 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The navigator facade: one registry, one matcher, dispatch.
//!
//! [`Navigator`] wires the pieces together. Registration normalizes the
//! pattern through the matcher before storing it, so the key under which a
//! pattern is stored is exactly the string the matcher later reports as the
//! winning pattern — a successful match always finds its handler.
//!
//! The navigator can carry a default scheme, applied both when registering
//! patterns and when matching URLs. This lets an app register bare paths
//! once and route both `"/user/1"` and `"myapp://user/1"`:
//!
//! ```rust
//! use waypost_navigator::Navigator;
//!
//! let mut navigator = Navigator::with_scheme("myapp");
//! navigator.register("/user/<int:id>", |_url, values| values["id"].as_int());
//!
//! assert_eq!(navigator.build("/user/42"), Some(42));
//! assert_eq!(navigator.build("myapp://user/42"), Some(42));
//! ```

use waypost_matcher::{Bindings, UrlConvertible, UrlMatch, UrlMatcher};

use crate::handler::Handler;
use crate::registry::Registry;

/// A matched URL resolved against the registry.
#[derive(Debug)]
pub struct Resolved<'a, T> {
    /// The handler entity registered under the winning pattern.
    pub handler: &'a Handler<T>,
    /// The winning pattern and its extracted values.
    pub url_match: UrlMatch,
}

/// Maps URLs to registered handlers.
///
/// `T` is the caller-chosen destination type produced by factories. See the
/// [crate docs](crate) for the registration/dispatch model and the
/// threading contract.
pub struct Navigator<T> {
    matcher: UrlMatcher,
    registry: Registry<T>,
    scheme: Option<String>,
}

impl<T> Default for Navigator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Navigator<T> {
    /// Create a navigator with no default scheme.
    pub fn new() -> Self {
        Self {
            matcher: UrlMatcher::new(),
            registry: Registry::new(),
            scheme: None,
        }
    }

    /// Create a navigator whose scheme is injected into schemeless patterns
    /// and URLs.
    pub fn with_scheme(scheme: impl Into<String>) -> Self {
        Self {
            scheme: Some(scheme.into()),
            ..Self::new()
        }
    }

    /// The underlying matcher.
    pub fn matcher(&self) -> &UrlMatcher {
        &self.matcher
    }

    /// Mutable access to the matcher, e.g. to configure strict scheme
    /// validation.
    pub fn matcher_mut(&mut self) -> &mut UrlMatcher {
        &mut self.matcher
    }

    /// The registry, e.g. to enumerate registered patterns.
    pub fn registry(&self) -> &Registry<T> {
        &self.registry
    }

    /// Register a destination factory under `pattern`.
    ///
    /// The factory receives the requested URL string and the match bindings
    /// and may decline by returning `None`. Registering the same canonical
    /// pattern again replaces the previous entity.
    pub fn register<F>(&mut self, pattern: &str, factory: F)
    where
        F: Fn(&str, &Bindings) -> Option<T> + 'static,
    {
        self.insert(pattern, Handler::Factory(Box::new(factory)));
    }

    /// Register an open handler under `pattern`.
    ///
    /// The handler receives the requested URL string and the match bindings
    /// and returns whether it consumed the URL.
    pub fn handle<F>(&mut self, pattern: &str, handler: F)
    where
        F: Fn(&str, &Bindings) -> bool + 'static,
    {
        self.insert(pattern, Handler::Open(Box::new(handler)));
    }

    fn insert(&mut self, pattern: &str, handler: Handler<T>) {
        let canonical = self.matcher.normalize(pattern, self.scheme.as_deref());
        self.registry.insert(canonical, handler);
    }

    /// Match `url` against the registered patterns, in registration order.
    ///
    /// Returns the handler entity and the match result without invoking
    /// anything; [`build`](Self::build) and [`open`](Self::open) are the
    /// invoking conveniences.
    pub fn resolve<U>(&self, url: &U) -> Option<Resolved<'_, T>>
    where
        U: UrlConvertible + ?Sized,
    {
        let url_match = self
            .matcher
            .match_url(url, self.scheme.as_deref(), self.registry.keys())?;
        let handler = self.registry.lookup(&url_match.pattern)?;
        Some(Resolved { handler, url_match })
    }

    /// Build a destination for `url` via its matched factory.
    ///
    /// `None` when no pattern matches, when the matched entity is an open
    /// handler, or when the factory declines.
    pub fn build<U>(&self, url: &U) -> Option<T>
    where
        U: UrlConvertible + ?Sized,
    {
        let resolved = self.resolve(url)?;
        match resolved.handler {
            Handler::Factory(factory) => factory(&url.url_string(), &resolved.url_match.values),
            Handler::Open(_) => None,
        }
    }

    /// Invoke the open handler matched by `url`.
    ///
    /// `false` when no pattern matches, when the matched entity is a
    /// factory, or when the handler declines.
    pub fn open<U>(&self, url: &U) -> bool
    where
        U: UrlConvertible + ?Sized,
    {
        let Some(resolved) = self.resolve(url) else {
            return false;
        };
        match resolved.handler {
            Handler::Open(handler) => handler(&url.url_string(), &resolved.url_match.values),
            Handler::Factory(_) => false,
        }
    }
}

impl<T> core::fmt::Debug for Navigator<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Navigator")
            .field("scheme", &self.scheme)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
