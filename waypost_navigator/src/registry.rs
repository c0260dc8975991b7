// Copyright 2026 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The insertion-ordered route registry.
//!
//! Patterns are stored under their canonical (normalized) form; the
//! [`Navigator`](crate::Navigator) normalizes before inserting, so a lookup
//! with a matched pattern always hits. Keys enumerate in insertion order,
//! which is what makes first-registered-first-tried a real contract instead
//! of map-iteration luck. Two raw patterns that normalize identically
//! collide: the handler is replaced in place and the original position is
//! kept.

use hashbrown::HashMap;

use crate::handler::Handler;

/// Ordered mapping from canonical pattern string to handler entity.
pub struct Registry<T> {
    /// Patterns in insertion order.
    order: Vec<String>,
    handlers: HashMap<String, Handler<T>>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Registry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            handlers: HashMap::new(),
        }
    }

    /// Insert a handler under an already-canonical pattern.
    ///
    /// A fresh pattern is appended to the iteration order; a colliding one
    /// keeps its position and only the handler changes.
    pub fn insert(&mut self, pattern: String, handler: Handler<T>) {
        if self.handlers.insert(pattern.clone(), handler).is_none() {
            self.order.push(pattern);
        }
    }

    /// The registered patterns, first registered first.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// The handler registered under `pattern`, if any.
    pub fn lookup(&self, pattern: &str) -> Option<&Handler<T>> {
        self.handlers.get(pattern)
    }

    /// The number of registered patterns.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<T> core::fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Registry")
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}
