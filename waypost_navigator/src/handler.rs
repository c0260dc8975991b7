// Copyright 2026 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handler entities: what a pattern maps to.
//!
//! Both kinds receive the same inputs, the requested URL string and the
//! placeholder bindings of the winning match; they differ only in outcome.
//! Modeled as a tagged variant rather than a trait hierarchy because there
//! are exactly two kinds and dispatch sites want to know which they hit.

use waypost_matcher::Bindings;

/// Builds a destination value from a matched URL, or declines with `None`.
pub type FactoryFn<T> = Box<dyn Fn(&str, &Bindings) -> Option<T>>;

/// Performs a side effect for a matched URL; `true` means it was consumed.
pub type OpenHandlerFn = Box<dyn Fn(&str, &Bindings) -> bool>;

/// A registered target for one pattern.
pub enum Handler<T> {
    /// A constructible destination factory.
    Factory(FactoryFn<T>),
    /// A callable open handler.
    Open(OpenHandlerFn),
}

impl<T> Handler<T> {
    /// Whether this entity is a destination factory.
    pub fn is_factory(&self) -> bool {
        matches!(self, Self::Factory(_))
    }

    /// Whether this entity is an open handler.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}

impl<T> core::fmt::Debug for Handler<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Factory(_) => "Handler::Factory",
            Self::Open(_) => "Handler::Open",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_predicates() {
        let factory: Handler<u32> = Handler::Factory(Box::new(|_, _| Some(1)));
        let open: Handler<u32> = Handler::Open(Box::new(|_, _| true));
        assert!(factory.is_factory() && !factory.is_open());
        assert!(open.is_open() && !open.is_factory());
    }
}
