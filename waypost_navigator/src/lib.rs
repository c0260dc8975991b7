// Copyright 2026 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waypost Navigator: route registration and dispatch.
//!
//! This crate owns the mutable half of Waypost: an insertion-ordered
//! registry from canonical pattern strings to handler entities, and a
//! [`Navigator`] facade that matches incoming URLs against the registry via
//! [`waypost_matcher`] and invokes the winning handler.
//!
//! Two kinds of handler can be registered:
//!
//! - a **factory** ([`Navigator::register`]) that builds a destination value
//!   of your choosing from the matched URL and its bindings, and
//! - an **open handler** ([`Navigator::handle`]) that performs a side effect
//!   and reports whether it consumed the URL.
//!
//! ## Minimal example
//!
//! ```rust
//! use waypost_navigator::Navigator;
//!
//! // The destination type is yours; a plain enum works fine.
//! #[derive(Debug, PartialEq)]
//! enum Screen {
//!     User(i64),
//! }
//!
//! let mut navigator = Navigator::new();
//! navigator.register("myapp://user/<int:id>", |_url, values| {
//!     values["id"].as_int().map(Screen::User)
//! });
//!
//! assert_eq!(navigator.build("myapp://user/7"), Some(Screen::User(7)));
//! assert_eq!(navigator.build("myapp://user/abc"), None);
//! ```
//!
//! ## Ordering contract
//!
//! Registry keys enumerate in insertion order, so when overlapping patterns
//! could match the same URL, the first registered pattern wins —
//! deterministically. Re-registering a pattern replaces its handler in
//! place without changing its position.
//!
//! ## Threading
//!
//! A [`Navigator`] is a single-threaded value: there is no internal locking
//! and handlers are not required to be `Send` or `Sync`. Share one across
//! threads only behind external synchronization. There is deliberately no
//! process-wide default instance; pass your navigator explicitly.

mod handler;
mod navigator;
mod registry;

pub use handler::{FactoryFn, Handler, OpenHandlerFn};
pub use navigator::{Navigator, Resolved};
pub use registry::Registry;
