// Copyright 2026 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placeholder parsing and typed value extraction.
//!
//! A pattern component is a placeholder only when it is wrapped in `<` and
//! `>`. The interior splits on the first `:` into a type and a key; without
//! a `:` the whole interior is the key and the type is `string`. Extraction
//! is fallible for the numeric types: a component that fails to parse means
//! "this pattern does not match here", which the matcher turns into trying
//! the next candidate. It is never a hard error.

use hashbrown::HashMap;

/// Pattern components starting with this prefix bind the rest of the path.
pub(crate) const PATH_PREFIX: &str = "<path:";

/// A value extracted for one placeholder.
#[derive(Clone, Debug, PartialEq)]
pub enum BoundValue {
    /// `string`, `path`, and untyped placeholders bind strings.
    Str(String),
    /// `int` placeholders bind 64-bit integers.
    Int(i64),
    /// `float` placeholders bind 64-bit floats.
    Float(f64),
}

impl BoundValue {
    /// The string value, if this is a string binding.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The integer value, if this is an `int` binding.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The float value, if this is a `float` binding.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(x) => Some(*x),
            _ => None,
        }
    }
}

/// Placeholder keys mapped to their extracted values for one match.
///
/// Keys are unique within a match because each placeholder key appears once
/// per pattern.
pub type Bindings = HashMap<String, BoundValue>;

/// Try to bind `component` as a placeholder against `input[index]`.
///
/// Returns `None` both for literals (no `<…>` shape) and for placeholders
/// whose typed extraction fails; the caller falls back to a literal
/// comparison, which a failed placeholder then loses. The `<>` form with an
/// empty interior is malformed and also returns `None`.
///
/// `index` must be in range for `input`.
pub(crate) fn bind(component: &str, input: &[&str], index: usize) -> Option<(String, BoundValue)> {
    let interior = component.strip_prefix('<')?.strip_suffix('>')?;
    if interior.is_empty() {
        return None;
    }
    let (kind, key) = match interior.split_once(':') {
        Some((kind, key)) => (kind, key),
        None => ("string", interior),
    };
    let raw = input[index];
    let value = match kind {
        "int" => BoundValue::Int(raw.parse().ok()?),
        "float" => BoundValue::Float(raw.parse().ok()?),
        "path" => BoundValue::Str(input[index..].join("/")),
        // `string` and unknown type tokens both bind the raw component.
        _ => BoundValue::Str(raw.to_owned()),
    };
    Some((key.to_owned(), value))
}
