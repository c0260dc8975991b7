// Copyright 2026 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable Waypost examples. See the `examples/` directory of this crate.
