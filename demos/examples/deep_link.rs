// Copyright 2026 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deep-link routing for a small app: factories + open handlers.
//!
//! This example shows how to combine:
//! - `waypost_navigator` for registering patterns and dispatching URLs,
//! - `waypost_matcher` for the typed placeholder grammar and query access.
//!
//! Run:
//! - `cargo run -p waypost_demos --example deep_link`

use waypost_matcher::UrlConvertible;
use waypost_navigator::Navigator;

/// The app's destinations. Factories produce these; a real app would hand
/// them to its presentation layer.
#[derive(Debug)]
enum Screen {
    UserDetail { id: i64 },
    Posts { username: String },
    Web { url: String },
}

fn main() {
    let mut navigator = Navigator::with_scheme("myapp");

    // Bare-path patterns pick up the navigator's scheme.
    navigator.register("/user/<int:id>", |_url, values| {
        let id = values["id"].as_int()?;
        Some(Screen::UserDetail { id })
    });
    navigator.register("/posts/<username>", |_url, values| {
        let username = values["username"].as_str()?.to_owned();
        Some(Screen::Posts { username })
    });

    // A greedy path placeholder captures whole web URLs.
    navigator.register("http://<path:url>", |_url, values| {
        let url = values["url"].as_str()?.to_owned();
        Some(Screen::Web { url })
    });

    // Open handlers perform side effects instead of building destinations.
    navigator.handle("/alert/<title>", |url, values| {
        let title = values["title"].as_str().unwrap_or_default();
        let message = url.query_parameters().remove("message");
        println!("alert: {title:?}, message: {message:?}");
        true
    });

    for url in [
        "myapp://user/27",
        "/user/8",
        "myapp://posts/jane?from=push",
        "http://github.com/waypost-rs/waypost",
        "myapp://user/not-a-number",
    ] {
        match navigator.build(url) {
            Some(screen) => println!("{url} -> {screen:?}"),
            None => println!("{url} -> no destination"),
        }
    }

    let consumed = navigator.open("myapp://alert/hi?message=hello%20there");
    println!("alert consumed: {consumed}");
}
