//! Fallback for unknown routes.

use dioxus::prelude::*;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section { class: "not-found",
            h2 { "Page not found" }
            p { "Nothing lives at {path}." }
            a { href: "/", "Back to shows" }
        }
    }
}
