//! Card summarizing a single show in listings.

use dioxus::prelude::*;

use crate::catalog::Show;

#[component]
pub fn ShowCard(show: Show) -> Element {
    let href = format!("/show/{}", show.id);
    let genres = show.genres.join(", ");
    let rating = show
        .rating
        .average
        .map(|avg| format!("{:.1}", avg))
        .unwrap_or_else(|| "–".to_string());
    let year = show.premiered_year().map(|y| format!(" ({})", y)).unwrap_or_default();

    rsx! {
        article { class: "show-card",
            a { href: "{href}",
                if let Some(src) = show.thumbnail() {
                    img { class: "show-poster", src: "{src}", alt: "{show.name}" }
                } else {
                    div { class: "show-poster placeholder" }
                }
                h3 { class: "show-title", "{show.name}{year}" }
            }
            p { class: "show-genres", "{genres}" }
            p { class: "show-rating", "★ {rating}" }
        }
    }
}

/// Grid of show cards, or an empty-state message.
#[component]
pub fn ShowGrid(shows: Vec<Show>, empty_message: String) -> Element {
    if shows.is_empty() {
        return rsx! {
            p { class: "text-muted", "{empty_message}" }
        };
    }

    rsx! {
        div { class: "show-grid",
            for show in shows {
                ShowCard { key: "{show.id}", show }
            }
        }
    }
}
