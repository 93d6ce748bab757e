//! Show details page.

use dioxus::prelude::*;

use crate::app::components::{Dismissal, ErrorAlert};
use crate::app::genres::{find_genre, genre_href};
use crate::app::store::use_store;

#[component]
pub fn ShowDetails(id: u64) -> Element {
    let store = use_store();
    let mut dismissal = use_signal(Dismissal::<u64>::default);

    let show = use_resource(use_reactive!(|(id,)| async move {
        store.catalog().show(id).await.map_err(|e| {
            tracing::warn!("Failed to load show {}: {}", id, e);
            if e.is_not_found() {
                format!("Show {} does not exist.", id)
            } else {
                e.to_string()
            }
        })
    }));

    let current = show.read().clone();
    match current {
        None => rsx! {
            p { "aria-busy": "true", "Loading show..." }
        },
        Some(Err(message)) if !dismissal.read().is_dismissed(&id) => rsx! {
            ErrorAlert {
                message,
                on_dismiss: move |_| dismissal.with_mut(|d| d.dismiss(id)),
            }
        },
        Some(Err(_)) => rsx! {
            a { href: "/", "Back to shows" }
        },
        Some(Ok(show)) => {
            let summary = show
                .plain_summary()
                .unwrap_or_else(|| "No summary available.".into());
            let rating = show
                .rating
                .average
                .map(|avg| format!("{:.1} / 10", avg))
                .unwrap_or_else(|| "Not rated".into());
            let status = show.status.clone().unwrap_or_default();
            let language = show.language.clone().unwrap_or_default();
            // Genre chips only link to genres the menu knows about
            let genres: Vec<(String, Option<String>)> = show
                .genres
                .iter()
                .map(|label| {
                    let slug = label.to_ascii_lowercase();
                    let href = find_genre(&slug).map(|g| genre_href(g.slug));
                    (label.clone(), href)
                })
                .collect();

            rsx! {
                article { class: "show-details",
                    if let Some(src) = show.image.as_ref().and_then(|i| i.original.clone()) {
                        img { class: "show-poster", src: "{src}", alt: "{show.name}" }
                    }
                    h2 { "{show.name}" }
                    p { class: "show-meta", "{language} · {status} · {rating}" }
                    ul { class: "show-genres",
                        for (label, href) in genres {
                            li { key: "{label}",
                                if let Some(href) = href {
                                    a { href: "{href}", "{label}" }
                                } else {
                                    "{label}"
                                }
                            }
                        }
                    }
                    p { class: "show-summary", "{summary}" }
                }
            }
        }
    }
}
