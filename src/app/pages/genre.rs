//! Genre listing page.

use dioxus::prelude::*;

use crate::app::components::{Dismissal, ErrorAlert, ShowGrid};
use crate::app::genres::{find_genre, is_valid_slug};
use crate::app::pages::PageNotFound;
use crate::app::store::use_store;

/// Shows of the first index page tagged with the routed genre.
#[component]
pub fn Genre(genre: String) -> Element {
    let store = use_store();
    // Keyed by slug so a closed error on one genre doesn't hide the next one's
    let mut dismissal = use_signal(Dismissal::<String>::default);

    let entry = if is_valid_slug(&genre) {
        find_genre(&genre)
    } else {
        None
    };

    let shows = use_resource({
        let genre = genre.clone();
        use_reactive!(|(genre,)| async move {
            let Some(entry) = find_genre(&genre) else {
                return None;
            };
            let result = store.catalog().shows_in_genre(entry, 0).await.map_err(|e| {
                tracing::warn!("Failed to load genre {}: {}", genre, e);
                e.to_string()
            });
            Some(result)
        })
    });

    let Some(entry) = entry else {
        tracing::debug!("Unknown genre slug: {:?}", genre);
        return rsx! {
            PageNotFound { segments: vec!["genre".to_string(), genre] }
        };
    };

    let content = match shows.read().clone().flatten() {
        None => rsx! {
            p { "aria-busy": "true", "Loading {entry.label} shows..." }
        },
        Some(Ok(list)) => rsx! {
            ShowGrid {
                shows: list,
                empty_message: format!("No {} shows on this page.", entry.label),
            }
        },
        Some(Err(message)) if !dismissal.read().is_dismissed(&genre) => {
            let key = genre.clone();
            rsx! {
                ErrorAlert {
                    message,
                    on_dismiss: move |_| dismissal.with_mut(|d| d.dismiss(key.clone())),
                }
            }
        }
        Some(Err(_)) => rsx! {},
    };

    rsx! {
        section { class: "genre",
            h2 { "{entry.label}" }
            {content}
        }
    }
}
