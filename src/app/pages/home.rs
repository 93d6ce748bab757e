//! Home page: browse the show index or search it by name.

use dioxus::prelude::*;

use crate::app::components::{Dismissal, ErrorAlert, ShowGrid};
use crate::app::store::{use_store, ShowStore};
use crate::catalog::Show;

/// Fetch the listing for a query: first index page when blank, search otherwise.
async fn load_shows(store: ShowStore, query: String) -> Result<Vec<Show>, String> {
    let catalog = store.catalog();
    let result = if query.trim().is_empty() {
        catalog.shows(0).await
    } else {
        catalog
            .search_shows(&query)
            .await
            .map(|results| results.into_iter().map(|r| r.show).collect())
    };
    result.map_err(|e| {
        tracing::warn!("Failed to load shows for {:?}: {}", query, e);
        e.to_string()
    })
}

/// Home page component.
#[component]
pub fn Home() -> Element {
    let store = use_store();
    let mut dismissal = use_signal(Dismissal::<String>::default);

    let shows = use_resource(move || {
        let query = store.query();
        async move { load_shows(store, query).await }
    });

    let query = store.query();
    let heading = if query.trim().is_empty() {
        "Popular shows".to_string()
    } else {
        format!("Results for \u{201c}{}\u{201d}", query.trim())
    };

    let content = match shows.read().clone() {
        None => rsx! {
            p { "aria-busy": "true", "Loading shows..." }
        },
        Some(Ok(list)) => rsx! {
            ShowGrid { shows: list, empty_message: "No shows found." }
        },
        Some(Err(message)) if !dismissal.read().is_dismissed(&query) => {
            let key = query.clone();
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
        section { class: "home",
            form {
                class: "search-form",
                role: "search",
                onsubmit: move |evt| evt.prevent_default(),
                input {
                    r#type: "search",
                    class: "form-control",
                    placeholder: "Search shows...",
                    "aria-label": "Search shows",
                    value: "{query}",
                    oninput: move |evt| store.set_query(evt.value()),
                }
                if !query.is_empty() {
                    button {
                        r#type: "button",
                        class: "btn btn-link",
                        onclick: move |_| store.clear_query(),
                        "Clear"
                    }
                }
            }
            h2 { "{heading}" }
            {content}
        }
    }
}
