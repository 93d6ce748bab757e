//! Load-failure alert and the per-key dismissal it is paired with.

use dioxus::prelude::*;

/// Remembers which request's error the user closed.
///
/// Keyed by whatever identifies the request (genre slug, show id, query) so
/// an error for a different key is shown again.
#[derive(Clone, Debug, PartialEq)]
pub struct Dismissal<K> {
    key: Option<K>,
}

impl<K> Default for Dismissal<K> {
    fn default() -> Self {
        Self { key: None }
    }
}

impl<K: PartialEq> Dismissal<K> {
    pub fn dismiss(&mut self, key: K) {
        self.key = Some(key);
    }

    pub fn is_dismissed(&self, key: &K) -> bool {
        self.key.as_ref() == Some(key)
    }
}

/// Alert shown when catalog data could not be loaded.
#[component]
pub fn ErrorAlert(
    /// Failure description from the catalog client
    message: String,
    on_dismiss: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "alert alert-danger d-flex align-items-start", role: "alert",
            div { class: "flex-grow-1",
                strong { "Could not load shows. " }
                span { class: "alert-detail", "{message}" }
            }
            button {
                r#type: "button",
                class: "btn-close",
                "aria-label": "Dismiss",
                onclick: move |_| on_dismiss.call(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_dismissed_initially() {
        let dismissal = Dismissal::<String>::default();
        assert!(!dismissal.is_dismissed(&"drama".to_string()));
    }

    #[test]
    fn test_dismissal_is_scoped_to_its_key() {
        let mut dismissal = Dismissal::default();
        dismissal.dismiss("drama".to_string());
        assert!(dismissal.is_dismissed(&"drama".to_string()));
        assert!(!dismissal.is_dismissed(&"comedy".to_string()));
    }

    #[test]
    fn test_new_dismissal_replaces_previous_key() {
        let mut dismissal = Dismissal::default();
        dismissal.dismiss(1u64);
        dismissal.dismiss(2u64);
        assert!(!dismissal.is_dismissed(&1));
        assert!(dismissal.is_dismissed(&2));
    }
}
