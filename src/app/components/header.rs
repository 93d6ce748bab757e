//! Site header with brand mark and the responsive genre menu.

use dioxus::prelude::*;

use crate::app::genres::{genre_links, GenreEntry, GENRES};
use crate::app::menu::MenuState;

/// Accessible name of the menu toggle button
pub const TOGGLE_LABEL: &str = "Toggle navigation";

/// Menu state for a header instance plus the handler its toggle button calls.
pub fn use_menu() -> (Signal<MenuState>, Callback<()>) {
    let mut menu = use_signal(MenuState::default);
    let toggle = use_callback(move |_: ()| {
        menu.with_mut(MenuState::toggle);
        tracing::trace!("Mobile menu toggled: {:?}", *menu.peek());
    });
    (menu, toggle)
}

/// Header owning its menu state. The state resets whenever the header is recreated.
#[component]
pub fn AppHeader() -> Element {
    let (menu, toggle) = use_menu();

    rsx! {
        HeaderView { menu: menu(), on_toggle: toggle }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct HeaderViewProps {
    /// Whether the genre menu is shown
    pub menu: MenuState,
    /// Called when the burger button is clicked
    pub on_toggle: EventHandler<()>,
    /// Genres listed in the menu
    #[props(default = GENRES)]
    pub catalog: &'static [GenreEntry],
}

/// Stateless header markup for a given menu state.
#[component]
pub fn HeaderView(props: HeaderViewProps) -> Element {
    let is_open = props.menu.is_open();
    let header_class = if is_open {
        "app-header is-open"
    } else {
        "app-header"
    };
    let links = genre_links(props.catalog);

    rsx! {
        header { class: "{header_class}",
            nav { class: "navbar",
                a { class: "brand", href: "/",
                    span { class: "brand-primary", "AMRO" }
                    span { class: "brand-secondary", "BOX" }
                }
                button {
                    class: "navbar-toggler",
                    r#type: "button",
                    "aria-label": TOGGLE_LABEL,
                    "aria-expanded": props.menu.aria_expanded(),
                    onclick: move |_| props.on_toggle.call(()),
                    span { class: "navbar-toggler-icon" }
                }
            }
            if is_open {
                div { class: "mobile-menu",
                    ul { class: "genre-list",
                        for link in links {
                            li { key: "{link.slug}",
                                a { class: "genre-link", href: "{link.href}", "{link.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
