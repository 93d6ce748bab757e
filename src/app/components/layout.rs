//! Layout wrapping every routed page with the header and footer.

use dioxus::prelude::*;

use super::header::AppHeader;
use crate::app::Route;

/// Main layout component wrapping all pages.
#[component]
pub fn Layout() -> Element {
    let version = env!("TVDASH_VERSION");
    let git_sha = env!("TVDASH_GIT_SHA");

    rsx! {
        document::Title { "AMROBOX - TV Show Dashboard" }

        AppHeader {}
        main { class: "container mt-4",
            Outlet::<Route> {}
        }
        footer { class: "container text-center py-3",
            small { class: "text-muted",
                "Show data from TVmaze · v{version} ({git_sha})"
            }
        }
    }
}
