//! Dioxus fullstack application entry point.
//!
//! This module provides the root App component: it installs the shared show
//! store, the router and the top-level error boundary.

use dioxus::prelude::*;

pub mod components;
pub mod genres;
pub mod menu;
pub mod pages;
pub mod store;

use components::Layout;
use pages::{Genre, Home, PageNotFound, ShowDetails};
use store::use_store_provider;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Shared state for every page (catalog client + search query)
    use_store_provider();

    rsx! {
        AppErrorBoundary {
            Router::<Route> {}
        }
    }
}

/// Catches render errors from anything below it, logs them and shows a fallback.
#[component]
pub fn AppErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary { handle_error: log_render_error, {children} }
    }
}

/// Error boundary handler.
///
/// Dioxus does not expose which component raised a captured error, so the
/// log names the boundary and carries the full error context (the error value
/// plus any context attached while it propagated).
pub fn log_render_error(errors: ErrorContext) -> Element {
    let error = errors.error().map(|e| e.to_string()).unwrap_or_default();
    tracing::error!(
        boundary = "AppErrorBoundary",
        error = %error,
        "Uncaught error while rendering: {:?}",
        errors
    );
    rsx! {
        div { class: "app-error", role: "alert",
            h1 { "Something went wrong" }
            p { "The error has been logged. Try reloading the page." }
        }
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},
        #[route("/genre/:genre")]
        Genre { genre: String },
        #[route("/show/:id")]
        ShowDetails { id: u64 },
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

impl Route {
    /// Stable view name, used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home {} => "Home",
            Route::Genre { .. } => "Genre",
            Route::ShowDetails { .. } => "ShowDetails",
            Route::PageNotFound { .. } => "PageNotFound",
        }
    }
}

/// Log panics through tracing before the default hook runs.
pub fn install_error_logger() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let message = info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();
        tracing::error!(location = %location, "Panic: {}", message);
        previous(info);
    }));
}

/// Start the client app (web builds).
pub fn launch() {
    install_error_logger();
    dioxus::launch(App);
}
