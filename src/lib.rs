//! TV Show Dashboard
//!
//! A Dioxus single-page app for browsing, searching and filtering TV show
//! listings from the public TVmaze catalog.
//!
//! This library provides:
//! - The routed web UI (header with genre menu, show listings and details)
//! - A thin catalog API client with a fixed base address
//! - Server-side hosting with a same-origin `/api` proxy (server feature)

pub mod app;
pub mod catalog;
#[cfg(feature = "server")]
pub mod config;
pub mod error;
#[cfg(feature = "server")]
pub mod proxy;
