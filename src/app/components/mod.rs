//! Shared UI components for the dashboard.

pub mod error_alert;
pub mod header;
pub mod layout;
pub mod show_card;

pub use error_alert::{Dismissal, ErrorAlert};
pub use header::{use_menu, AppHeader, HeaderView, TOGGLE_LABEL};
pub use layout::Layout;
pub use show_card::{ShowCard, ShowGrid};
