//! Routed page components.
//!
//! Pages read show data through the shared [`ShowStore`](crate::app::store::ShowStore)
//! catalog client and render it with the shared components.

mod genre;
mod home;
mod not_found;
mod show;

pub use genre::Genre;
pub use home::Home;
pub use not_found::PageNotFound;
pub use show::ShowDetails;
