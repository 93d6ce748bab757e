//! Mock servers for integration testing
//!
//! These mock servers simulate the external catalog API so the client and
//! the proxy can be exercised without network access.

pub mod tvmaze;

pub use tvmaze::MockTvmazeServer;
