//! Error types shared by the catalog client and the server proxy.

use thiserror::Error;

/// Failure talking to the show catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("path {path:?} resolves outside the catalog")]
    OutsideCatalog { path: String },

    #[error("catalog request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("catalog returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("failed to decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CatalogError {
    /// True when the upstream answered 404 (unknown show id, etc.)
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::Status { status: 404, .. })
    }
}
