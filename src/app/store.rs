//! Shared dashboard state provided via context.
//!
//! Holds the catalog client and the current search query so the header,
//! the pages and any future widgets read the same values.

use dioxus::prelude::*;

use crate::catalog::CatalogClient;

/// Global dashboard state shared via context
#[derive(Clone, Copy)]
pub struct ShowStore {
    catalog: Signal<CatalogClient>,
    /// Text typed into the home page search box
    query: Signal<String>,
}

impl ShowStore {
    /// Client used for every catalog request
    pub fn catalog(&self) -> CatalogClient {
        (self.catalog)()
    }

    pub fn query(&self) -> String {
        (self.query)()
    }

    pub fn set_query(&self, value: String) {
        let mut query = self.query;
        query.set(value);
    }

    pub fn clear_query(&self) {
        self.set_query(String::new());
    }
}

/// Initialize the store provider - call once at app root
pub fn use_store_provider() -> ShowStore {
    let catalog = use_signal(CatalogClient::default);
    let query = use_signal(String::new);

    use_context_provider(|| ShowStore { catalog, query })
}

/// Get the store - use in any component below the app root
pub fn use_store() -> ShowStore {
    use_context::<ShowStore>()
}
