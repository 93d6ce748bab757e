//! HTTP client for the TVmaze show catalog.
//!
//! Every request path is resolved relative to a single base address, which
//! defaults to the public API root. No auth headers are sent and nothing is
//! retried; failures propagate to the caller as [`CatalogError`].

mod types;

pub use types::{Rating, SearchResult, Show, ShowImage};

use crate::app::genres::GenreEntry;
use crate::error::CatalogError;
use serde::de::DeserializeOwned;
use url::Url;

/// Root of the public catalog API.
pub const CATALOG_BASE_URL: &str = "https://api.tvmaze.com";

/// Preconfigured request client bound to a catalog base address.
#[derive(Clone, Debug)]
pub struct CatalogClient {
    base_url: Url,
    http: reqwest::Client,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self {
            base_url: Url::parse(CATALOG_BASE_URL).expect("catalog base url is valid"),
            http: reqwest::Client::new(),
        }
    }
}

impl PartialEq for CatalogClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Result<Self, CatalogError> {
        let mut base_url = Url::parse(base_url)?;
        // Url::join replaces the last segment unless the base ends in '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a request path (with or without a leading slash) against the base.
    ///
    /// Absolute URLs, `..` segments and anything else resolving outside the
    /// base (other origin or above the base path) are rejected.
    pub fn endpoint(&self, path: &str) -> Result<Url, CatalogError> {
        let relative = path.trim_start_matches('/');
        let outside = || CatalogError::OutsideCatalog {
            path: path.to_string(),
        };

        if Url::parse(relative).is_ok() {
            return Err(outside());
        }
        let has_dot_segment = relative
            .split(['/', '\\', '?', '#'])
            .any(|segment| segment == ".." || segment.eq_ignore_ascii_case("%2e%2e"));
        if has_dot_segment {
            return Err(outside());
        }

        let url = self.base_url.join(relative)?;
        if url.origin() != self.base_url.origin() || !url.path().starts_with(self.base_url.path())
        {
            return Err(outside());
        }
        Ok(url)
    }

    /// Send a GET without inspecting the response status.
    pub async fn send(&self, url: Url) -> Result<reqwest::Response, CatalogError> {
        tracing::debug!("GET {}", url);
        Ok(self.http.get(url).send().await?)
    }

    /// GET a URL and decode the JSON body, treating non-2xx as an error.
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, CatalogError> {
        let resp = self.send(url.clone()).await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// GET /shows?page=N - one page of the full show index
    pub async fn shows(&self, page: u32) -> Result<Vec<Show>, CatalogError> {
        let mut url = self.endpoint("shows")?;
        url.query_pairs_mut().append_pair("page", &page.to_string());
        self.get_json(url).await
    }

    /// GET /search/shows?q=... - fuzzy search by show name
    pub async fn search_shows(&self, query: &str) -> Result<Vec<SearchResult>, CatalogError> {
        let mut url = self.endpoint("search/shows")?;
        url.query_pairs_mut().append_pair("q", query.trim());
        self.get_json(url).await
    }

    /// GET /shows/:id
    pub async fn show(&self, id: u64) -> Result<Show, CatalogError> {
        let url = self.endpoint(&format!("shows/{}", id))?;
        self.get_json(url).await
    }

    /// Shows on the given index page tagged with the genre's label.
    pub async fn shows_in_genre(
        &self,
        genre: &GenreEntry,
        page: u32,
    ) -> Result<Vec<Show>, CatalogError> {
        let shows = self.shows(page).await?;
        Ok(shows
            .into_iter()
            .filter(|show| show.has_genre(genre.label))
            .collect())
    }
}
