//! Same-origin proxy for the catalog API.
//!
//! `GET /api/<path>?<query>` is forwarded to `<catalog base>/<path>?<query>`
//! with the `/api` prefix stripped, so browsers never make cross-origin calls.

use axum::{
    body::Body,
    extract::{Path, RawQuery, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use url::Url;

use crate::catalog::CatalogClient;
use crate::error::CatalogError;

/// Shared proxy state
#[derive(Clone)]
pub struct ProxyState {
    pub catalog: CatalogClient,
}

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProxyError::Catalog(CatalogError::InvalidUrl(_))
            | ProxyError::Catalog(CatalogError::OutsideCatalog { .. }) => StatusCode::BAD_REQUEST,
            ProxyError::Catalog(_) => StatusCode::BAD_GATEWAY,
        };
        tracing::warn!("Catalog proxy error ({}): {}", status, self);
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Build the `/api/*` router.
pub fn router(catalog: CatalogClient) -> Router {
    Router::new()
        .route("/api/{*path}", get(proxy_handler))
        .with_state(ProxyState { catalog })
}

/// Upstream URL for a proxied path and raw query string.
pub fn upstream_url(
    catalog: &CatalogClient,
    path: &str,
    query: Option<&str>,
) -> Result<Url, CatalogError> {
    let mut url = catalog.endpoint(path)?;
    url.set_query(query.filter(|q| !q.is_empty()));
    Ok(url)
}

/// GET /api/{*path} - Relay a catalog request
pub async fn proxy_handler(
    State(state): State<ProxyState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.catalog, &path, query.as_deref())?;
    let upstream = state.catalog.send(url).await?;

    let status =
        StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/json")
        .to_string();
    let body = upstream.bytes().await.map_err(CatalogError::from)?;

    tracing::debug!("Proxied /api/{} -> {}", path, status);

    Ok((
        status,
        [(header::CONTENT_TYPE, content_type)],
        Body::from(body),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_url_strips_prefix_and_keeps_query() {
        let catalog = CatalogClient::default();
        let url = upstream_url(&catalog, "search/shows", Some("q=girls")).unwrap();
        assert_eq!(url.as_str(), "https://api.tvmaze.com/search/shows?q=girls");
    }

    #[test]
    fn test_upstream_url_without_query() {
        let catalog = CatalogClient::default();
        let url = upstream_url(&catalog, "shows/1", None).unwrap();
        assert_eq!(url.as_str(), "https://api.tvmaze.com/shows/1");

        let url = upstream_url(&catalog, "shows/1", Some("")).unwrap();
        assert_eq!(url.as_str(), "https://api.tvmaze.com/shows/1");
    }

    #[test]
    fn test_upstream_url_cannot_leave_catalog() {
        let catalog = CatalogClient::new("http://127.0.0.1:9999/tvmaze").unwrap();
        for path in [
            "http://169.254.169.254/latest/meta-data",
            "https://example.com/shows?page=0",
            "../admin",
        ] {
            let err = upstream_url(&catalog, path, None).unwrap_err();
            assert!(matches!(err, CatalogError::OutsideCatalog { .. }), "{path}");
            assert_eq!(
                ProxyError::from(err).into_response().status(),
                StatusCode::BAD_REQUEST
            );
        }
    }

    #[test]
    fn test_transport_errors_map_to_bad_gateway() {
        let err = ProxyError::from(CatalogError::Status {
            status: 500,
            url: "https://api.tvmaze.com/shows".into(),
        });
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
