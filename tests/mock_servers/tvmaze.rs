//! Mock TVmaze catalog API for testing
//!
//! Serves a small fixed show index at /shows, /shows/:id and /search/shows.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Mock catalog state
struct MockCatalogState {
    shows: Vec<Value>,
    /// When set, every endpoint answers with this status
    fail_with: Option<StatusCode>,
    requests: Vec<String>,
}

/// Mock TVmaze server
pub struct MockTvmazeServer {
    addr: SocketAddr,
    state: Arc<RwLock<MockCatalogState>>,
    handle: JoinHandle<()>,
}

pub fn show_json(id: u64, name: &str, genres: &[&str]) -> Value {
    json!({
        "id": id,
        "url": format!("https://www.tvmaze.com/shows/{}", id),
        "name": name,
        "type": "Scripted",
        "language": "English",
        "genres": genres,
        "status": "Ended",
        "premiered": "2013-06-24",
        "rating": { "average": 7.5 },
        "image": null,
        "summary": format!("<p><b>{}</b> summary.</p>", name)
    })
}

impl MockTvmazeServer {
    /// Start a mock catalog on a random port with a default show index
    pub async fn start() -> Self {
        let state = Arc::new(RwLock::new(MockCatalogState {
            shows: vec![
                show_json(1, "Under the Dome", &["Drama", "Science-Fiction", "Thriller"]),
                show_json(2, "Person of Interest", &["Action", "Crime", "Science-Fiction"]),
                show_json(3, "Bitten", &["Drama", "Horror", "Romance"]),
                show_json(4, "Arrow", &["Drama", "Action", "Science-Fiction"]),
                show_json(5, "True Detective", &["Drama", "Crime", "Thriller"]),
                show_json(6, "The Office", &["Comedy"]),
            ],
            fail_with: None,
            requests: Vec::new(),
        }));

        let app = Router::new()
            .route("/shows", get(handle_index))
            .route("/shows/{id}", get(handle_show))
            .route("/search/shows", get(handle_search))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    /// Base URL to configure a catalog client with
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make every endpoint fail with the given status
    pub async fn fail_with(&self, status: StatusCode) {
        self.state.write().await.fail_with = Some(status);
    }

    /// Path and query of every request received so far
    pub async fn requests(&self) -> Vec<String> {
        self.state.read().await.requests.clone()
    }

    /// Stop the mock server
    pub async fn stop(self) {
        self.handle.abort();
    }
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    page: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    q: String,
}

async fn handle_index(
    State(state): State<Arc<RwLock<MockCatalogState>>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Value>, StatusCode> {
    let mut state = state.write().await;
    let page = query.page.unwrap_or(0);
    state.requests.push(format!("/shows?page={}", page));
    if let Some(status) = state.fail_with {
        return Err(status);
    }
    // Everything lives on page 0; later pages are past the end of the index
    if page > 0 {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(Value::Array(state.shows.clone())))
}

async fn handle_show(
    State(state): State<Arc<RwLock<MockCatalogState>>>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, StatusCode> {
    let mut state = state.write().await;
    state.requests.push(format!("/shows/{}", id));
    if let Some(status) = state.fail_with {
        return Err(status);
    }
    state
        .shows
        .iter()
        .find(|s| s["id"].as_u64() == Some(id))
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn handle_search(
    State(state): State<Arc<RwLock<MockCatalogState>>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Value>, StatusCode> {
    let mut state = state.write().await;
    state.requests.push(format!("/search/shows?q={}", query.q));
    if let Some(status) = state.fail_with {
        return Err(status);
    }
    let needle = query.q.to_lowercase();
    let results: Vec<Value> = state
        .shows
        .iter()
        .filter(|s| {
            s["name"]
                .as_str()
                .map(|n| n.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
        .map(|s| json!({ "score": 0.9, "show": s }))
        .collect();
    Ok(Json(Value::Array(results)))
}
