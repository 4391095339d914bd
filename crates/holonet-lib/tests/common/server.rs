//! HTTP fixture server over `docs/fixtures/catalog.json`.
//!
//! Shared by the library's transport tests and the CLI's binary tests; the
//! CLI crate pulls this file in with `#[path]`.

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::runtime::Runtime;

/// Relative path → (status, body).
type Routes = Arc<HashMap<String, (StatusCode, String)>>;

/// An extra route served next to the catalog: relative path, status, raw body.
pub type ExtraRoute = (&'static str, StatusCode, &'static str);

/// Path to fixtures directory used by tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Load the fixture catalog with `{base}` replaced by `base`.
pub fn fixture_routes(base: &str) -> HashMap<String, String> {
    let raw = fs::read_to_string(fixtures_dir().join("catalog.json")).expect("fixture catalog");
    let routes: HashMap<String, serde_json::Value> =
        serde_json::from_str(&raw.replace("{base}", base)).expect("fixture catalog is json");
    routes
        .into_iter()
        .map(|(path, body)| (path, body.to_string()))
        .collect()
}

async fn serve_fixture(State(routes): State<Routes>, uri: Uri) -> Response {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    let relative = path.strip_prefix("/api/").unwrap_or(path);

    match routes.get(relative) {
        Some((status, body)) => (
            *status,
            [("content-type", "application/json")],
            body.clone(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "{\"detail\":\"Not found\"}").into_response(),
    }
}

/// Serve the catalog plus `extra` on an ephemeral port of the current runtime.
///
/// Returns the API base URL, e.g. `http://127.0.0.1:PORT/api/`.
pub async fn spawn_fixture_server(extra: &[ExtraRoute]) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fixture server");
    let addr = listener.local_addr().expect("local addr");
    let base = format!("http://{addr}/api/");

    let mut routes: HashMap<String, (StatusCode, String)> = fixture_routes(&base)
        .into_iter()
        .map(|(path, body)| (path, (StatusCode::OK, body)))
        .collect();
    for (path, status, body) in extra {
        routes.insert((*path).to_string(), (*status, (*body).to_string()));
    }

    let app = Router::new()
        .fallback(serve_fixture)
        .with_state(Arc::new(routes));
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fixture server");
    });

    base
}

/// Fixture server on its own runtime, for blocking callers. Stops when dropped.
pub struct FixtureServer {
    base: String,
    _runtime: Runtime,
}

impl FixtureServer {
    pub fn start() -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("fixture runtime");
        let base = runtime.block_on(spawn_fixture_server(&[]));
        Self {
            base,
            _runtime: runtime,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }
}
