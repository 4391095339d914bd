//! Common test utilities and fixture helpers.
//!
//! The fixture catalog lives in `docs/fixtures/catalog.json` and maps paths
//! relative to the API root onto response bodies. URLs inside the bodies use a
//! `{base}` placeholder that is replaced with the base URL under test.

#![allow(dead_code)]

pub mod server;

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use holonet_lib::{ClientConfig, Error, Holonet, Result, Transport};

pub const BASE: &str = "http://swapi.test/api/";

/// In-memory transport over the fixture catalog that records every request.
#[derive(Debug, Default)]
pub struct FixtureTransport {
    routes: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
}

impl FixtureTransport {
    pub fn new() -> Self {
        Self::from_routes(server::fixture_routes(BASE))
    }

    pub fn empty() -> Self {
        Self::from_routes(HashMap::new())
    }

    pub fn from_routes(routes: HashMap<String, String>) -> Self {
        Self {
            routes,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Add or replace the body served for `path` (relative to [`BASE`]).
    pub fn route(mut self, path: &str, body: serde_json::Value) -> Self {
        self.routes.insert(path.to_string(), body.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn calls_matching(&self, fragment: &str) -> usize {
        self.calls()
            .iter()
            .filter(|url| url.contains(fragment))
            .count()
    }
}

#[async_trait]
impl Transport for FixtureTransport {
    async fn get(&self, url: &str) -> Result<String> {
        self.calls.lock().expect("calls lock").push(url.to_string());
        tokio::task::yield_now().await;

        let path = url.strip_prefix(BASE).unwrap_or(url);
        self.routes.get(path).cloned().ok_or_else(|| Error::NotFound {
            url: url.to_string(),
        })
    }
}

/// Engine over the fixture catalog.
pub fn fixture_engine() -> Holonet<FixtureTransport> {
    engine_with(FixtureTransport::new())
}

pub fn engine_with(transport: FixtureTransport) -> Holonet<FixtureTransport> {
    let config = ClientConfig::default()
        .with_base_url(BASE)
        .expect("fixture base url")
        .with_max_in_flight(4);
    Holonet::with_transport(transport, config).expect("engine builds")
}

/// A listing page body.
pub fn page(results: Vec<serde_json::Value>, next: Option<String>) -> serde_json::Value {
    serde_json::json!({
        "count": results.len(),
        "next": next,
        "previous": null,
        "results": results,
    })
}
