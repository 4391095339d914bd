// Test-only helpers for `holonet-lib` unit tests
#![allow(dead_code)]
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::client::Transport;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
enum Reply {
    Body(String),
    Unreachable,
}

/// In-memory [`Transport`] that records every requested URL.
///
/// Unknown URLs answer with [`Error::NotFound`], mirroring a 404.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    routes: HashMap<String, (Reply, Option<Duration>)>,
    calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl MemoryTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(mut self, url: &str, body: &str) -> Self {
        self.routes
            .insert(url.to_string(), (Reply::Body(body.to_string()), None));
        self
    }

    pub fn with_slow_json(mut self, url: &str, body: &str, delay: Duration) -> Self {
        self.routes
            .insert(url.to_string(), (Reply::Body(body.to_string()), Some(delay)));
        self
    }

    pub fn with_unreachable(mut self, url: &str) -> Self {
        self.routes
            .insert(url.to_string(), (Reply::Unreachable, None));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn call_count(&self, url: &str) -> usize {
        self.calls().iter().filter(|called| *called == url).count()
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn get(&self, url: &str) -> Result<String> {
        self.calls.lock().expect("calls lock").push(url.to_string());
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(current, Ordering::SeqCst);

        let route = self.routes.get(url).cloned();
        if let Some((_, Some(delay))) = &route {
            tokio::time::sleep(*delay).await;
        } else {
            tokio::task::yield_now().await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match route {
            Some((Reply::Body(body), _)) => Ok(body),
            Some((Reply::Unreachable, _)) => Err(Error::network(url, "connection refused")),
            None => Err(Error::NotFound {
                url: url.to_string(),
            }),
        }
    }
}
