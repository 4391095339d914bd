//! Remote resource client.
//!
//! [`Transport`] performs a single GET and hands back the raw body, while
//! [`ResourceClient`] owns URL construction and decoding. Keeping decoding out
//! of the transport means every payload problem surfaces as
//! [`Error::MalformedResponse`] regardless of which transport produced it.

use std::fmt;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::model::Page;

/// Collections exposed by the catalog API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Films,
    People,
    Planets,
    Species,
    Starships,
    Vehicles,
}

impl Collection {
    /// Path segment under the API root, including the trailing slash.
    pub fn path(self) -> &'static str {
        match self {
            Collection::Films => "films/",
            Collection::People => "people/",
            Collection::Planets => "planets/",
            Collection::Species => "species/",
            Collection::Starships => "starships/",
            Collection::Vehicles => "vehicles/",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path().trim_end_matches('/'))
    }
}

/// A single-request GET capability.
///
/// Implementations map a missing resource to [`Error::NotFound`] and every
/// other transport problem to [`Error::Network`]. They never decode.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<String>;
}

/// reqwest-backed transport used outside of tests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(Error::Http)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| Error::network(url, err))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(Error::network(url, format!("unexpected status {status}")));
        }

        response.text().await.map_err(|err| Error::network(url, err))
    }
}

/// Decoding client over a [`Transport`].
#[derive(Debug, Clone)]
pub struct ResourceClient<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> ResourceClient<T> {
    /// `base_url` is expected to be normalized (see
    /// [`crate::config::normalize_base_url`]).
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// URL of the first page of `collection`.
    pub fn collection_url(&self, collection: Collection) -> String {
        format!("{}{}", self.base_url, collection.path())
    }

    /// Listing URL of `collection` filtered by the `search` parameter.
    pub fn search_url(&self, collection: Collection, query: &str) -> Result<String> {
        let base = self.collection_url(collection);
        let url = Url::parse_with_params(&base, &[("search", query)]).map_err(|err| {
            Error::InvalidBaseUrl {
                url: base.clone(),
                message: err.to_string(),
            }
        })?;
        Ok(url.to_string())
    }

    /// Fetch a bare entity object.
    pub async fn fetch_entity<E: DeserializeOwned>(&self, url: &str) -> Result<E> {
        debug!(url, "fetching entity");
        let body = self.transport.get(url).await?;
        serde_json::from_str(&body).map_err(|err| Error::malformed(url, err))
    }

    /// Fetch and decode one page of a listing.
    pub async fn fetch_page<E: DeserializeOwned>(&self, url: &str) -> Result<Page<E>> {
        debug!(url, "fetching page");
        let body = self.transport.get(url).await?;
        serde_json::from_str(&body).map_err(|err| Error::malformed(url, err))
    }

    /// Keyword search: the first page of `collection` filtered by `query`.
    ///
    /// An empty `results` array is a successful outcome.
    pub async fn search<E: DeserializeOwned>(
        &self,
        collection: Collection,
        query: &str,
    ) -> Result<Page<E>> {
        let url = self.search_url(collection, query)?;
        self.fetch_page(&url).await
    }
}
