//! Deduplicating, bounded-concurrency reference resolution.

use std::collections::{HashMap, HashSet};

use futures::stream::{self, StreamExt, TryStreamExt};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::client::{ResourceClient, Transport};
use crate::error::{Error, Result};

/// Fetches entity references for a single aggregation call.
///
/// A resolver holds no cache: create one per call. Within one `resolve`
/// invocation each distinct URL is fetched exactly once.
#[derive(Debug)]
pub struct ReferenceResolver<'a, T> {
    client: &'a ResourceClient<T>,
    max_in_flight: usize,
}

impl<'a, T: Transport> ReferenceResolver<'a, T> {
    /// `max_in_flight` of zero is treated as one.
    pub fn new(client: &'a ResourceClient<T>, max_in_flight: usize) -> Self {
        Self {
            client,
            max_in_flight: max_in_flight.max(1),
        }
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight
    }

    /// Resolve every distinct reference into a URL -> entity mapping.
    ///
    /// The first failed fetch fails the whole call; fetches still in flight
    /// at that point are dropped rather than awaited.
    pub async fn resolve<E, I>(&self, refs: I) -> Result<HashMap<String, E>>
    where
        E: DeserializeOwned,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let distinct = dedup(refs);
        debug!(
            distinct = distinct.len(),
            max_in_flight = self.max_in_flight,
            "resolving references"
        );

        let client = self.client;
        stream::iter(distinct)
            .map(move |url| async move {
                let entity = client.fetch_entity::<E>(&url).await?;
                Ok::<_, Error>((url, entity))
            })
            .buffer_unordered(self.max_in_flight)
            .try_collect()
            .await
    }

    /// Resolve `refs` and return the entities in input order.
    ///
    /// Repeated references yield repeated entries but are still fetched once.
    pub async fn resolve_ordered<E>(&self, refs: &[String]) -> Result<Vec<E>>
    where
        E: DeserializeOwned + Clone,
    {
        let mut resolved: HashMap<String, E> = self.resolve(refs).await?;
        let mut remaining: HashMap<&str, usize> = HashMap::new();
        for url in refs {
            *remaining.entry(url.as_str()).or_default() += 1;
        }

        let mut ordered = Vec::with_capacity(refs.len());
        for url in refs {
            let left = remaining.get_mut(url.as_str()).map(|count| {
                *count -= 1;
                *count
            });
            let entity = if left == Some(0) {
                resolved.remove(url)
            } else {
                resolved.get(url).cloned()
            };
            let entity = entity.ok_or_else(|| Error::NotFound { url: url.clone() })?;
            ordered.push(entity);
        }
        Ok(ordered)
    }
}

/// Distinct references in first-seen order.
fn dedup<I>(refs: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen = HashSet::new();
    refs.into_iter()
        .map(|url| url.as_ref().to_string())
        .filter(|url| seen.insert(url.clone()))
        .collect()
}
