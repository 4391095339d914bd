//! Lazy traversal of paginated collections.

use std::collections::{HashSet, VecDeque};

use futures::stream::{self, Stream, TryStreamExt};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::client::{ResourceClient, Transport};
use crate::error::{Error, Result};
use crate::model::Page;

struct WalkState<'a, T, E> {
    client: &'a ResourceClient<T>,
    buffered: VecDeque<E>,
    next: Option<String>,
    visited: HashSet<String>,
}

/// Walk a collection starting at `first_page`, yielding records in page order.
///
/// Pages are requested one at a time and only once the previous page has been
/// drained, so a consumer that stops early never triggers further requests.
/// The stream ends after the first page without a `next` link, or with the
/// first error encountered.
pub fn walk<'a, T, E>(
    client: &'a ResourceClient<T>,
    first_page: impl Into<String>,
) -> impl Stream<Item = Result<E>> + 'a
where
    T: Transport,
    E: DeserializeOwned + 'a,
{
    let state = WalkState {
        client,
        buffered: VecDeque::new(),
        next: Some(first_page.into()),
        visited: HashSet::new(),
    };

    stream::try_unfold(state, |mut state| async move {
        loop {
            if let Some(item) = state.buffered.pop_front() {
                return Ok(Some((item, state)));
            }

            let Some(url) = state.next.take() else {
                return Ok(None);
            };
            if !state.visited.insert(url.clone()) {
                return Err(Error::malformed(&url, "pagination cycle: page already visited"));
            }

            let page: Page<E> = state.client.fetch_page(&url).await?;
            debug!(
                url = %url,
                page = state.visited.len(),
                results = page.results.len(),
                "walked page"
            );
            state.next = page.next_url().map(str::to_string);
            state.buffered.extend(page.results);
        }
    })
}

/// Drain a full walk into memory.
pub async fn collect_all<T, E>(client: &ResourceClient<T>, first_page: &str) -> Result<Vec<E>>
where
    T: Transport,
    E: DeserializeOwned,
{
    walk(client, first_page).try_collect().await
}
