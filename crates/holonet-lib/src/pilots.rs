//! Pilot roster aggregation.

use serde::Serialize;
use tracing::{debug, info};

use crate::client::{Collection, ResourceClient, Transport};
use crate::error::{Error, Result};
use crate::model::{Pilot, Vehicle};
use crate::resolver::ReferenceResolver;

/// A vehicle together with its resolved pilots, in the vehicle's reference order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PilotRoster {
    pub vehicle: Vehicle,
    pub pilots: Vec<Pilot>,
}

/// Search `collection` for `query`, take the first hit, and resolve its pilots.
///
/// The search endpoint's relevance order is trusted as-is. A blank query or an
/// empty result set yields [`Error::NoMatch`]; in neither case are pilot
/// references fetched.
pub async fn find_pilots<T: Transport>(
    client: &ResourceClient<T>,
    collection: Collection,
    query: &str,
    max_in_flight: usize,
) -> Result<PilotRoster> {
    let query = query.trim();
    if query.is_empty() {
        return Err(Error::NoMatch {
            query: query.to_string(),
        });
    }

    let page = client.search::<Vehicle>(collection, query).await?;
    debug!(%collection, query, hits = page.results.len(), "vehicle search complete");

    let Some(vehicle) = page.results.into_iter().next() else {
        return Err(Error::NoMatch {
            query: query.to_string(),
        });
    };

    let resolver = ReferenceResolver::new(client, max_in_flight);
    let pilots = resolver.resolve_ordered::<Pilot>(&vehicle.pilots).await?;
    info!(vehicle = %vehicle.name, pilots = pilots.len(), "resolved pilot roster");

    Ok(PilotRoster { vehicle, pilots })
}
