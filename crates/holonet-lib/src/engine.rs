//! Engine facade used by callers.

use tracing::info;

use crate::catalog::FilmCatalog;
use crate::census::{self, SpeciesCensus};
use crate::client::{Collection, HttpTransport, ResourceClient, Transport};
use crate::config::{normalize_base_url, ClientConfig};
use crate::error::Result;
use crate::model::{Film, Planet};
use crate::pagination::collect_all;
use crate::pilots::{self, PilotRoster};
use crate::planets::{self, PlanetCatalog};

/// Aggregation engine over one remote catalog.
///
/// Every operation builds its own resolver; nothing fetched by one call is
/// reused by another.
#[derive(Debug)]
pub struct Holonet<T = HttpTransport> {
    client: ResourceClient<T>,
    config: ClientConfig,
}

impl Holonet<HttpTransport> {
    /// Engine backed by the reqwest transport.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Self::with_transport(transport, config)
    }
}

impl<T: Transport> Holonet<T> {
    /// Engine over any transport; used by tests and alternative backends.
    pub fn with_transport(transport: T, config: ClientConfig) -> Result<Self> {
        let base_url = normalize_base_url(&config.base_url)?;
        Ok(Self {
            client: ResourceClient::new(transport, base_url),
            config,
        })
    }

    pub fn client(&self) -> &ResourceClient<T> {
        &self.client
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Pilot roster of the first starship matching `query`.
    pub async fn find_pilots(&self, query: &str) -> Result<PilotRoster> {
        self.find_pilots_in(Collection::Starships, query).await
    }

    /// Pilot roster of the first entry of `collection` matching `query`.
    pub async fn find_pilots_in(&self, collection: Collection, query: &str) -> Result<PilotRoster> {
        pilots::find_pilots(&self.client, collection, query, self.config.max_in_flight).await
    }

    /// Load the film catalog snapshot used by [`Holonet::census_for_film`].
    pub async fn load_film_catalog(&self) -> Result<FilmCatalog> {
        let first_page = self.client.collection_url(Collection::Films);
        let films = collect_all::<_, Film>(&self.client, &first_page).await?;
        info!(films = films.len(), "film catalog loaded");
        Ok(FilmCatalog::new(films))
    }

    pub async fn census_for_film(&self, catalog: &FilmCatalog, title: &str) -> Result<SpeciesCensus> {
        census::census_for_film(&self.client, catalog, title, self.config.max_in_flight).await
    }

    pub async fn most_populated_planet(&self) -> Result<Planet> {
        planets::most_populated_planet(&self.client).await
    }

    pub async fn load_planet_catalog(&self) -> Result<PlanetCatalog> {
        planets::load_planet_catalog(&self.client).await
    }
}
