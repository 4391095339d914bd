//! Holonet library entry points.
//!
//! This crate walks a hypermedia catalog of films, people, species, planets,
//! and vehicles, resolving cross-references with deduplicated, bounded-parallel
//! fetches, and computes the aggregate views the dashboard needs: a vehicle's
//! pilot roster, a film's species census, and the most populated planet.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod catalog;
pub mod census;
pub mod client;
pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod model;
pub mod pagination;
pub mod pilots;
pub mod planets;
pub mod resolver;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use catalog::FilmCatalog;
pub use census::{SpeciesCensus, SpeciesGroup, HUMAN_SENTINEL};
pub use client::{Collection, HttpTransport, ResourceClient, Transport};
pub use config::ClientConfig;
pub use engine::Holonet;
pub use error::{Error, Result};
pub use history::SearchHistory;
pub use model::{Character, EntityRef, Film, Page, Person, Pilot, Planet, Species, Vehicle};
pub use pagination::{collect_all, walk};
pub use pilots::PilotRoster;
pub use planets::{
    format_population, parse_population, population_level, ClimateKind, PlanetCatalog,
};
pub use resolver::ReferenceResolver;
