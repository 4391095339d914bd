//! Planet catalog, population extremum, and population helpers.

use futures::TryStreamExt;
use serde::Serialize;
use tracing::info;

use crate::client::{Collection, ResourceClient, Transport};
use crate::error::{Error, Result};
use crate::model::Planet;
use crate::pagination::{collect_all, walk};

/// Interpret a catalog population string.
///
/// Returns `None` for the "unknown" sentinel, blank strings, and anything that
/// is not a finite non-negative number.
pub fn parse_population(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("unknown") {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

/// Fold step shared by the streaming and in-memory extremum searches:
/// replace the current best only on a strictly larger population, so the
/// first planet encountered wins ties.
fn keep_most_populated(best: Option<(f64, Planet)>, planet: Planet) -> Option<(f64, Planet)> {
    let Some(population) = parse_population(&planet.population) else {
        return best;
    };
    match best {
        Some((current, _)) if population <= current => best,
        _ => Some((population, planet)),
    }
}

/// Walk the whole planet catalog and return the most populated planet.
pub async fn most_populated_planet<T: Transport>(client: &ResourceClient<T>) -> Result<Planet> {
    let first_page = client.collection_url(Collection::Planets);
    let best = walk::<_, Planet>(client, first_page)
        .try_fold(None, |best, planet| async move {
            Ok(keep_most_populated(best, planet))
        })
        .await?;

    let (population, planet) = best.ok_or(Error::NoPopulatedPlanetFound)?;
    info!(planet = %planet.name, population, "most populated planet found");
    Ok(planet)
}

/// Walk the whole planet catalog into a snapshot.
pub async fn load_planet_catalog<T: Transport>(client: &ResourceClient<T>) -> Result<PlanetCatalog> {
    let first_page = client.collection_url(Collection::Planets);
    let planets = collect_all::<_, Planet>(client, &first_page).await?;
    info!(planets = planets.len(), "planet catalog loaded");
    Ok(PlanetCatalog::new(planets))
}

/// Every planet in the catalog, in walk order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlanetCatalog {
    planets: Vec<Planet>,
}

impl PlanetCatalog {
    pub fn new(planets: Vec<Planet>) -> Self {
        Self { planets }
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    /// Case-insensitive substring match on name, climate, or terrain.
    /// A blank term matches everything.
    pub fn filter(&self, term: &str) -> Vec<&Planet> {
        let needle = term.trim().to_lowercase();
        self.planets
            .iter()
            .filter(|planet| {
                needle.is_empty()
                    || planet.name.to_lowercase().contains(&needle)
                    || planet.climate.to_lowercase().contains(&needle)
                    || planet.terrain.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Number of planets whose population parses.
    pub fn with_known_population(&self) -> usize {
        self.planets
            .iter()
            .filter(|planet| parse_population(&planet.population).is_some())
            .count()
    }

    pub fn most_populated(&self) -> Option<&Planet> {
        let mut best: Option<(f64, &Planet)> = None;
        for planet in &self.planets {
            let Some(population) = parse_population(&planet.population) else {
                continue;
            };
            if best.map_or(true, |(current, _)| population > current) {
                best = Some((population, planet));
            }
        }
        best.map(|(_, planet)| planet)
    }
}

/// Compact population label: `1.2B`, `3.4M`, `5.6K`, plain digits below a
/// thousand, or `unknown`.
pub fn format_population(raw: &str) -> String {
    let Some(value) = parse_population(raw) else {
        return "unknown".to_string();
    };
    if value >= 1e9 {
        format!("{:.1}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.1}K", value / 1e3)
    } else {
        format!("{}", value.round() as u64)
    }
}

/// Population magnitude on a 0-100 scale (0 when unknown).
pub fn population_level(raw: &str) -> u8 {
    let Some(value) = parse_population(raw) else {
        return 0;
    };
    match value {
        v if v >= 1e9 => 100,
        v if v >= 1e8 => 80,
        v if v >= 1e7 => 60,
        v if v >= 1e6 => 40,
        v if v >= 1e5 => 20,
        _ => 10,
    }
}

/// Coarse climate classification used when tagging planets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClimateKind {
    Arid,
    Temperate,
    Tropical,
    Frozen,
    Other,
}

impl ClimateKind {
    /// Classify a free-form climate description; earlier kinds win when a
    /// planet lists several climates.
    pub fn classify(climate: &str) -> Self {
        let climate = climate.to_lowercase();
        if climate.contains("arid") || climate.contains("desert") {
            ClimateKind::Arid
        } else if climate.contains("temperate") {
            ClimateKind::Temperate
        } else if climate.contains("tropical") {
            ClimateKind::Tropical
        } else if climate.contains("frozen") {
            ClimateKind::Frozen
        } else {
            ClimateKind::Other
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ClimateKind::Arid => "arid",
            ClimateKind::Temperate => "temperate",
            ClimateKind::Tropical => "tropical",
            ClimateKind::Frozen => "frozen",
            ClimateKind::Other => "other",
        }
    }
}
