//! Records decoded from the remote catalog.
//!
//! Only the identifying field of each record (`name` or `title`) is required.
//! Descriptive fields default to empty values so that sparse payloads still
//! decode, while a payload without its identifying field is rejected as
//! malformed.

use serde::{Deserialize, Serialize};

/// URL that both identifies an entity and addresses its full record.
pub type EntityRef = String;

/// Hypermedia listing envelope returned by collection endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Page<E> {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<E>,
}

impl<E> Page<E> {
    /// The follow-up page URL, treating an empty string like `null`.
    pub fn next_url(&self) -> Option<&str> {
        self.next.as_deref().filter(|next| !next.trim().is_empty())
    }
}

/// A starship or ground vehicle. Both collections share the same pilot links.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Vehicle {
    pub name: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub cost_in_credits: String,
    #[serde(default)]
    pub length: String,
    #[serde(default)]
    pub max_atmosphering_speed: String,
    #[serde(default)]
    pub crew: String,
    #[serde(default)]
    pub passengers: String,
    #[serde(default)]
    pub cargo_capacity: String,
    #[serde(default, alias = "starship_class", alias = "vehicle_class")]
    pub class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyperdrive_rating: Option<String>,
    #[serde(default, rename = "MGLT", skip_serializing_if = "Option::is_none")]
    pub mglt: Option<String>,
    #[serde(default)]
    pub pilots: Vec<EntityRef>,
    #[serde(default)]
    pub url: String,
}

/// A person record. Used both for vehicle pilots and for film characters.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Person {
    pub name: String,
    #[serde(default)]
    pub birth_year: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub mass: String,
    #[serde(default)]
    pub hair_color: String,
    #[serde(default)]
    pub skin_color: String,
    #[serde(default)]
    pub eye_color: String,
    #[serde(default)]
    pub species: Vec<EntityRef>,
    #[serde(default)]
    pub url: String,
}

/// Pilot of a vehicle.
pub type Pilot = Person;
/// Character appearing in a film.
pub type Character = Person;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Film {
    pub title: String,
    #[serde(default)]
    pub episode_id: u32,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub producer: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub characters: Vec<EntityRef>,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Species {
    pub name: String,
    #[serde(default)]
    pub classification: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub url: String,
}

/// A planet record. `population` is kept as the raw catalog string; see
/// [`crate::planets::parse_population`] for how it is interpreted.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Planet {
    pub name: String,
    #[serde(default)]
    pub rotation_period: String,
    #[serde(default)]
    pub orbital_period: String,
    #[serde(default)]
    pub diameter: String,
    #[serde(default)]
    pub climate: String,
    #[serde(default)]
    pub gravity: String,
    #[serde(default)]
    pub terrain: String,
    #[serde(default)]
    pub surface_water: String,
    #[serde(default)]
    pub population: String,
    #[serde(default)]
    pub residents: Vec<EntityRef>,
    #[serde(default)]
    pub films: Vec<EntityRef>,
    #[serde(default)]
    pub url: String,
}
