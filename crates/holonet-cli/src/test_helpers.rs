// Builders for library types used by renderer tests.
// Kept under `#[cfg(test)]` so it is not part of the public crate API.
use holonet_lib::{Film, PilotRoster, Planet, SpeciesCensus, SpeciesGroup};
use serde_json::json;

pub fn film(title: &str, episode_id: u32) -> Film {
    serde_json::from_value(json!({
        "title": title,
        "episode_id": episode_id,
        "release_date": "1977-05-25",
        "characters": [],
    }))
    .expect("film fixture")
}

pub fn planet(name: &str, population: &str, climate: &str) -> Planet {
    serde_json::from_value(json!({
        "name": name,
        "population": population,
        "climate": climate,
    }))
    .expect("planet fixture")
}

pub fn roster(vehicle: &str, pilots: &[&str]) -> PilotRoster {
    PilotRoster {
        vehicle: serde_json::from_value(json!({
            "name": vehicle,
            "starship_class": "Starfighter",
        }))
        .expect("vehicle fixture"),
        pilots: pilots
            .iter()
            .map(|name| serde_json::from_value(json!({ "name": name })).expect("pilot fixture"))
            .collect(),
    }
}

/// Four characters: three humans and one droid.
pub fn census() -> SpeciesCensus {
    SpeciesCensus {
        film_title: "A New Hope".to_string(),
        episode_id: 4,
        total_characters: 4,
        groups: vec![
            SpeciesGroup {
                name: "Human".to_string(),
                count: 3,
                percentage: 75.0,
                characters: vec!["Luke".into(), "Leia".into(), "Han".into()],
            },
            SpeciesGroup {
                name: "Droid".to_string(),
                count: 1,
                percentage: 25.0,
                characters: vec!["R2-D2".into()],
            },
        ],
    }
}
