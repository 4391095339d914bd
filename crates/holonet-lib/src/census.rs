//! Per-film species census.
//!
//! Characters are attributed to every species they reference; characters
//! without any species reference are attributed to [`HUMAN_SENTINEL`] without
//! a fetch. Percentages are taken against the film's character count, so a
//! character belonging to two species contributes to both groups and the
//! percentages may sum past 100.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::FilmCatalog;
use crate::client::{ResourceClient, Transport};
use crate::error::{Error, Result};
use crate::model::{Character, Species};
use crate::resolver::ReferenceResolver;

/// Species assigned to characters that carry no species reference.
pub const HUMAN_SENTINEL: &str = "Human";

/// One row of a census.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeciesGroup {
    pub name: String,
    pub count: usize,
    /// `count / total_characters * 100`.
    pub percentage: f64,
    /// Names of the contributing characters, in film order.
    pub characters: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeciesCensus {
    pub film_title: String,
    pub episode_id: u32,
    pub total_characters: usize,
    /// Sorted by descending count, ties in first-seen order.
    pub groups: Vec<SpeciesGroup>,
}

impl SpeciesCensus {
    pub fn distinct_species(&self) -> usize {
        self.groups.len()
    }

    pub fn group(&self, name: &str) -> Option<&SpeciesGroup> {
        self.groups.iter().find(|group| group.name == name)
    }

    pub fn percentage_sum(&self) -> f64 {
        self.groups.iter().map(|group| group.percentage).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum SpeciesKey {
    Sentinel,
    Reference(String),
}

/// Characters attributed to one species key, as indexes into the film's
/// character list.
#[derive(Debug)]
struct Attribution {
    key: SpeciesKey,
    members: Vec<usize>,
}

/// Compute the species census for the film titled exactly `title`.
pub async fn census_for_film<T: Transport>(
    client: &ResourceClient<T>,
    catalog: &FilmCatalog,
    title: &str,
    max_in_flight: usize,
) -> Result<SpeciesCensus> {
    let film = catalog
        .find_by_title(title)
        .ok_or_else(|| Error::FilmNotFound {
            title: title.to_string(),
            suggestions: catalog.fuzzy_title_matches(title, 3),
        })?;

    let characters = ReferenceResolver::new(client, max_in_flight)
        .resolve_ordered::<Character>(&film.characters)
        .await?;

    let attributions = attribute(&characters);
    let species_refs: Vec<&str> = attributions
        .iter()
        .filter_map(|attribution| match &attribution.key {
            SpeciesKey::Reference(url) => Some(url.as_str()),
            SpeciesKey::Sentinel => None,
        })
        .collect();
    debug!(
        film = %film.title,
        characters = characters.len(),
        species = species_refs.len(),
        "attributed characters"
    );

    let species: HashMap<String, Species> = ReferenceResolver::new(client, max_in_flight)
        .resolve(species_refs)
        .await?;

    let groups = build_groups(&characters, attributions, &species, film.characters.len());
    info!(film = %film.title, groups = groups.len(), "species census complete");

    Ok(SpeciesCensus {
        film_title: film.title.clone(),
        episode_id: film.episode_id,
        total_characters: film.characters.len(),
        groups,
    })
}

/// Attribute each character to its species keys, in first-seen order.
/// A character listing the same species twice is attributed once.
fn attribute(characters: &[Character]) -> Vec<Attribution> {
    let mut attributions: Vec<Attribution> = Vec::new();
    let mut index: HashMap<SpeciesKey, usize> = HashMap::new();

    for (position, character) in characters.iter().enumerate() {
        let keys: Vec<SpeciesKey> = if character.species.is_empty() {
            vec![SpeciesKey::Sentinel]
        } else {
            character
                .species
                .iter()
                .map(|url| SpeciesKey::Reference(url.clone()))
                .collect()
        };

        for key in keys {
            let slot = *index.entry(key.clone()).or_insert_with(|| {
                attributions.push(Attribution {
                    key,
                    members: Vec::new(),
                });
                attributions.len() - 1
            });
            let members = &mut attributions[slot].members;
            if members.last() != Some(&position) {
                members.push(position);
            }
        }
    }

    attributions
}

/// Name, merge, count, and sort the attributed groups.
///
/// Keys resolving to the same display name (for example a fetched species
/// named "Human" and the sentinel) collapse into one group at the earliest
/// position; a character still counts once per group.
fn build_groups(
    characters: &[Character],
    attributions: Vec<Attribution>,
    species: &HashMap<String, Species>,
    total_characters: usize,
) -> Vec<SpeciesGroup> {
    if total_characters == 0 {
        return Vec::new();
    }

    let mut merged: Vec<(String, Vec<usize>)> = Vec::new();
    for attribution in attributions {
        let name = match &attribution.key {
            SpeciesKey::Sentinel => HUMAN_SENTINEL.to_string(),
            SpeciesKey::Reference(url) => species
                .get(url)
                .map(|species| species.name.clone())
                .unwrap_or_else(|| url.clone()),
        };

        match merged.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, members)) => {
                members.extend(attribution.members);
                members.sort_unstable();
                members.dedup();
            }
            None => merged.push((name, attribution.members)),
        }
    }

    let mut groups: Vec<SpeciesGroup> = merged
        .into_iter()
        .map(|(name, members)| {
            let count = members.len();
            SpeciesGroup {
                name,
                count,
                percentage: count as f64 / total_characters as f64 * 100.0,
                characters: members
                    .into_iter()
                    .map(|position| characters[position].name.clone())
                    .collect(),
            }
        })
        .collect();

    // `sort_by` is stable, which keeps first-seen order among equal counts.
    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(name: &str, species: &[&str]) -> Character {
        Character {
            name: name.to_string(),
            birth_year: String::new(),
            gender: String::new(),
            height: String::new(),
            mass: String::new(),
            hair_color: String::new(),
            skin_color: String::new(),
            eye_color: String::new(),
            species: species.iter().map(|s| s.to_string()).collect(),
            url: String::new(),
        }
    }

    fn species(name: &str) -> Species {
        Species {
            name: name.to_string(),
            classification: String::new(),
            designation: String::new(),
            language: String::new(),
            url: String::new(),
        }
    }

    #[test]
    fn attribution_tracks_first_seen_order_and_dedups_per_character() {
        let characters = vec![
            character("R2-D2", &["droid"]),
            character("Luke", &[]),
            character("Odd", &["droid", "droid", "wookie"]),
        ];
        let attributions = attribute(&characters);

        let keys: Vec<&SpeciesKey> = attributions.iter().map(|a| &a.key).collect();
        assert_eq!(
            keys,
            vec![
                &SpeciesKey::Reference("droid".to_string()),
                &SpeciesKey::Sentinel,
                &SpeciesKey::Reference("wookie".to_string()),
            ]
        );
        assert_eq!(attributions[0].members, vec![0, 2]);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let characters = vec![
            character("Chewbacca", &["wookie"]),
            character("R2-D2", &["droid"]),
            character("C-3PO", &["droid"]),
            character("Luke", &[]),
            character("Leia", &[]),
        ];
        let species_map: HashMap<String, Species> = [
            ("wookie".to_string(), species("Wookie")),
            ("droid".to_string(), species("Droid")),
        ]
        .into_iter()
        .collect();

        let groups = build_groups(&characters, attribute(&characters), &species_map, 5);
        let order: Vec<(&str, usize)> = groups.iter().map(|g| (g.name.as_str(), g.count)).collect();
        assert_eq!(order, vec![("Droid", 2), ("Human", 2), ("Wookie", 1)]);
        assert!((groups[0].percentage - 40.0).abs() < 1e-9);
        assert_eq!(groups[1].characters, vec!["Luke", "Leia"]);
    }

    #[test]
    fn fetched_human_merges_with_sentinel() {
        let characters = vec![
            character("Luke", &[]),
            character("Obi-Wan", &["humans"]),
            character("Yoda", &["yoda"]),
        ];
        let species_map: HashMap<String, Species> = [
            ("humans".to_string(), species("Human")),
            ("yoda".to_string(), species("Yoda's species")),
        ]
        .into_iter()
        .collect();

        let groups = build_groups(&characters, attribute(&characters), &species_map, 3);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "Human");
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[0].characters, vec!["Luke", "Obi-Wan"]);
    }

    #[test]
    fn empty_film_has_no_groups() {
        let groups = build_groups(&[], Vec::new(), &HashMap::new(), 0);
        assert!(groups.is_empty());
    }
}
