//! Immutable film catalog snapshot.

use std::cmp::Ordering;

use strsim::jaro_winkler;

use crate::model::Film;

/// Minimum Jaro-Winkler similarity for a title to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Film catalog loaded once per session and shared by reference.
///
/// Films are kept in episode order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilmCatalog {
    films: Vec<Film>,
}

impl FilmCatalog {
    /// Build a snapshot, ordering films by `episode_id`. Films sharing an
    /// episode number keep their catalog order.
    pub fn new(mut films: Vec<Film>) -> Self {
        films.sort_by_key(|film| film.episode_id);
        Self { films }
    }

    pub fn films(&self) -> &[Film] {
        &self.films
    }

    pub fn len(&self) -> usize {
        self.films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    /// Case-sensitive exact title lookup.
    pub fn find_by_title(&self, title: &str) -> Option<&Film> {
        self.films.iter().find(|film| film.title == title)
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.films.iter().map(|film| film.title.as_str())
    }

    /// Up to `limit` titles resembling `title`, best match first.
    pub fn fuzzy_title_matches(&self, title: &str, limit: usize) -> Vec<String> {
        let needle = title.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(f64, &str)> = self
            .titles()
            .filter_map(|candidate| {
                let lowered = candidate.to_lowercase();
                let score = if lowered.contains(&needle) {
                    1.0
                } else {
                    jaro_winkler(&needle, &lowered)
                };
                (score >= SUGGESTION_THRESHOLD).then_some((score, candidate))
            })
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }
}
