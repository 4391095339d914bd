//! Recent search terms for the pilot roster view.

use std::collections::VecDeque;

/// Number of terms retained by [`SearchHistory::default`].
pub const DEFAULT_HISTORY_LEN: usize = 5;

/// Most-recent-first list of distinct successful search terms.
///
/// Recording a term that is already present leaves the history unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHistory {
    terms: VecDeque<String>,
    capacity: usize,
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_LEN)
    }
}

impl SearchHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            terms: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record `term`, returning whether the history changed.
    pub fn record(&mut self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() || self.capacity == 0 || self.contains(term) {
            return false;
        }
        self.terms.push_front(term.to_string());
        self.terms.truncate(self.capacity);
        true
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|existing| existing == term)
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
