//! Filtering of catalog entries by search term, difficulty and tags.

use crate::types::{CatalogEntry, Difficulty};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Single-select difficulty facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    /// Parse the facet value coming from the UI: `"all"` or a difficulty
    /// name. Anything else is `None`.
    pub fn from_param(s: &str) -> Option<Self> {
        if s == "all" {
            return Some(Self::All);
        }
        Difficulty::from_str(s).map(Self::Only)
    }
}

/// Transient filter state, derived from the UI on every recomputation.
///
/// The default value is the identity filter: every entry is visible.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Case-insensitive substring match over title, description and tags.
    pub search_term: String,
    pub difficulty: DifficultyFilter,
    /// Empty set means no tag filtering. Selected tags use OR semantics:
    /// one shared tag is enough.
    pub tags: BTreeSet<String>,
}

impl FilterState {
    fn matches(&self, entry: &CatalogEntry) -> bool {
        self.matches_search(entry) && self.matches_difficulty(entry) && self.matches_tags(entry)
    }

    fn matches_search(&self, entry: &CatalogEntry) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let needle = self.search_term.to_lowercase();
        entry.title.to_lowercase().contains(&needle)
            || entry.description.to_lowercase().contains(&needle)
            || entry.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }

    fn matches_difficulty(&self, entry: &CatalogEntry) -> bool {
        match self.difficulty {
            DifficultyFilter::All => true,
            DifficultyFilter::Only(d) => entry.difficulty == d,
        }
    }

    fn matches_tags(&self, entry: &CatalogEntry) -> bool {
        if self.tags.is_empty() {
            return true;
        }
        entry.tags.iter().any(|t| self.tags.contains(t))
    }
}

/// Compute the visible subset of the catalog.
///
/// Stable: entries keep their original relative order. The returned list is
/// a view, never a source of truth; completion toggles and counts operate
/// on the full catalog.
pub fn compute_visible<'a>(
    catalog: &'a [CatalogEntry],
    state: &FilterState,
) -> Vec<&'a CatalogEntry> {
    catalog.iter().filter(|entry| state.matches(entry)).collect()
}

/// Per-difficulty entry counts over the unfiltered catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyCounts {
    pub beginner: usize,
    pub intermediate: usize,
    pub advanced: usize,
    pub expert: usize,
}

/// Count entries per difficulty. Independent of any filter state; the UI
/// shows these next to the facet controls.
pub fn difficulty_counts(catalog: &[CatalogEntry]) -> DifficultyCounts {
    let mut counts = DifficultyCounts::default();
    for entry in catalog {
        match entry.difficulty {
            Difficulty::Beginner => counts.beginner += 1,
            Difficulty::Intermediate => counts.intermediate += 1,
            Difficulty::Advanced => counts.advanced += 1,
            Difficulty::Expert => counts.expert += 1,
        }
    }
    counts
}
