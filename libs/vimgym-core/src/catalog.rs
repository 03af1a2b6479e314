//! Catalog loading and validation.
//!
//! The catalog is a single JSON document fetched once at startup:
//! ```json
//! {
//!   "challenges": [ ... ],
//!   "flashcards_sample": [ ... ],
//!   "practice_exercises": [ ... ]
//! }
//! ```
//! Validation happens here, once, so the rest of the application can treat
//! every entry as well formed.

use crate::error::{CatalogError, Result};
use crate::types::{CatalogEntry, FlashcardEntry, PracticeExercise};
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    challenges: Vec<CatalogEntry>,
    #[serde(default)]
    flashcards_sample: Vec<FlashcardEntry>,
    #[serde(default)]
    practice_exercises: Vec<PracticeExercise>,
}

/// In-memory catalog, immutable once loaded.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    challenges: Vec<CatalogEntry>,
    flashcards: Vec<FlashcardEntry>,
    exercises: Vec<PracticeExercise>,
}

impl Catalog {
    /// Parse and validate a catalog document.
    pub fn from_json(content: &str) -> Result<Self> {
        let doc: CatalogDocument = serde_json::from_str(content)?;

        let mut seen_ids = HashSet::new();
        for entry in &doc.challenges {
            if !seen_ids.insert(entry.id) {
                return Err(CatalogError::DuplicateChallengeId { id: entry.id });
            }
            if entry.expected_time_min == 0 {
                return Err(CatalogError::InvalidExpectedTime { id: entry.id });
            }
        }

        for (index, card) in doc.flashcards_sample.iter().enumerate() {
            if card.choices.len() < 2 {
                return Err(CatalogError::FlashcardTooFewChoices { index });
            }
            if card.correct_index >= card.choices.len() {
                return Err(CatalogError::FlashcardAnswerOutOfRange {
                    index,
                    correct_index: card.correct_index,
                });
            }
        }

        let mut seen_exercise_ids = HashSet::new();
        for exercise in &doc.practice_exercises {
            if !seen_exercise_ids.insert(exercise.id) {
                return Err(CatalogError::DuplicateExerciseId { id: exercise.id });
            }
        }

        Ok(Self {
            challenges: doc.challenges,
            flashcards: doc.flashcards_sample,
            exercises: doc.practice_exercises,
        })
    }

    /// Empty catalog, used as the degraded state when loading fails.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn challenges(&self) -> &[CatalogEntry] {
        &self.challenges
    }

    pub fn flashcards(&self) -> &[FlashcardEntry] {
        &self.flashcards
    }

    pub fn exercises(&self) -> &[PracticeExercise] {
        &self.exercises
    }

    /// Look up a challenge by ID.
    pub fn challenge(&self, id: i64) -> Option<&CatalogEntry> {
        self.challenges.iter().find(|c| c.id == id)
    }

    /// Look up a practice exercise by ID.
    pub fn exercise(&self, id: i64) -> Option<&PracticeExercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    /// Number of challenges, the denominator for completion percentage.
    pub fn total_challenges(&self) -> usize {
        self.challenges.len()
    }
}
