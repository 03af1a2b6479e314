//! Error types for vimgym-core.

use thiserror::Error;

/// Result type alias using CatalogError.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while loading the catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("duplicate challenge ID {id}")]
    DuplicateChallengeId { id: i64 },

    #[error("challenge {id} has non-positive expected time")]
    InvalidExpectedTime { id: i64 },

    #[error("flashcard {index} has fewer than two choices")]
    FlashcardTooFewChoices { index: usize },

    #[error("flashcard {index} answer index {correct_index} is out of range")]
    FlashcardAnswerOutOfRange { index: usize, correct_index: usize },

    #[error("duplicate exercise ID {id}")]
    DuplicateExerciseId { id: i64 },
}
