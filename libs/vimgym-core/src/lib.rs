//! Core library for the vimgym Vim-training application.
//!
//! Provides:
//! - Catalog loading and validation (challenges, flashcards, exercises)
//! - Filtering of catalog entries by search term, difficulty and tags
//! - Completion/progress tracking with a flat persisted snapshot format
//! - Practice session evaluation (per-exercise solution checks)

pub mod catalog;
pub mod error;
pub mod evaluate;
pub mod filter;
pub mod progress;
pub mod types;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use evaluate::{evaluate, grade_choice, record_verdict, FlashcardOutcome, Verdict};
pub use filter::{compute_visible, difficulty_counts, DifficultyCounts, DifficultyFilter, FilterState};
pub use progress::{ExerciseStats, ExportReport, ProgressSnapshot, StatsSnapshot};
pub use types::{CatalogEntry, CursorPos, Difficulty, FlashcardEntry, PracticeExercise, SolutionCheck};
