//! Core types for the vimgym catalog.

use serde::{Deserialize, Serialize};

/// Challenge difficulty tier.
///
/// Serialized names match the capitalized strings used in the catalog
/// document ("Beginner", "Intermediate", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    /// Get the difficulty name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }

    /// Parse from string (exact, case-sensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Beginner" => Some(Self::Beginner),
            "Intermediate" => Some(Self::Intermediate),
            "Advanced" => Some(Self::Advanced),
            "Expert" => Some(Self::Expert),
            _ => None,
        }
    }
}

/// One learnable challenge/topic shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Missing in the document means no tags.
    #[serde(default)]
    pub tags: Vec<String>,
    pub difficulty: Difficulty,
    pub expected_time_min: u32,
    #[serde(default)]
    pub acceptance_criteria: Vec<String>,
}

/// Multiple-choice flashcard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardEntry {
    pub question: String,
    pub choices: Vec<String>,
    pub correct_index: usize,
    pub hint: String,
}

/// Verification strategy for a practice exercise's final editor state.
///
/// The check kind and its parameters live side by side with the other
/// exercise fields in the document, so this is an internally tagged enum
/// flattened into [`PracticeExercise`]. Unknown kinds fail deserialization
/// instead of falling through to a lenient default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "solution_check", rename_all = "snake_case")]
pub enum SolutionCheck {
    CursorPosition {
        /// 1-based target line, as authored in the catalog.
        target_line: u32,
        target_column: u32,
    },
    TextContent {
        expected_result: String,
    },
    WordNavigation,
    VisualSelection,
    TextObjects,
}

/// Guided practice exercise run inside the embedded editor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeExercise {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub goals: Vec<String>,
    pub hint: String,
    /// Seed buffer content loaded into the editor.
    pub initial_text: String,
    #[serde(flatten)]
    pub solution_check: SolutionCheck,
}

/// Zero-based editor cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorPos {
    pub line: u32,
    pub col: u32,
}
