//! Practice session evaluation.
//!
//! Grades the final editor state of a practice exercise against its
//! solution check. Only cursor position and buffer content are observable
//! here; the motion-oriented checks (word navigation, visual selection,
//! text objects) give participation credit because the keystrokes that
//! would prove them are not recorded.

use crate::progress::ExerciseStats;
use crate::types::{CursorPos, FlashcardEntry, PracticeExercise, SolutionCheck};
use serde::{Deserialize, Serialize};

/// Allowed column deviation for cursor-position checks.
const COLUMN_TOLERANCE: u32 = 2;

/// Pass/fail verdict with a user-facing message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub success: bool,
    pub message: String,
}

/// Evaluate the final editor state against the exercise's solution check.
pub fn evaluate(exercise: &PracticeExercise, final_text: &str, cursor: CursorPos) -> Verdict {
    match &exercise.solution_check {
        SolutionCheck::CursorPosition {
            target_line,
            target_column,
        } => check_cursor_position(cursor, *target_line, *target_column),
        SolutionCheck::TextContent { expected_result } => {
            check_text_content(final_text, expected_result)
        }
        SolutionCheck::WordNavigation => Verdict {
            success: true,
            message: "Nice word navigation practice! Keep using w, b and e.".to_string(),
        },
        SolutionCheck::VisualSelection => Verdict {
            success: true,
            message: "Good visual mode practice! Selections get faster with use.".to_string(),
        },
        SolutionCheck::TextObjects => Verdict {
            success: true,
            message: "Great text object practice! iw, i\" and i( are worth the habit.".to_string(),
        },
    }
}

fn check_cursor_position(cursor: CursorPos, target_line: u32, target_column: u32) -> Verdict {
    // Targets are authored 1-based; the editor reports 0-based lines.
    let line_ok = cursor.line + 1 == target_line;
    let col_ok = cursor.col.abs_diff(target_column) <= COLUMN_TOLERANCE;

    if line_ok && col_ok {
        Verdict {
            success: true,
            message: format!(
                "Cursor landed at line {}, column {} — right on target.",
                cursor.line + 1,
                cursor.col
            ),
        }
    } else {
        Verdict {
            success: false,
            message: format!(
                "Cursor is at line {}, column {}; the target is line {}, column {}.",
                cursor.line + 1,
                cursor.col,
                target_line,
                target_column
            ),
        }
    }
}

fn check_text_content(final_text: &str, expected: &str) -> Verdict {
    if final_text.trim() == expected.trim() {
        Verdict {
            success: true,
            message: "Buffer matches the expected result.".to_string(),
        }
    } else {
        Verdict {
            success: false,
            message: "Buffer does not match the expected result yet. Check the goals and try again."
                .to_string(),
        }
    }
}

/// Grade a submitted verdict into the running statistics.
pub fn record_verdict(stats: &mut ExerciseStats, verdict: &Verdict) {
    stats.record(verdict.success);
}

/// Outcome of answering a multiple-choice flashcard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardOutcome {
    pub correct: bool,
    pub correct_index: usize,
    /// Hint shown when the chosen answer was wrong.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// Grade a chosen answer against the card.
pub fn grade_choice(card: &FlashcardEntry, chosen_index: usize) -> FlashcardOutcome {
    let correct = chosen_index == card.correct_index;
    FlashcardOutcome {
        correct,
        correct_index: card.correct_index,
        hint: if correct { None } else { Some(card.hint.clone()) },
    }
}
