//! Practice session endpoints: exercise submission, flashcard answers and
//! running statistics.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};
use crate::AppState;
use vimgym_core::{evaluate, grade_choice, CursorPos, ExerciseStats, FlashcardOutcome, Verdict};

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    /// Final buffer content when the user asked for a check.
    pub final_text: String,
    pub cursor: CursorPos,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub verdict: Verdict,
    pub stats: ExerciseStats,
    #[serde(rename = "successRate")]
    pub success_rate: u32,
}

/// POST /api/exercises/:id/submit
pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>> {
    let exercise = state
        .catalog
        .exercise(id)
        .ok_or_else(|| ApiError::NotFound(format!("exercise {id}")))?;

    let verdict = evaluate(exercise, &payload.final_text, payload.cursor);

    let stats = {
        let mut store = state.store.lock().expect("store lock");
        store.record_submission(verdict.success)?
    };

    tracing::debug!(exercise_id = id, success = verdict.success, "exercise submitted");

    Ok(Json(SubmitResponse {
        success_rate: stats.success_rate(),
        verdict,
        stats,
    }))
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub stats: ExerciseStats,
    #[serde(rename = "successRate")]
    pub success_rate: u32,
}

/// GET /api/stats
pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let store = state.store.lock().expect("store lock");
    let stats = *store.stats();
    Json(StatsResponse {
        success_rate: stats.success_rate(),
        stats,
    })
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub choice: usize,
}

/// POST /api/flashcards/:index/answer
pub async fn answer_flashcard(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(payload): Json<AnswerRequest>,
) -> Result<Json<FlashcardOutcome>> {
    let card = state
        .catalog
        .flashcards()
        .get(index)
        .ok_or_else(|| ApiError::NotFound(format!("flashcard {index}")))?;

    Ok(Json(grade_choice(card, payload.choice)))
}
