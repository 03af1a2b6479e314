//! Catalog endpoints: challenges, flashcards, exercises.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};
use crate::AppState;
use vimgym_core::{
    compute_visible, difficulty_counts, CatalogEntry, DifficultyCounts, DifficultyFilter,
    FilterState, FlashcardEntry, PracticeExercise,
};

/// Query parameters for the challenge list, all optional.
#[derive(Debug, Default, Deserialize)]
pub struct ChallengeQuery {
    pub search: Option<String>,
    /// `"all"` or a difficulty name.
    pub difficulty: Option<String>,
    /// Comma-separated tag facet.
    pub tags: Option<String>,
}

/// Challenge annotated with the user's completion state.
#[derive(Debug, Serialize)]
pub struct ChallengeView {
    #[serde(flatten)]
    pub entry: CatalogEntry,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct ChallengeListResponse {
    pub challenges: Vec<ChallengeView>,
    /// Per-difficulty counts over the unfiltered catalog.
    pub counts: DifficultyCounts,
    pub total: usize,
    pub visible: usize,
}

/// GET /api/challenges
pub async fn list_challenges(
    State(state): State<AppState>,
    Query(query): Query<ChallengeQuery>,
) -> Result<Json<ChallengeListResponse>> {
    let filter = filter_from_query(&query)?;
    let all = state.catalog.challenges();
    let visible = compute_visible(all, &filter);

    let store = state.store.lock().expect("store lock");
    let challenges: Vec<ChallengeView> = visible
        .iter()
        .map(|entry| ChallengeView {
            entry: (*entry).clone(),
            completed: store.progress().is_completed(entry.id),
        })
        .collect();

    Ok(Json(ChallengeListResponse {
        visible: challenges.len(),
        total: all.len(),
        counts: difficulty_counts(all),
        challenges,
    }))
}

fn filter_from_query(query: &ChallengeQuery) -> Result<FilterState> {
    let difficulty = match query.difficulty.as_deref() {
        None => DifficultyFilter::All,
        Some(raw) => DifficultyFilter::from_param(raw).ok_or_else(|| {
            ApiError::BadRequest(format!("unknown difficulty facet: {raw}"))
        })?,
    };

    let tags = query
        .tags
        .as_deref()
        .unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    Ok(FilterState {
        search_term: query.search.clone().unwrap_or_default(),
        difficulty,
        tags,
    })
}

#[derive(Debug, Serialize)]
pub struct FlashcardListResponse {
    pub flashcards: Vec<FlashcardEntry>,
}

/// GET /api/flashcards
pub async fn list_flashcards(State(state): State<AppState>) -> Json<FlashcardListResponse> {
    Json(FlashcardListResponse {
        flashcards: state.catalog.flashcards().to_vec(),
    })
}

#[derive(Debug, Serialize)]
pub struct ExerciseListResponse {
    pub exercises: Vec<PracticeExercise>,
}

/// GET /api/exercises
pub async fn list_exercises(State(state): State<AppState>) -> Json<ExerciseListResponse> {
    Json(ExerciseListResponse {
        exercises: state.catalog.exercises().to_vec(),
    })
}

/// GET /api/exercises/:id
pub async fn get_exercise(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PracticeExercise>> {
    state
        .catalog
        .exercise(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("exercise {id}")))
}
