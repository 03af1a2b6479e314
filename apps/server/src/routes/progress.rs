//! Progress tracking endpoints.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::AppState;
use vimgym_core::{ExportReport, ProgressSnapshot};

/// Identifier reported in progress exports.
const PLATFORM: &str = "vimgym";

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    #[serde(flatten)]
    pub snapshot: ProgressSnapshot,
    #[serde(rename = "completionPercentage")]
    pub completion_percentage: u32,
}

fn progress_response(state: &AppState) -> ProgressResponse {
    let store = state.store.lock().expect("store lock");
    let snapshot = store.progress().clone();
    let completion_percentage = snapshot.completion_percentage(state.catalog.total_challenges());
    ProgressResponse {
        snapshot,
        completion_percentage,
    }
}

/// GET /api/progress
pub async fn get(State(state): State<AppState>) -> Json<ProgressResponse> {
    Json(progress_response(&state))
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub challenge_id: i64,
}

/// POST /api/progress/toggle
///
/// Toggling an ID that is not in the catalog is a logged no-op; the current
/// snapshot is returned either way. The toggle always operates on the full
/// catalog, never on a filtered view.
pub async fn toggle(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<ProgressResponse>> {
    if state.catalog.challenge(payload.challenge_id).is_none() {
        tracing::warn!(
            challenge_id = payload.challenge_id,
            "toggle requested for unknown challenge, ignoring"
        );
    } else {
        let mut store = state.store.lock().expect("store lock");
        let completed = store.toggle(payload.challenge_id)?;
        tracing::debug!(
            challenge_id = payload.challenge_id,
            completed,
            "completion toggled"
        );
    }

    Ok(Json(progress_response(&state)))
}

/// POST /api/progress/reset
///
/// Clears all completions and erases the persisted document. The front-end
/// asks the user for confirmation before calling this.
pub async fn reset(State(state): State<AppState>) -> Result<Json<ProgressResponse>> {
    {
        let mut store = state.store.lock().expect("store lock");
        store.reset()?;
    }
    tracing::info!("progress reset");
    Ok(Json(progress_response(&state)))
}

/// GET /api/progress/export
pub async fn export(State(state): State<AppState>) -> Json<ExportReport> {
    let store = state.store.lock().expect("store lock");
    let report = store
        .progress()
        .export(state.catalog.total_challenges(), Utc::now(), PLATFORM);
    Json(report)
}
