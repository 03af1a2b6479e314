pub mod error;
pub mod routes;
pub mod store;

use std::path::Path;
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::store::ProgressStore;
use vimgym_core::Catalog;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub store: Arc<Mutex<ProgressStore>>,
    /// Set when the catalog failed to load; the app keeps running with an
    /// empty catalog and surfaces this notice instead of crashing.
    pub load_notice: Option<Arc<String>>,
}

/// Build the API router. Layers (CORS, tracing, static assets) are added by
/// [`run`]; tests mount this router directly.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/status", get(status))
        .route("/api/challenges", get(routes::catalog::list_challenges))
        .route("/api/flashcards", get(routes::catalog::list_flashcards))
        .route(
            "/api/flashcards/:index/answer",
            post(routes::practice::answer_flashcard),
        )
        .route("/api/exercises", get(routes::catalog::list_exercises))
        .route("/api/exercises/:id", get(routes::catalog::get_exercise))
        .route("/api/exercises/:id/submit", post(routes::practice::submit))
        .route("/api/progress", get(routes::progress::get))
        .route("/api/progress/toggle", post(routes::progress::toggle))
        .route("/api/progress/reset", post(routes::progress::reset))
        .route("/api/progress/export", get(routes::progress::export))
        .route("/api/stats", get(routes::practice::stats))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let catalog_path =
        std::env::var("CATALOG_PATH").unwrap_or_else(|_| "data/catalog.json".to_string());

    // Load failure is degraded, not fatal: the UI shows the notice and the
    // catalog is treated as empty.
    let (catalog, load_notice) = match load_catalog(&catalog_path) {
        Ok(catalog) => {
            tracing::info!(
                path = %catalog_path,
                challenges = catalog.total_challenges(),
                "catalog loaded"
            );
            (catalog, None)
        }
        Err(err) => {
            tracing::error!(path = %catalog_path, %err, "failed to load catalog");
            (
                Catalog::empty(),
                Some(Arc::new(format!("Could not load learning content: {err}"))),
            )
        }
    };

    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data/state".to_string());
    let store = ProgressStore::open(Path::new(&data_dir))?;

    let state = AppState {
        catalog: Arc::new(catalog),
        store: Arc::new(Mutex::new(store)),
        load_notice,
    };

    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

    let app = app(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn load_catalog(path: &str) -> anyhow::Result<Catalog> {
    let raw = std::fs::read_to_string(path)?;
    Ok(Catalog::from_json(&raw)?)
}

async fn health_check() -> &'static str {
    "OK"
}

#[derive(Serialize)]
struct StatusResponse {
    status: &'static str,
    total_challenges: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    notice: Option<String>,
}

/// GET /api/status
async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let degraded = state.load_notice.is_some();
    Json(StatusResponse {
        status: if degraded { "degraded" } else { "ok" },
        total_challenges: state.catalog.total_challenges(),
        notice: state.load_notice.as_ref().map(|n| n.as_ref().clone()),
    })
}
