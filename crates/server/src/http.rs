//! HTTP boundary: routes, form extraction, and handlers.
//!
//! The router is deliberately small: the form page, the prediction
//! endpoint, and a health route. Prediction errors render as the error
//! view on a normal 200 response, matching what the form flow expects.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;
use tracing::debug;

use artifact_store::ArtifactStore;

use crate::orchestrator::PredictionOrchestrator;
use crate::views;

/// Shared state injected into every handler
pub struct AppState {
    pub orchestrator: PredictionOrchestrator,
}

impl AppState {
    /// Build the request state over a loaded artifact store
    pub fn new(store: Arc<ArtifactStore>) -> Arc<Self> {
        Arc::new(Self {
            orchestrator: PredictionOrchestrator::new(store),
        })
    }
}

/// The submitted prediction form. Absent fields come through as empty
/// strings and fail validation downstream.
#[derive(Debug, Deserialize)]
pub struct RecommendForm {
    #[serde(default)]
    pub choice: String,
    #[serde(default)]
    pub query: String,
}

/// Build the full Axum router for the prediction front-end.
/// Used by the binary and by tests.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/recommend", post(recommend))
        .route("/health", get(|| async { "ok" }))
        .with_state(state)
}

async fn index() -> Html<String> {
    Html(views::index_page())
}

async fn recommend(
    State(state): State<Arc<AppState>>,
    Form(form): Form<RecommendForm>,
) -> Html<String> {
    match state.orchestrator.recommend(&form.choice, &form.query) {
        Ok(recommendation) => Html(views::result_page(&recommendation)),
        Err(err) => {
            debug!("Request rejected: {}", err);
            Html(views::error_page(&err.to_string()))
        }
    }
}
