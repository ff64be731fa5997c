//! API implementation for the entex HTTP server

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, Json},
    routing::{get, post},
    Router,
};

use crate::render;
use crate::state::AppState;

pub mod entities;
pub mod form;

/// Create the main router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/entities", post(entities::analyze))
        .route("/form", get(form::show_form))
        .route("/form", post(form::submit_form))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Static welcome page
async fn welcome() -> Html<String> {
    Html(render::welcome_page())
}

/// Health check endpoint with capability reporting
async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let mut labels: Vec<&String> = state.pipeline.allowed_labels().iter().collect();
    labels.sort();

    Json(serde_json::json!({
        "status": "OK",
        "oracle": state.pipeline.oracle_name(),
        "allowed_labels": labels,
    }))
}
