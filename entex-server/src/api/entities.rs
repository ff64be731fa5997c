//! JSON entity extraction endpoint

use std::sync::Arc;

use axum::{extract::State, response::Json, Json as JsonExtractor};
use entex::pipeline::EntityReport;
use serde::{Deserialize, Serialize};

use crate::{error::ServerResult, state::AppState};

/// Request body for `POST /entities`
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Text to run the pipeline on
    pub text: String,
}

/// Response body for `POST /entities`
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub entities: EntityReport,
}

/// Extract entities from the submitted text and return the flat report.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    JsonExtractor(request): JsonExtractor<AnalyzeRequest>,
) -> ServerResult<Json<AnalyzeResponse>> {
    let report = state.pipeline.analyze(&request.text)?;
    Ok(Json(AnalyzeResponse { entities: report }))
}
