//! Browser form endpoints

use std::sync::Arc;

use axum::{
    extract::{Form, State},
    response::Html,
};
use serde::Deserialize;
use tracing::debug;

use crate::{error::ServerResult, render, state::AppState};

/// Fields of the manual entry form
#[derive(Debug, Deserialize)]
pub struct FormSubmission {
    /// Text to analyze
    pub msg: String,
    /// Either `extract` or `visualize`
    pub action: String,
}

/// Serve the manual text entry form.
pub async fn show_form() -> Html<String> {
    Html(render::form_page())
}

/// Handle a form submission: highlighted text or a co-occurrence graph.
///
/// An unrecognized action renders a fallback fragment with a 200 status;
/// only pipeline failures become HTTP errors.
pub async fn submit_form(
    State(state): State<Arc<AppState>>,
    Form(submission): Form<FormSubmission>,
) -> ServerResult<Html<String>> {
    let html = match submission.action.as_str() {
        "extract" => {
            let fragment = state.pipeline.highlight(&submission.msg)?;
            render::highlight_page(&fragment)
        }
        "visualize" => {
            let graph = state.pipeline.graph(&submission.msg)?;
            render::graph_page(&graph, &state.network_options)
        }
        other => {
            debug!(action = %other, "unrecognized form action");
            render::fallback_page(other)
        }
    };

    Ok(Html(html))
}
