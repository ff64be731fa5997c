//! Application state management

use entex::pipeline::Pipeline;

/// Application state shared across all handlers.
///
/// Everything here is read-only after startup: the pipeline (oracle,
/// compiled patterns, allow-list) and the graph rendering options. Each
/// request builds its results fresh.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The entity resolution pipeline
    pub pipeline: Pipeline,

    /// Opaque vis-network options embedded into the graph page
    pub network_options: serde_json::Value,
}

impl AppState {
    /// Create new application state
    pub fn new(pipeline: Pipeline, network_options: serde_json::Value) -> Self {
        Self {
            pipeline,
            network_options,
        }
    }
}
