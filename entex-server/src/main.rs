use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use entex::config::ServiceConfig;
use entex::oracle::{LexiconOracle, Oracle};
use entex::pipeline::Pipeline;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod api;
mod cli;
mod error;
mod render;
mod state;

use crate::api::create_router;
use crate::cli::CliArgs;
use crate::state::AppState;

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli_args = CliArgs::parse();

    // Set up logging
    let filter = if let Some(ref level) = cli_args.log_level {
        tracing_subscriber::EnvFilter::new(level)
    } else {
        tracing_subscriber::EnvFilter::from_default_env()
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting entex server v{}", entex::VERSION);

    // Load configuration before binding anything; a missing or malformed
    // file means the process never serves traffic.
    let config = if let Some(path) = &cli_args.config_file {
        ServiceConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?
    } else {
        ServiceConfig::from_env().context("loading configuration from ENTEX_CONFIG")?
    };
    info!(
        allowed_labels = config.allowed_labels.len(),
        dict_patterns = config.entity_dicts.len(),
        regex_patterns = config.product_patterns.len(),
        "Configuration loaded"
    );

    // Build the oracle and pipeline once; both are read-only afterwards.
    let oracle = Arc::new(LexiconOracle::from_config(&config)?);
    info!(oracle = oracle.name(), "Language oracle initialized");

    let pipeline = Pipeline::new(oracle, &config)?;
    let state = Arc::new(AppState::new(pipeline, config.network_options.clone()));

    let app = create_router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    // Start the server
    let port = cli_args.port.unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;

    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
