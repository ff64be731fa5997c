//! # Entex
//!
//! Named-entity extraction pipeline: a language oracle produces labeled
//! spans, token boundaries, and sentence boundaries; the pipeline overlays
//! user-supplied regex rules, resolves overlapping candidates, filters by
//! an allow-list of categories, and renders the survivors as a flat entity
//! report, an annotated HTML fragment, or a sentence co-occurrence graph.
//!
//! ## Quick Start
//!
//! ```rust
//! use entex::prelude::*;
//! use std::sync::Arc;
//!
//! fn main() -> entex::Result<()> {
//!     let config = ServiceConfig::for_testing();
//!     let oracle = Arc::new(LexiconOracle::from_config(&config)?);
//!     let pipeline = Pipeline::new(oracle, &config)?;
//!
//!     let report = pipeline.analyze("Apple opened an office in California.")?;
//!     assert!(report.entities.contains(&"Apple".to_string()));
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Oracle**: the opaque language pipeline, constructed once and passed
//!   in explicitly. The built-in [`LexiconOracle`](oracle::LexiconOracle)
//!   is gazetteer-backed; ML-backed oracles plug in through the same trait.
//! - **Pipeline**: pure transformations over oracle output. Every request
//!   builds its results fresh; the only process-wide state is the oracle
//!   and the validated configuration.

pub mod config;
pub mod oracle;
pub mod pipeline;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    pub use crate::config::{DictPattern, EdgeMultiplicity, RegexPattern, ServiceConfig};
    pub use crate::oracle::{Analysis, LexiconOracle, Oracle, Sentence, Span, SpanOrigin, Token};
    pub use crate::pipeline::{EntityGraph, EntityReport, GraphEdge, GraphNode, Pipeline};
    pub use crate::{Error, Result};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for entex operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration error (missing file, malformed JSON, invalid pattern)
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Error raised by the language oracle
    #[error("Oracle error: {0}")]
    Oracle(String),

    /// Other unclassified errors
    #[error("{0}")]
    Other(String),
}

/// Result type for entex operations
pub type Result<T> = std::result::Result<T, Error>;
