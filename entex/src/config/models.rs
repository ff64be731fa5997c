//! Configuration models.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Top-level service configuration.
///
/// All fields except `edge_multiplicity` are required; deserialization
/// fails if any of them is absent or wrong-typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Dictionary patterns: literal token sequences tied to a label
    pub entity_dicts: Vec<DictPattern>,

    /// Category allow-list; only spans with these labels appear in output
    pub allowed_labels: Vec<String>,

    /// Select the small lexicon (fast, for tests) over the large one
    pub testing: bool,

    /// Opaque rendering options forwarded to the graph visualization
    pub network_options: serde_json::Value,

    /// Regex patterns tied to a fixed label, overlaid on oracle output
    pub product_patterns: Vec<RegexPattern>,

    /// Whether repeated co-mentions produce repeated graph edges
    #[serde(default)]
    pub edge_multiplicity: EdgeMultiplicity,
}

/// A literal token-sequence rule (e.g. `["San", "Francisco"]` -> `GPE`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictPattern {
    /// Label assigned to matching token runs
    pub label: String,
    /// Token texts that must match consecutively and exactly
    pub pattern: Vec<String>,
}

/// A regular-expression rule tied to a fixed label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegexPattern {
    /// Label assigned to matching character ranges
    pub label: String,
    /// Pattern source, compiled once at load time
    pub pattern: String,
}

/// Policy for repeated co-mentions in the co-occurrence graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeMultiplicity {
    /// Every co-mention adds an edge, duplicates included
    #[default]
    Allow,
    /// At most one edge between any two nodes
    Collapse,
}

impl ServiceConfig {
    /// Labels as an uppercase membership set.
    pub fn allowed_label_set(&self) -> HashSet<String> {
        self.allowed_labels
            .iter()
            .map(|l| l.to_uppercase())
            .collect()
    }

    /// A small ready-made configuration for tests and examples.
    pub fn for_testing() -> Self {
        Self {
            entity_dicts: Vec::new(),
            allowed_labels: vec![
                "PERSON".to_string(),
                "ORG".to_string(),
                "GPE".to_string(),
                "PRODUCT".to_string(),
            ],
            testing: true,
            network_options: serde_json::json!({}),
            product_patterns: Vec::new(),
            edge_multiplicity: EdgeMultiplicity::Allow,
        }
    }
}
