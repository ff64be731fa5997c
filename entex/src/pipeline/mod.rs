//! The entity resolution pipeline.
//!
//! A [`Pipeline`] owns the oracle handle, the compiled regex rules, and the
//! category allow-list, all read-only after construction. Each operation
//! builds its output fresh from one oracle invocation; nothing is cached or
//! shared between requests.

mod graph;
mod highlight;
mod report;

pub use graph::{EntityGraph, GraphEdge, GraphNode};
pub use report::EntityReport;

use std::cmp::Reverse;
use std::collections::HashSet;
use std::sync::Arc;

use regex::Regex;
use tracing::debug;

use crate::config::{ConfigError, EdgeMultiplicity, ServiceConfig};
use crate::oracle::{Analysis, Oracle, Span, SpanOrigin};
use crate::Result;

/// A regex rule compiled at startup, tied to a fixed label.
#[derive(Debug, Clone)]
struct CompiledPattern {
    label: String,
    regex: Regex,
}

/// The entity resolution pipeline.
#[derive(Debug, Clone)]
pub struct Pipeline {
    oracle: Arc<dyn Oracle>,
    patterns: Vec<CompiledPattern>,
    allowed: HashSet<String>,
    edge_multiplicity: EdgeMultiplicity,
}

impl Pipeline {
    /// Build a pipeline from an oracle handle and validated configuration.
    ///
    /// Patterns are compiled here; a pattern that fails to compile is a
    /// configuration error, surfaced before any request is served.
    pub fn new(oracle: Arc<dyn Oracle>, config: &ServiceConfig) -> Result<Self> {
        let mut patterns = Vec::with_capacity(config.product_patterns.len());
        for rule in &config.product_patterns {
            let regex = Regex::new(&rule.pattern).map_err(|e| {
                ConfigError::ValidationError(format!(
                    "pattern '{}' does not compile: {}",
                    rule.label, e
                ))
            })?;
            patterns.push(CompiledPattern {
                label: rule.label.to_uppercase(),
                regex,
            });
        }

        Ok(Self {
            oracle,
            patterns,
            allowed: config.allowed_label_set(),
            edge_multiplicity: config.edge_multiplicity,
        })
    }

    /// The allow-list of categories, uppercase.
    pub fn allowed_labels(&self) -> &HashSet<String> {
        &self.allowed
    }

    /// Name of the underlying oracle.
    pub fn oracle_name(&self) -> &str {
        self.oracle.name()
    }

    /// Run the oracle and the regex overlay, returning the resolved
    /// (non-overlapping) span set.
    pub fn extract(&self, text: &str) -> Result<Vec<Span>> {
        let analysis = self.oracle.analyze(text)?;
        Ok(self.extract_from(text, &analysis))
    }

    /// Flat entity report for the given text.
    pub fn analyze(&self, text: &str) -> Result<EntityReport> {
        let spans = self.extract(text)?;
        Ok(report::build_report(&spans, &self.allowed))
    }

    /// Sentence co-occurrence graph for the given text.
    pub fn graph(&self, text: &str) -> Result<EntityGraph> {
        let analysis = self.oracle.analyze(text)?;
        let spans = self.extract_from(text, &analysis);
        Ok(graph::build_graph(
            &analysis,
            &spans,
            &self.allowed,
            self.edge_multiplicity,
        ))
    }

    /// HTML fragment with allowed entities wrapped in `<mark>` elements.
    pub fn highlight(&self, text: &str) -> Result<String> {
        let spans = self.extract(text)?;
        Ok(highlight::render(text, &spans, &self.allowed))
    }

    /// Overlay regex-rule spans on the oracle's spans and resolve overlaps.
    ///
    /// A regex match that does not line up with token boundaries is dropped
    /// silently; boundary mismatch is common and not operator-actionable.
    fn extract_from(&self, text: &str, analysis: &Analysis) -> Vec<Span> {
        let mut candidates = Vec::new();

        for pattern in &self.patterns {
            for m in pattern.regex.find_iter(text) {
                if analysis.aligns_with_tokens(m.start(), m.end()) {
                    candidates.push(Span::new(
                        m.as_str(),
                        &pattern.label,
                        m.start(),
                        m.end(),
                        SpanOrigin::Rule,
                    ));
                } else {
                    debug!(
                        label = %pattern.label,
                        start = m.start(),
                        end = m.end(),
                        "dropping rule match not aligned to token boundaries"
                    );
                }
            }
        }

        candidates.extend(analysis.spans.iter().cloned());

        resolve_overlaps(candidates)
    }
}

/// Reduce a candidate span set to a maximal subset with no two spans
/// sharing a character position.
///
/// Greedy interval scheduling over a total ordering: start offset, then
/// descending length (longer match preferred), then origin (rule spans
/// beat model spans). The total sort key makes the output deterministic
/// for any candidate ordering.
pub fn resolve_overlaps(mut spans: Vec<Span>) -> Vec<Span> {
    spans.sort_by_key(|s| (s.start, Reverse(s.len()), s.origin));

    let mut kept: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        if !kept.iter().any(|k| k.overlaps(&span)) {
            kept.push(span);
        }
    }
    kept
}
