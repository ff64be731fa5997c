//! Sentence co-occurrence graph construction.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::config::EdgeMultiplicity;
use crate::oracle::{Analysis, Span};

/// A graph node: one distinct entity surface text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Stable integer id assigned at first occurrence, never renumbered
    pub id: usize,
    /// Surface text shown on the node
    pub label: String,
}

/// An undirected edge between two entity nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: usize,
    pub to: usize,
}

/// Node-link graph of entities co-occurring within a sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Assigns node ids by first occurrence of surface text.
#[derive(Debug, Default)]
struct NodeInterner {
    index: HashMap<String, usize>,
    nodes: Vec<GraphNode>,
}

impl NodeInterner {
    fn intern(&mut self, text: &str) -> usize {
        if let Some(&id) = self.index.get(text) {
            return id;
        }
        let id = self.nodes.len();
        self.index.insert(text.to_string(), id);
        self.nodes.push(GraphNode {
            id,
            label: text.to_string(),
        });
        id
    }
}

/// Build the co-occurrence graph from resolved spans.
///
/// Anchors are the allow-list-filtered spans; the co-occurring tokens are
/// every labeled token in the anchor's sentence, whether or not their
/// label is allowed — a deliberate widening versus the flat report.
pub(super) fn build_graph(
    analysis: &Analysis,
    spans: &[Span],
    allowed: &HashSet<String>,
    multiplicity: EdgeMultiplicity,
) -> EntityGraph {
    let mut interner = NodeInterner::default();
    let mut edges: Vec<GraphEdge> = Vec::new();
    let mut seen: HashSet<(usize, usize)> = HashSet::new();

    for anchor in spans.iter().filter(|s| allowed.contains(&s.label)) {
        let anchor_id = interner.intern(&anchor.text);

        let Some(sentence) = analysis.sentence_at(anchor.start) else {
            continue;
        };

        for token in analysis.tokens_in(sentence).filter(|t| t.label.is_some()) {
            let token_id = interner.intern(&token.text);
            if token_id == anchor_id {
                continue;
            }
            match multiplicity {
                EdgeMultiplicity::Allow => edges.push(GraphEdge {
                    from: anchor_id,
                    to: token_id,
                }),
                EdgeMultiplicity::Collapse => {
                    let key = (anchor_id.min(token_id), anchor_id.max(token_id));
                    if seen.insert(key) {
                        edges.push(GraphEdge {
                            from: anchor_id,
                            to: token_id,
                        });
                    }
                }
            }
        }
    }

    EntityGraph {
        nodes: interner.nodes,
        edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::Oracle;

    fn analysis_of(text: &str) -> Analysis {
        crate::oracle::LexiconOracle::new(true, &[])
            .analyze(text)
            .unwrap()
    }

    fn allow(labels: &[&str]) -> HashSet<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn first_seen_assigns_stable_ids() {
        let text = "Apple met Google in California.";
        let analysis = analysis_of(text);
        let spans = analysis.spans.clone();
        let graph = build_graph(
            &analysis,
            &spans,
            &allow(&["ORG", "GPE"]),
            EdgeMultiplicity::Collapse,
        );

        assert_eq!(graph.nodes[0].label, "Apple");
        assert_eq!(graph.nodes[0].id, 0);
        let ids: Vec<usize> = graph.nodes.iter().map(|n| n.id).collect();
        assert_eq!(ids, (0..graph.nodes.len()).collect::<Vec<_>>());
    }

    #[test]
    fn no_self_loops() {
        let analysis = analysis_of("Apple met Google.");
        let spans = analysis.spans.clone();
        let graph = build_graph(
            &analysis,
            &spans,
            &allow(&["ORG"]),
            EdgeMultiplicity::Allow,
        );
        assert!(graph.edges.iter().all(|e| e.from != e.to));
    }

    #[test]
    fn collapse_dedups_undirected_pairs() {
        let analysis = analysis_of("Apple met Google.");
        let spans = analysis.spans.clone();
        let collapsed = build_graph(
            &analysis,
            &spans,
            &allow(&["ORG"]),
            EdgeMultiplicity::Collapse,
        );
        // Apple->Google and Google->Apple collapse into one edge
        assert_eq!(collapsed.edges.len(), 1);

        let multi = build_graph(
            &analysis,
            &spans,
            &allow(&["ORG"]),
            EdgeMultiplicity::Allow,
        );
        assert_eq!(multi.edges.len(), 2);
    }

    #[test]
    fn disallowed_tokens_still_participate() {
        // PERSON is not allowed, so Tim Cook is no anchor, but its labeled
        // tokens still co-occur with the ORG anchor.
        let analysis = analysis_of("Apple hired Tim Cook.");
        let spans = analysis.spans.clone();
        let graph = build_graph(
            &analysis,
            &spans,
            &allow(&["ORG"]),
            EdgeMultiplicity::Collapse,
        );
        assert!(graph.nodes.iter().any(|n| n.label == "Tim"));
        assert!(graph.nodes.iter().any(|n| n.label == "Cook"));
    }
}
