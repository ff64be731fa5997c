//! Flat entity report: unique texts, unique (text, label) pairs, and
//! frequency counts.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::oracle::Span;

/// Aggregated view of the resolved, allow-list-filtered spans.
///
/// `entities` and `ents_labels` are deduplicated in first-seen order;
/// `labels` and `ent_counts` keep the full pre-dedup multiplicity, since
/// consumers use them as frequency signals. Count maps are `BTreeMap`s so
/// serialization order is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityReport {
    /// Unique (surface text, label) pairs in first-seen order
    pub ents_labels: Vec<(String, String)>,
    /// Unique surface texts in first-seen order
    pub entities: Vec<String>,
    /// Span count per label
    pub labels: BTreeMap<String, usize>,
    /// Span count per surface text
    pub ent_counts: BTreeMap<String, usize>,
}

/// Filter by the allow-list and aggregate in one pass.
pub(super) fn build_report(spans: &[Span], allowed: &HashSet<String>) -> EntityReport {
    let mut report = EntityReport::default();
    let mut seen_texts: HashSet<&str> = HashSet::new();
    let mut seen_pairs: HashSet<(&str, &str)> = HashSet::new();

    for span in spans.iter().filter(|s| allowed.contains(&s.label)) {
        if seen_texts.insert(&span.text) {
            report.entities.push(span.text.clone());
        }
        if seen_pairs.insert((&span.text, &span.label)) {
            report
                .ents_labels
                .push((span.text.clone(), span.label.clone()));
        }
        *report.labels.entry(span.label.clone()).or_insert(0) += 1;
        *report.ent_counts.entry(span.text.clone()).or_insert(0) += 1;
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::SpanOrigin;

    fn spans() -> Vec<Span> {
        vec![
            Span::new("Apple", "ORG", 0, 5, SpanOrigin::Model),
            Span::new("Apple", "ORG", 20, 25, SpanOrigin::Model),
            Span::new("California", "GPE", 30, 40, SpanOrigin::Model),
            Span::new("Friday", "DATE", 45, 51, SpanOrigin::Model),
        ]
    }

    fn allow(labels: &[&str]) -> HashSet<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn dedups_entities_but_counts_multiplicity() {
        let report = build_report(&spans(), &allow(&["ORG", "GPE"]));
        assert_eq!(report.entities, vec!["Apple", "California"]);
        assert_eq!(report.ents_labels.len(), 2);
        assert_eq!(report.labels["ORG"], 2);
        assert_eq!(report.ent_counts["Apple"], 2);
        assert_eq!(report.ent_counts["California"], 1);
    }

    #[test]
    fn disallowed_labels_are_excluded_everywhere() {
        let report = build_report(&spans(), &allow(&["ORG"]));
        assert!(!report.entities.contains(&"Friday".to_string()));
        assert!(!report.labels.contains_key("DATE"));
        assert!(!report.ent_counts.contains_key("California"));
    }

    #[test]
    fn empty_spans_produce_empty_report() {
        let report = build_report(&[], &allow(&["ORG"]));
        assert_eq!(report, EntityReport::default());
    }
}
