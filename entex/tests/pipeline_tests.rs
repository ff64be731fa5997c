//! End-to-end tests for the entity resolution pipeline.

use std::sync::Arc;

use entex::config::{DictPattern, EdgeMultiplicity, RegexPattern, ServiceConfig};
use entex::oracle::LexiconOracle;
use entex::pipeline::Pipeline;

fn config_with_product_rule() -> ServiceConfig {
    let mut config = ServiceConfig::for_testing();
    config.product_patterns.push(RegexPattern {
        label: "PRODUCT".to_string(),
        pattern: r"\biPhone\b".to_string(),
    });
    config
}

fn pipeline(config: &ServiceConfig) -> Pipeline {
    let oracle = Arc::new(LexiconOracle::from_config(config).unwrap());
    Pipeline::new(oracle, config).unwrap()
}

mod extraction {
    use super::*;

    #[test]
    fn regex_rule_overrides_model_label() {
        let config = config_with_product_rule();
        let pipeline = pipeline(&config);

        let spans = pipeline
            .extract("Apple released a new iPhone in California.")
            .unwrap();

        let pairs: Vec<(&str, &str)> = spans
            .iter()
            .map(|s| (s.text.as_str(), s.label.as_str()))
            .collect();
        assert!(pairs.contains(&("Apple", "ORG")));
        assert!(pairs.contains(&("iPhone", "PRODUCT")));
        assert!(pairs.contains(&("California", "GPE")));
        assert!(!pairs.contains(&("iPhone", "ORG")));
    }

    #[test]
    fn resolved_spans_never_overlap() {
        let config = config_with_product_rule();
        let pipeline = pipeline(&config);

        let spans = pipeline
            .extract("Apple released a new iPhone in California. Tim Cook praised the iPhone.")
            .unwrap();

        for (i, a) in spans.iter().enumerate() {
            for b in spans.iter().skip(i + 1) {
                assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn unaligned_rule_match_is_dropped() {
        let mut config = ServiceConfig::for_testing();
        // "Phone" only occurs inside the token "iPhone"
        config.product_patterns.push(RegexPattern {
            label: "PRODUCT".to_string(),
            pattern: "Phone".to_string(),
        });
        let pipeline = pipeline(&config);

        let spans = pipeline.extract("The iPhone shipped.").unwrap();
        assert!(spans.iter().all(|s| s.label != "PRODUCT"));
    }

    #[test]
    fn empty_text_yields_empty_result() {
        let config = ServiceConfig::for_testing();
        let pipeline = pipeline(&config);

        assert!(pipeline.extract("").unwrap().is_empty());

        let report = pipeline.analyze("").unwrap();
        assert!(report.entities.is_empty());
        assert!(report.labels.is_empty());
        assert!(report.ent_counts.is_empty());
    }

    #[test]
    fn extraction_is_deterministic() {
        let config = config_with_product_rule();
        let pipeline = pipeline(&config);
        let text = "Apple released a new iPhone in California. Google watched from California.";

        let first = pipeline.analyze(text).unwrap();
        for _ in 0..5 {
            assert_eq!(pipeline.analyze(text).unwrap(), first);
        }
    }
}

mod reporting {
    use super::*;

    #[test]
    fn allow_list_is_a_strict_filter() {
        let mut config = ServiceConfig::for_testing();
        config.allowed_labels = vec!["ORG".to_string()];
        let pipeline = pipeline(&config);

        let report = pipeline
            .analyze("Apple and Tim Cook visited California.")
            .unwrap();

        assert_eq!(report.entities, vec!["Apple"]);
        assert!(report.ents_labels.iter().all(|(_, l)| l == "ORG"));
        assert!(!report.labels.contains_key("GPE"));
        assert!(!report.labels.contains_key("PERSON"));
    }

    #[test]
    fn counts_keep_multiplicity_while_entities_dedup() {
        let config = ServiceConfig::for_testing();
        let pipeline = pipeline(&config);

        let report = pipeline
            .analyze("Apple grew. Apple shipped. Google watched.")
            .unwrap();

        assert_eq!(report.entities, vec!["Apple", "Google"]);
        assert_eq!(report.ent_counts["Apple"], 2);
        assert_eq!(report.ent_counts["Google"], 1);
        assert_eq!(report.labels["ORG"], 3);
    }

    #[test]
    fn dictionary_patterns_surface_in_report() {
        let mut config = ServiceConfig::for_testing();
        config.entity_dicts.push(DictPattern {
            label: "ORG".to_string(),
            pattern: vec!["Initech".to_string()],
        });
        let pipeline = pipeline(&config);

        let report = pipeline.analyze("Initech filed for bankruptcy.").unwrap();
        assert_eq!(report.entities, vec!["Initech"]);
    }
}

mod graphs {
    use super::*;

    #[test]
    fn three_entities_one_sentence() {
        let mut config = ServiceConfig::for_testing();
        config.edge_multiplicity = EdgeMultiplicity::Collapse;
        let pipeline = pipeline(&config);

        let graph = pipeline.graph("Apple met Google in California.").unwrap();

        assert_eq!(graph.nodes.len(), 3);
        assert!(graph.edges.len() <= 3);
        assert!(graph.edges.iter().all(|e| e.from != e.to));
    }

    #[test]
    fn default_multiplicity_allows_repeated_edges() {
        let config = ServiceConfig::for_testing();
        let pipeline = pipeline(&config);

        let graph = pipeline.graph("Apple met Google.").unwrap();
        // both anchors emit the same undirected pair
        assert_eq!(graph.edges.len(), 2);
    }

    #[test]
    fn entities_in_different_sentences_are_not_connected() {
        let mut config = ServiceConfig::for_testing();
        config.edge_multiplicity = EdgeMultiplicity::Collapse;
        let pipeline = pipeline(&config);

        let graph = pipeline.graph("Apple grew. Google watched.").unwrap();
        assert_eq!(graph.nodes.len(), 2);
        assert!(graph.edges.is_empty());
    }
}

mod highlighting {
    use super::*;

    #[test]
    fn marks_allowed_entities_only() {
        let mut config = ServiceConfig::for_testing();
        config.allowed_labels = vec!["ORG".to_string()];
        let pipeline = pipeline(&config);

        let html = pipeline.highlight("Apple hired Tim Cook.").unwrap();
        assert!(html.contains("data-label=\"ORG\">Apple"));
        assert!(!html.contains("data-label=\"PERSON\""));
        assert!(html.contains("Tim Cook"));
    }
}
