//! Configuration loading tests against real files.

use std::io::Write;

use entex::config::{ConfigError, ServiceConfig, CONFIG_ENV_VAR};
use tempfile::NamedTempFile;

fn write_config(json: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(json.as_bytes()).expect("Failed to write config");
    file
}

const VALID: &str = r#"{
    "entity_dicts": [
        {"label": "ORG", "pattern": ["Initech"]}
    ],
    "allowed_labels": ["ORG", "GPE", "PRODUCT"],
    "testing": true,
    "network_options": {"physics": false},
    "product_patterns": [
        {"label": "PRODUCT", "pattern": "\\biPhone\\b"}
    ]
}"#;

#[test]
fn valid_file_loads() {
    let file = write_config(VALID);
    let config = ServiceConfig::from_file(file.path()).unwrap();

    assert_eq!(config.allowed_labels.len(), 3);
    assert!(config.testing);
    assert_eq!(config.entity_dicts[0].label, "ORG");
    assert_eq!(config.product_patterns[0].label, "PRODUCT");
    assert_eq!(config.network_options["physics"], serde_json::json!(false));
}

#[test]
fn missing_allowed_labels_fails() {
    let file = write_config(
        r#"{
            "entity_dicts": [],
            "testing": true,
            "network_options": {},
            "product_patterns": []
        }"#,
    );
    let err = ServiceConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)), "{err}");
}

#[test]
fn invalid_regex_fails_at_load() {
    let file = write_config(
        r#"{
            "entity_dicts": [],
            "allowed_labels": ["ORG"],
            "testing": true,
            "network_options": {},
            "product_patterns": [
                {"label": "PRODUCT", "pattern": "(unclosed"}
            ]
        }"#,
    );
    let err = ServiceConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)), "{err}");
}

#[test]
fn malformed_json_fails() {
    let file = write_config("{not json");
    assert!(ServiceConfig::from_file(file.path()).is_err());
}

#[test]
fn missing_file_fails() {
    let err = ServiceConfig::from_file("/nonexistent/entex.json").unwrap_err();
    assert!(matches!(err, ConfigError::FileLoadError(_)), "{err}");
}

#[test]
fn env_var_controls_loading() {
    // Sequential on purpose: both cases touch the same process-wide var.
    std::env::remove_var(CONFIG_ENV_VAR);
    assert!(matches!(
        ServiceConfig::from_env().unwrap_err(),
        ConfigError::MissingEnvVar
    ));

    let file = write_config(VALID);
    std::env::set_var(CONFIG_ENV_VAR, file.path());
    assert!(ServiceConfig::from_env().is_ok());
    std::env::remove_var(CONFIG_ENV_VAR);
}
