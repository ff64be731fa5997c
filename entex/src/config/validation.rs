//! Configuration validation.
//!
//! Runs once after deserialization. Anything that could otherwise fail at
//! request time (an uncompilable regex, an empty rule) is rejected here.

use super::{ConfigError, Result, ServiceConfig};
use regex::Regex;

pub fn validate_config(config: &ServiceConfig) -> Result<()> {
    if config.allowed_labels.is_empty() {
        return Err(ConfigError::ValidationError(
            "allowed_labels must name at least one category".to_string(),
        ));
    }

    for label in &config.allowed_labels {
        if label.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "allowed_labels contains an empty label".to_string(),
            ));
        }
    }

    for dict in &config.entity_dicts {
        if dict.label.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "entity_dicts entry has an empty label".to_string(),
            ));
        }
        if dict.pattern.is_empty() || dict.pattern.iter().any(|t| t.trim().is_empty()) {
            return Err(ConfigError::ValidationError(format!(
                "entity_dicts entry '{}' has an empty token pattern",
                dict.label
            )));
        }
    }

    for rule in &config.product_patterns {
        if rule.label.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "product_patterns entry has an empty label".to_string(),
            ));
        }
        Regex::new(&rule.pattern).map_err(|e| {
            ConfigError::ValidationError(format!(
                "product_patterns entry '{}' does not compile: {}",
                rule.label, e
            ))
        })?;
    }

    Ok(())
}
