//! Configuration module for the ticketing engine.
//!
//! Provides configuration loading and validation for the pricing table,
//! purchase limits and logging.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ticketing_engine::config::load_config;
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("custom/config.yaml"))?;
//! ```
//!
//! # Example YAML
//!
//! ```yaml
//! pricing:
//!   tickets:
//!     - category: ADULT
//!       unit_price: 25
//!       requires_seat: true
//!     - category: CHILD
//!       unit_price: 15
//!       requires_seat: true
//!     - category: INFANT
//!       unit_price: 0
//! limits:
//!   min_tickets: 1
//!   max_tickets: 25
//! observability:
//!   logging:
//!     level: info
//!     format: pretty
//! ```

mod limits;
mod observability;
mod pricing;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ticketing::value_objects::TicketCategory;

pub use limits::LimitsConfig;
pub use observability::{LoggingConfig, ObservabilityConfig};
pub use pricing::{PricingConfig, PricingRuleConfig};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Pricing table configuration.
    #[serde(default)]
    pub pricing: PricingConfig,
    /// Purchase limit configuration.
    #[serde(default)]
    pub limits: LimitsConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Load configuration from a YAML file.
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or("config.yaml");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    let config: Config = serde_yaml_bw::from_str(&contents)?;
    validate_config(&config)?;

    Ok(config)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let config: Config = serde_yaml_bw::from_str(yaml)?;
    validate_config(&config)?;
    Ok(config)
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.limits.min_tickets < 1 {
        return Err(ConfigError::ValidationError(
            "limits.min_tickets must be at least 1".to_string(),
        ));
    }

    if config.limits.max_tickets < config.limits.min_tickets {
        return Err(ConfigError::ValidationError(format!(
            "limits.max_tickets ({}) must not be below limits.min_tickets ({})",
            config.limits.max_tickets, config.limits.min_tickets
        )));
    }

    let mut seen: Vec<TicketCategory> = Vec::new();
    for rule in &config.pricing.tickets {
        if rule.unit_price.is_negative() {
            return Err(ConfigError::ValidationError(format!(
                "pricing for {} must not be negative",
                rule.category
            )));
        }
        if seen.contains(&rule.category) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate pricing rule for {}",
                rule.category
            )));
        }
        seen.push(rule.category);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::Money;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn empty_yaml_yields_defaults() {
        let config = load_config_from_string("{}").unwrap();
        assert_eq!(config.limits.max_tickets, 25);
        assert_eq!(config.pricing.tickets.len(), 3);
        assert_eq!(config.observability.logging.level, "info");
    }

    #[test]
    fn yaml_overrides_are_applied() {
        let yaml = r"
pricing:
  tickets:
    - category: ADULT
      unit_price: 30
      requires_seat: true
    - category: CHILD
      unit_price: 12
      requires_seat: true
limits:
  max_tickets: 10
";
        let config = load_config_from_string(yaml).unwrap();
        let table = config.pricing.to_table();

        assert_eq!(table.unit_price(TicketCategory::Adult), Money::from_pounds(30));
        assert_eq!(config.limits.to_limits().max_tickets, 10);
        // min falls back to the default
        assert_eq!(config.limits.min_tickets, 1);
    }

    #[test]
    fn unknown_category_fails_to_parse() {
        let yaml = r"
pricing:
  tickets:
    - category: SENIOR
      unit_price: 10
";
        let err = load_config_from_string(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn negative_price_fails_validation() {
        let yaml = r"
pricing:
  tickets:
    - category: ADULT
      unit_price: -5
";
        let err = load_config_from_string(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn duplicate_rule_fails_validation() {
        let yaml = r"
pricing:
  tickets:
    - category: ADULT
      unit_price: 25
    - category: ADULT
      unit_price: 20
";
        let err = load_config_from_string(yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate pricing rule"));
    }

    #[test]
    fn zero_min_tickets_fails_validation() {
        let yaml = r"
limits:
  min_tickets: 0
";
        let err = load_config_from_string(yaml).unwrap_err();
        assert!(err.to_string().contains("min_tickets"));
    }

    #[test]
    fn inverted_limits_fail_validation() {
        let yaml = r"
limits:
  min_tickets: 5
  max_tickets: 2
";
        let err = load_config_from_string(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_config(Some("does-not-exist.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }
}
