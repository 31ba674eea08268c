//! Configuration for the listing service module

use crate::domain::validation::DEFAULT_REQUIRED_FIELDS;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Listing service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Collection holding one document per listing
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Deadline for each store operation
    #[serde(default = "default_store_timeout", with = "humantime_serde")]
    pub store_timeout: Duration,

    /// Fields that create and update payloads must carry
    #[serde(default = "default_required_fields")]
    pub required_fields: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            collection: default_collection(),
            store_timeout: default_store_timeout(),
            required_fields: default_required_fields(),
        }
    }
}

fn default_collection() -> String {
    "real_estate".to_string()
}

fn default_store_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_required_fields() -> Vec<String> {
    DEFAULT_REQUIRED_FIELDS.iter().map(|f| f.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_section_is_empty() {
        let cfg: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.store_timeout, Duration::from_secs(10));
        assert_eq!(cfg.collection, "real_estate");
    }

    #[test]
    fn test_humantime_timeout() {
        let cfg: Config = serde_yaml::from_str("store_timeout: 2500ms").unwrap();
        assert_eq!(cfg.store_timeout, Duration::from_millis(2500));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(serde_yaml::from_str::<Config>("retention_days: 3").is_err());
    }
}
