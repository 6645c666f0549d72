//! # Configuration
//!
//! Policies that tune the composition mechanisms without changing their
//! contracts. Every field has a default, so an empty JSON object is a valid
//! configuration:
//!
//! ```rust
//! use composition_rs::config::{CompositionConfig, FailurePolicy};
//!
//! let config = CompositionConfig::from_json_str(r#"{ "registry": { "failure_policy": "isolate" } }"#)?;
//! assert_eq!(config.registry.failure_policy, FailurePolicy::Isolate);
//! assert_eq!(config.chain.separator, ", ");
//! # Ok::<(), composition_rs::CompositionError>(())
//! ```

use crate::error::{CompositionError, CompositionResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Separator placed between a wrapped description and a decorator label.
pub const DEFAULT_SEPARATOR: &str = ", ";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositionConfig {
    /// Wrapper chain settings
    pub chain: ChainConfig,
    /// Notification registry settings
    pub registry: RegistryConfig,
}

/// Settings for wrapper chains
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Text inserted between the inner description and each label
    pub separator: String,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// What a subject does when one subscriber's update fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop the fan-out and return the failure to the caller
    #[default]
    Abort,
    /// Keep notifying the remaining subscribers and report failures afterwards
    Isolate,
}

/// Settings for notification registries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub failure_policy: FailurePolicy,
    /// Ignore a subscribe call for an observer that is already registered
    pub deduplicate: bool,
}

impl CompositionConfig {
    /// Parse and validate a configuration from JSON text
    pub fn from_json_str(json: &str) -> CompositionResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        tracing::debug!(?config, "loaded composition config");
        Ok(config)
    }

    /// Read, parse and validate a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> CompositionResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "reading composition config");
        Self::from_json_str(&contents)
    }

    /// Serialize to pretty JSON
    pub fn to_json_string(&self) -> CompositionResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> CompositionResult<()> {
        if self.chain.separator.is_empty() {
            return Err(CompositionError::invalid_config(
                "chain.separator must not be empty",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_minimal_contract() {
        let config = CompositionConfig::default();
        assert_eq!(config.chain.separator, ", ");
        assert_eq!(config.registry.failure_policy, FailurePolicy::Abort);
        assert!(!config.registry.deduplicate);
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = CompositionConfig::from_json_str("{}").unwrap();
        assert_eq!(config, CompositionConfig::default());
    }

    #[test]
    fn test_empty_separator_rejected() {
        let result = CompositionConfig::from_json_str(r#"{ "chain": { "separator": "" } }"#);
        assert!(matches!(result, Err(CompositionError::InvalidConfig(_))));
    }

    #[test]
    fn test_unknown_policy_is_a_parse_error() {
        let result =
            CompositionConfig::from_json_str(r#"{ "registry": { "failure_policy": "retry" } }"#);
        assert!(matches!(result, Err(CompositionError::Serialization(_))));
    }
}
