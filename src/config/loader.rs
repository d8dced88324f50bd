// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::DEFAULT_TERMINAL_ID;
use crate::errors::{CompositionError, ConfigError};
use crate::observability::messages::config::{ConfigLoaded, ValidationFailed};
use crate::observability::messages::StructuredLog;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Configuration for one chain.
///
/// Elements are pushed in the order listed, so the last entry becomes the head
/// of the chain and wraps everything listed before it.
///
/// Element ids must be unique within a file. That is a rule of the file format,
/// checked by [`validate_config`](crate::config::validate_config); chains
/// themselves allow repeated ids.
///
/// # Fields
/// * `id` - Id of the terminal leaf (defaults to `terminal`)
/// * `elements` - Element entries, in push order
/// * `params` - Raw parameter values; the collaborator decides which parameter
///   kinds they populate
///
/// # Example
/// ```yaml
/// id: identity
/// params:
///   multiplier: 3
/// elements:
///   - id: add_one
///     element: add
///     options:
///       amount: 1
///   - id: triple
///     element: multiply
///     enabled: false
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
    #[serde(default = "default_terminal_id")]
    pub id: String,
    #[serde(default)]
    pub elements: Vec<ElementConfig>,
    #[serde(default)]
    pub params: HashMap<String, serde_yaml::Value>,
}

impl ChainConfig {
    /// Decode the raw parameter `key`, `None` when it is absent.
    pub fn param<V: DeserializeOwned>(&self, key: &str) -> Result<Option<V>, CompositionError> {
        decode(&self.params, &self.id, key)
    }

    /// Entries that will actually be pushed.
    pub fn enabled_elements(&self) -> impl Iterator<Item = &ElementConfig> {
        self.elements.iter().filter(|e| e.enabled)
    }
}

/// Configuration for a single element of a chain.
///
/// # Fields
/// * `id` - Id of the node the element produces
/// * `element` - Registry name of the element to build
/// * `enabled` - Disabled entries are skipped (defaults to true)
/// * `options` - Element-specific options handed to the factory
#[derive(Debug, Clone, Deserialize)]
pub struct ElementConfig {
    pub id: String,
    pub element: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub options: HashMap<String, serde_yaml::Value>,
}

impl ElementConfig {
    /// Decode option `key`, `None` when it is absent.
    ///
    /// ```
    /// use the_layercake::config::ElementConfig;
    ///
    /// let config: ElementConfig = serde_yaml::from_str("
    /// id: retry
    /// element: retries
    /// options:
    ///   attempts: 3
    /// ").unwrap();
    ///
    /// assert_eq!(config.option::<u32>("attempts").unwrap(), Some(3));
    /// assert_eq!(config.option::<u32>("backoff").unwrap(), None);
    /// assert!(config.option::<bool>("attempts").is_err());
    /// ```
    pub fn option<V: DeserializeOwned>(&self, key: &str) -> Result<Option<V>, CompositionError> {
        decode(&self.options, &self.id, key)
    }
}

fn decode<V: DeserializeOwned>(
    values: &HashMap<String, serde_yaml::Value>,
    id: &str,
    key: &str,
) -> Result<Option<V>, CompositionError> {
    match values.get(key) {
        None => Ok(None),
        Some(value) => serde_yaml::from_value(value.clone())
            .map(Some)
            .map_err(|e| CompositionError::InvalidOption {
                id: id.to_string(),
                option: key.to_string(),
                reason: e.to_string(),
            }),
    }
}

fn default_terminal_id() -> String {
    DEFAULT_TERMINAL_ID.to_string()
}

fn default_enabled() -> bool {
    true
}

/// Load a chain configuration from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ChainConfig, ConfigError> {
    let content = fs::read_to_string(path.as_ref())?;
    let cfg: ChainConfig = serde_yaml::from_str(&content)?;

    ConfigLoaded {
        path: &path.as_ref().display().to_string(),
        element_count: cfg.elements.len(),
    }
    .log();

    Ok(cfg)
}

/// Load a chain configuration and validate it.
///
/// Every validation problem is reported, not just the first.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<ChainConfig, ConfigError> {
    let cfg = load_config(path)?;

    if let Err(errors) = crate::config::validate_config(&cfg) {
        let first_error = errors.first().map(|e| e.to_string()).unwrap_or_default();
        ValidationFailed {
            error_count: errors.len(),
            first_error: &first_error,
        }
        .log();
        return Err(ConfigError::Validation(errors));
    }

    Ok(cfg)
}
