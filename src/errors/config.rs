// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use super::CompositionError;

/// Problems found while validating a chain configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Two elements share the same id.
    #[error("Duplicate element ID: '{element_id}'")]
    DuplicateElementId { element_id: String },

    /// An element entry has an empty id.
    #[error("Element at position {index} has an empty id")]
    EmptyElementId { index: usize },

    /// An element entry does not name what to build.
    #[error("Element '{element_id}' does not name an element to build")]
    MissingElementName { element_id: String },

    /// The terminal leaf has an empty id.
    #[error("Chain terminal id must not be empty")]
    EmptyTerminalId,
}

/// Errors from loading a chain configuration and assembling it.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Configuration validation failed:\n{}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error(transparent)]
    Composition(#[from] CompositionError),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
