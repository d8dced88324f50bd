// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration loading and validation.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A chain configuration file was read and parsed.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConfigLoaded<'a> {
    pub path: &'a str,
    pub element_count: usize,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded chain configuration from '{}': {} elements",
            self.path, self.element_count
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            element_count = self.element_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "config_loaded",
            span_name = name,
            path = self.path,
            element_count = self.element_count,
        )
    }
}

/// Assembly of a configured chain is starting.
///
/// # Log Level
/// `debug!` - Detailed assembly progress
pub struct ChainAssemblyStarted<'a> {
    pub chain_id: &'a str,
    pub element_count: usize,
}

impl Display for ChainAssemblyStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Assembling chain '{}' from {} configured elements",
            self.chain_id, self.element_count
        )
    }
}

impl StructuredLog for ChainAssemblyStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            chain_id = self.chain_id,
            element_count = self.element_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "chain_assembly",
            span_name = name,
            chain_id = self.chain_id,
            element_count = self.element_count,
        )
    }
}

/// A configured element was left out because it is disabled.
///
/// # Log Level
/// `info!` - Operator-visible decision
pub struct ElementSkipped<'a> {
    pub element_id: &'a str,
    pub element: &'a str,
}

impl Display for ElementSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Skipping disabled element '{}' ({})",
            self.element_id, self.element
        )
    }
}

impl StructuredLog for ElementSkipped<'_> {
    fn log(&self) {
        tracing::info!(
            element_id = self.element_id,
            element = self.element,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "element_skipped",
            span_name = name,
            element_id = self.element_id,
        )
    }
}

/// Configuration validation found problems.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ValidationFailed<'a> {
    pub error_count: usize,
    pub first_error: &'a str,
}

impl Display for ValidationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Chain configuration failed validation with {} error(s), first: {}",
            self.error_count, self.first_error
        )
    }
}

impl StructuredLog for ValidationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            error_count = self.error_count,
            first_error = self.first_error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "validation_failed",
            span_name = name,
            error_count = self.error_count,
        )
    }
}
