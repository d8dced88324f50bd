// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for element registration and resolution.
//!
//! This module contains message types for logging events related to:
//! * Registering element factories under a name
//! * Resolving configured elements against the registry

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// An element factory was registered.
///
/// # Log Level
/// `debug!` - Setup detail
///
/// # Example
/// ```
/// use the_layercake::observability::messages::registry::ElementRegistered;
///
/// let msg = ElementRegistered { name: "add", registered_count: 1 };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ElementRegistered<'a> {
    pub name: &'a str,
    pub registered_count: usize,
}

impl Display for ElementRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Registered element '{}' ({} registered)",
            self.name, self.registered_count
        )
    }
}

impl StructuredLog for ElementRegistered<'_> {
    fn log(&self) {
        tracing::debug!(
            name = self.name,
            registered_count = self.registered_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "element_registered",
            span_name = name,
            element = self.name,
        )
    }
}

/// A configured element could not be created.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use the_layercake::observability::messages::registry::ElementResolutionFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "no such element");
/// let msg = ElementResolutionFailed {
///     element_id: "retry",
///     element: "retries",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ElementResolutionFailed<'a> {
    pub element_id: &'a str,
    pub element: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ElementResolutionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to resolve element '{}' as '{}': {}",
            self.element_id, self.element, self.error
        )
    }
}

impl StructuredLog for ElementResolutionFailed<'_> {
    fn log(&self) {
        tracing::error!(
            element_id = self.element_id,
            element = self.element,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "element_resolution_failed",
            span_name = name,
            element_id = self.element_id,
            element = self.element,
            error = %self.error,
        )
    }
}
