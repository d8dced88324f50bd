// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for chain assembly events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// An element was prepended onto the chain under construction.
///
/// # Log Level
/// `debug!` - Assembly detail
///
/// # Example
/// ```
/// use the_layercake::observability::messages::builder::ElementPushed;
///
/// let msg = ElementPushed {
///     element_id: "timeout",
///     description: "simple",
///     depth: 2,
/// };
///
/// assert_eq!(msg.to_string(), "Pushed element 'timeout' (simple): chain depth now 2");
/// ```
pub struct ElementPushed<'a> {
    pub element_id: &'a str,
    pub description: &'a str,
    pub depth: usize,
}

impl Display for ElementPushed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pushed element '{}' ({}): chain depth now {}",
            self.element_id, self.description, self.depth
        )
    }
}

impl StructuredLog for ElementPushed<'_> {
    fn log(&self) {
        tracing::debug!(
            element_id = self.element_id,
            description = self.description,
            depth = self.depth,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "element_pushed",
            span_name = name,
            element_id = self.element_id,
            depth = self.depth,
        )
    }
}

/// A snapshot of the builder's chain was taken.
///
/// # Log Level
/// `trace!` - Fine-grained assembly detail
///
/// # Example
/// ```
/// use the_layercake::observability::messages::builder::SnapshotTaken;
///
/// let msg = SnapshotTaken { head_id: "retry", depth: 4 };
///
/// tracing::trace!("{}", msg);
/// ```
pub struct SnapshotTaken<'a> {
    pub head_id: &'a str,
    pub depth: usize,
}

impl Display for SnapshotTaken<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Chain snapshot taken at '{}' with depth {}",
            self.head_id, self.depth
        )
    }
}

impl StructuredLog for SnapshotTaken<'_> {
    fn log(&self) {
        tracing::trace!(head_id = self.head_id, depth = self.depth, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "snapshot_taken",
            span_name = name,
            head_id = self.head_id,
            depth = self.depth,
        )
    }
}
