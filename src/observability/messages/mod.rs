// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for human-readable output and
//! [`StructuredLog`] to emit itself through `tracing` with structured fields
//! at the level appropriate to the event.
//!
//! # Organization
//!
//! * `builder` - chain assembly events
//! * `registry` - element registration and resolution events
//! * `config` - configuration loading, assembly and validation events
//!
//! # Usage Pattern
//!
//! ```rust
//! use the_layercake::observability::messages::config::ConfigLoaded;
//!
//! let msg = ConfigLoaded {
//!     path: "configs/arithmetic.yaml",
//!     element_count: 4,
//! };
//!
//! tracing::info!("{}", msg);
//! ```

use tracing::Span;

pub mod builder;
pub mod config;
pub mod registry;

/// A message that knows how to log itself and open a span carrying its fields.
pub trait StructuredLog {
    /// Emit the message at its designated level.
    fn log(&self);

    /// A span carrying the message's fields, for grouping follow-up events.
    fn span(&self, name: &str) -> Span;
}
