// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and operational
//! logging in the crate. Message types follow a struct-based pattern with a `Display`
//! implementation so that:
//!
//! * log text lives in one place instead of being scattered as string literals
//! * every event carries the same structured fields wherever it is emitted
//! * each subsystem owns its own vocabulary
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::builder` - chain assembly events
//! * `messages::registry` - element registration and resolution events
//! * `messages::config` - configuration loading, assembly and validation events
//!
//! Materializing a chain never logs; only assembly and configuration do.
//!
//! # Usage
//!
//! ```rust
//! use the_layercake::observability::messages::builder::ElementPushed;
//! use the_layercake::observability::messages::StructuredLog;
//!
//! let msg = ElementPushed {
//!     element_id: "retry",
//!     description: "module",
//!     depth: 3,
//! };
//!
//! msg.log();
//! ```

pub mod messages;
