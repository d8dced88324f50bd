// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while resolving named elements into a chain.
//!
//! Statically pushed elements cannot fail: a missing conversion is a compile
//! error. These errors only arise when elements are looked up by name at
//! configuration time, and they always reject the element instead of dropping it.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompositionError {
    /// No factory is registered under the requested element name.
    #[error("Unknown element '{element}' requested for '{id}'")]
    UnknownElement { id: String, element: String },

    /// A factory is already registered under this name.
    #[error("Element '{name}' is already registered")]
    DuplicateElement { name: String },

    /// An element option is present but has the wrong shape.
    #[error("Invalid option '{option}' for element '{id}': {reason}")]
    InvalidOption {
        id: String,
        option: String,
        reason: String,
    },
}
