// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Validation of chain configurations before assembly.
//!
//! Checks run in this order and all problems are collected:
//!
//! 1. The terminal leaf id is not empty
//! 2. Every element entry has an id and names an element
//! 3. Element ids are unique (disabled entries included, so toggling `enabled`
//!    never turns a valid file into an invalid one)
//!
//! Unique ids are a rule of the file format only; a chain built in code may
//! repeat ids. Whether a named element actually exists is decided by the
//! registry at assembly time, not here.

use std::collections::HashSet;

use crate::config::ChainConfig;
use crate::errors::ValidationError;

/// Validate `cfg`, returning every problem found.
pub fn validate_config(cfg: &ChainConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if cfg.id.trim().is_empty() {
        errors.push(ValidationError::EmptyTerminalId);
    }

    let mut seen = HashSet::new();
    for (index, element) in cfg.elements.iter().enumerate() {
        if element.id.trim().is_empty() {
            errors.push(ValidationError::EmptyElementId { index });
            continue;
        }
        if element.element.trim().is_empty() {
            errors.push(ValidationError::MissingElementName {
                element_id: element.id.clone(),
            });
        }
        if !seen.insert(element.id.as_str()) {
            errors.push(ValidationError::DuplicateElementId {
                element_id: element.id.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
