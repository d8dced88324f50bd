// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod composition;
mod config;

pub use composition::CompositionError;
pub use config::{ConfigError, ValidationError};
