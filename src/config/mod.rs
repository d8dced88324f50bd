// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod assembler;
mod loader;
mod validation;

pub mod consts;

pub use assembler::ChainAssembler;
pub use loader::{load_and_validate_config, load_config, ChainConfig, ElementConfig};
pub use validation::validate_config;
