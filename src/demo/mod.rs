// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Demonstration elements used by the `the-layercake` binary and the
//! configuration tests: a chain of integer transformers.

mod arithmetic;

pub use arithmetic::{
    arithmetic_registry, identity, params_from_config, ClampEnabled, Multiplier, Transformer,
};
