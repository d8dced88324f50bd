// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod builder;       // incremental chain assembly
pub mod chain;         // persistent chain of elements
pub mod config;        // YAML chain configuration
pub mod demo;          // demo arithmetic elements
pub mod element;       // element adapters + conversion
pub mod errors;        // error handling
mod integration_tests;
pub mod observability;
pub mod params;        // typed parameter map
pub mod registry;      // named element factories

pub use builder::ChainBuilder;
pub use chain::{Chain, Maker};
pub use element::{Element, IntoElement, Module, Module1, Module2, Simple};
pub use params::{Param, Params};
