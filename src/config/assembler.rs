// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::builder::ChainBuilder;
use crate::chain::Chain;
use crate::config::ChainConfig;
use crate::errors::CompositionError;
use crate::observability::messages::config::{ChainAssemblyStarted, ElementSkipped};
use crate::observability::messages::StructuredLog;
use crate::registry::ElementRegistry;

/// Chain assembler - turns a chain configuration into a chain.
///
/// The assembler resolves each enabled element entry against an
/// [`ElementRegistry`] and pushes it onto a [`ChainBuilder`] seeded with the
/// terminal value, in the order the entries are listed. Disabled entries are
/// skipped and logged. The first entry the registry cannot resolve aborts
/// assembly; no partially assembled chain is returned.
///
/// # Examples
///
/// ```
/// use the_layercake::config::{ChainAssembler, ChainConfig};
/// use the_layercake::params::Params;
/// use the_layercake::registry::ElementRegistry;
///
/// let mut registry = ElementRegistry::<i64>::new();
/// registry.register_value("inc", |v: i64| v + 1).unwrap();
///
/// let cfg: ChainConfig = serde_yaml::from_str("
/// id: zero
/// elements:
///   - { id: first, element: inc }
///   - { id: second, element: inc }
/// ").unwrap();
///
/// let chain = ChainAssembler::assemble(&cfg, &registry, 0).unwrap();
/// assert_eq!(chain.make(&Params::empty()), 2);
/// assert_eq!(chain.ids(), vec!["second", "first", "zero"]);
/// ```
pub struct ChainAssembler;

impl ChainAssembler {
    /// Build the chain described by `cfg` over a leaf holding `terminal`.
    ///
    /// # Arguments
    /// * `cfg` - Chain configuration, normally already validated
    /// * `registry` - Factories for the element names `cfg` uses
    /// * `terminal` - Value of the terminal leaf
    pub fn assemble<T: Clone + 'static>(
        cfg: &ChainConfig,
        registry: &ElementRegistry<T>,
        terminal: T,
    ) -> Result<Chain<T>, CompositionError> {
        let start_msg = ChainAssemblyStarted {
            chain_id: &cfg.id,
            element_count: cfg.elements.len(),
        };
        let span = start_msg.span("chain_assembly");
        let _guard = span.enter();
        start_msg.log();

        let mut builder = ChainBuilder::new(cfg.id.clone(), terminal);

        for entry in &cfg.elements {
            if !entry.enabled {
                ElementSkipped {
                    element_id: &entry.id,
                    element: &entry.element,
                }
                .log();
                continue;
            }

            let element = registry.create(entry)?;
            builder.push_element(element.as_ref());
        }

        Ok(builder.result())
    }
}
