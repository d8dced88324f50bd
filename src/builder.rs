// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Incremental chain assembly.
//!
//! A [`ChainBuilder`] starts from a terminal value and prepends one element per
//! push. The most recently pushed element ends up at the head, so its logic
//! wraps the combined effect of everything pushed before it.
//!
//! ```
//! use std::sync::Arc;
//! use the_layercake::builder::ChainBuilder;
//! use the_layercake::params::Params;
//!
//! type Step = Arc<dyn Fn(i64) -> i64 + Send + Sync>;
//!
//! let identity: Step = Arc::new(|x| x);
//! let mut builder = ChainBuilder::new("identity", identity);
//! builder
//!     .push("add_one", |next: Step| -> Step { Arc::new(move |x| next(x) + 1) })
//!     .push("double", |next: Step| -> Step { Arc::new(move |x| next(x) * 2) });
//!
//! let step = builder.make(&Params::empty());
//! assert_eq!(step(5), 12);
//! ```
//!
//! The builder is a single-threaded accumulator. Hand the snapshot returned by
//! [`ChainBuilder::result`] to other threads, not the builder.

use crate::chain::Chain;
use crate::element::{Element, IntoElement};
use crate::observability::messages::builder::{ElementPushed, SnapshotTaken};
use crate::observability::messages::StructuredLog;
use crate::params::Params;

pub struct ChainBuilder<T> {
    chain: Chain<T>,
    depth: usize,
}

impl<T: Clone + 'static> ChainBuilder<T> {
    /// Start from a leaf holding `value`.
    pub fn new(id: impl Into<String>, value: T) -> Self {
        Self::from_chain(Chain::leaf(id, value))
    }

    /// Start from an existing chain; pushes go in front of it.
    pub fn from_chain(chain: Chain<T>) -> Self {
        let depth = chain.depth();
        Self { chain, depth }
    }

    /// Convert `element` and prepend it under `id`.
    pub fn push<E>(&mut self, id: &str, element: E) -> &mut Self
    where
        E: IntoElement<T>,
    {
        let element = element.into_element(id);
        self.push_element(&element)
    }

    /// Prepend an already built element.
    pub fn push_element<E>(&mut self, element: &E) -> &mut Self
    where
        E: Element<T> + ?Sized,
    {
        self.chain = element.to_chain(self.chain.clone());
        self.depth += 1;

        ElementPushed {
            element_id: element.id(),
            description: element.description(),
            depth: self.depth,
        }
        .log();

        self
    }

    /// The chain as it stands now. Later pushes do not affect it.
    pub fn result(&self) -> Chain<T> {
        SnapshotTaken {
            head_id: self.chain.id(),
            depth: self.depth,
        }
        .log();

        self.chain.clone()
    }

    /// Nodes in the current chain: the starting chain's plus one per push.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Materialize the current chain.
    pub fn make(&self, params: &Params) -> T {
        self.chain.make(params)
    }
}
