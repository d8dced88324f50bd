// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Persistent chains of named pipeline elements.
//!
//! A [`Chain<T>`] is either a [`Chain::Leaf`] holding a finished value, or a
//! [`Chain::Node`] holding a [`Maker`] and the remainder of the chain. Chains
//! are only ever grown by prepending onto an existing chain, so every chain
//! ends in exactly one leaf and none can contain a cycle.
//!
//! Nothing in this module mutates a chain. Every operation returns a new value,
//! and the remainder behind a node is held in an `Arc` so previously built
//! chains share their unchanged suffix with the ones built from them.
//!
//! # Materialization
//!
//! [`Chain::make`] collapses a chain into a `T`. A leaf returns its value. A node
//! first asks its maker for a *replacement* chain, given the parameters and the
//! raw remainder, and then materializes that replacement. The indirection lets a
//! node skip itself (by returning the remainder), splice in another sub-chain,
//! or wrap the value the remainder produces.
//!
//! ```
//! use the_layercake::chain::{Chain, Maker};
//! use the_layercake::params::Params;
//!
//! let leaf = Chain::leaf("base", 10);
//! let skip = Maker::new("skip", |_params, next| next);
//! let chain = Chain::node("skipper", skip, leaf);
//!
//! assert_eq!(chain.make(&Params::empty()), 10);
//! assert_eq!(chain.tails().len(), 2);
//! ```

mod edit;

use std::fmt;
use std::ops::Add;
use std::sync::Arc;

use crate::params::Params;

/// Signature shared by every maker: parameters and the raw remainder in, replacement out.
pub type MakeFn<T> = dyn Fn(&Params, Chain<T>) -> Chain<T> + Send + Sync;

/// The function a [`Chain::Node`] runs at materialization time, plus a short
/// description used when rendering the chain.
pub struct Maker<T> {
    description: Arc<str>,
    make: Arc<MakeFn<T>>,
}

impl<T> Maker<T> {
    pub fn new<F>(description: impl Into<String>, make: F) -> Self
    where
        F: Fn(&Params, Chain<T>) -> Chain<T> + Send + Sync + 'static,
    {
        Self::from_arc(description, Arc::new(make))
    }

    /// Wrap an already shared maker function without re-boxing it.
    pub fn from_arc(description: impl Into<String>, make: Arc<MakeFn<T>>) -> Self {
        Self {
            description: Arc::from(description.into()),
            make,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Compute the replacement chain for `next` under `params`.
    pub fn apply(&self, params: &Params, next: Chain<T>) -> Chain<T> {
        (self.make)(params, next)
    }

    /// Whether both makers run the very same function.
    pub fn same_as(&self, other: &Maker<T>) -> bool {
        Arc::ptr_eq(&self.make, &other.make)
    }
}

impl<T> Clone for Maker<T> {
    fn clone(&self) -> Self {
        Self {
            description: Arc::clone(&self.description),
            make: Arc::clone(&self.make),
        }
    }
}

impl<T> fmt::Debug for Maker<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Maker")
            .field("description", &self.description)
            .finish()
    }
}

/// A persistent chain of pipeline elements terminating in one value.
pub enum Chain<T> {
    /// A step that decides, at materialization time, what to materialize in its place.
    Node {
        id: String,
        maker: Maker<T>,
        next: Arc<Chain<T>>,
    },
    /// The terminal value.
    Leaf { id: String, value: T },
}

impl<T> Chain<T> {
    pub fn leaf(id: impl Into<String>, value: T) -> Self {
        Chain::Leaf {
            id: id.into(),
            value,
        }
    }

    pub fn node(id: impl Into<String>, maker: Maker<T>, next: Chain<T>) -> Self {
        Self::node_shared(id, maker, Arc::new(next))
    }

    /// Build a node over a remainder that is already shared with other chains.
    pub fn node_shared(id: impl Into<String>, maker: Maker<T>, next: Arc<Chain<T>>) -> Self {
        Chain::Node {
            id: id.into(),
            maker,
            next,
        }
    }

    /// Identifier of the head element.
    pub fn id(&self) -> &str {
        match self {
            Chain::Node { id, .. } | Chain::Leaf { id, .. } => id,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Chain::Leaf { .. })
    }

    /// The remainder behind the head, `None` for a leaf.
    pub fn next(&self) -> Option<&Chain<T>> {
        match self {
            Chain::Node { next, .. } => Some(&**next),
            Chain::Leaf { .. } => None,
        }
    }

    /// Pre-order walk from the head down to the leaf, visiting every sub-chain once.
    pub fn foreach<F>(&self, mut visit: F)
    where
        F: FnMut(&Chain<T>),
    {
        let mut current = self;
        loop {
            visit(current);
            match current {
                Chain::Node { next, .. } => current = &**next,
                Chain::Leaf { .. } => break,
            }
        }
    }

    /// Number of nodes in front of the terminal leaf.
    pub fn depth(&self) -> usize {
        let mut nodes = 0;
        self.foreach(|sub| {
            if !sub.is_leaf() {
                nodes += 1;
            }
        });
        nodes
    }

    /// Head-to-tail element identifiers, leaf included.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        let mut current = self;
        loop {
            ids.push(current.id());
            match current {
                Chain::Node { next, .. } => current = &**next,
                Chain::Leaf { .. } => return ids,
            }
        }
    }

    /// Whether any sub-chain satisfies `pred`.
    pub fn exists<F>(&self, pred: F) -> bool
    where
        F: Fn(&Chain<T>) -> bool,
    {
        let mut found = false;
        self.foreach(|sub| found = found || pred(sub));
        found
    }

    /// Whether any element carries `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.exists(|sub| sub.id() == id)
    }
}

impl<T: Clone> Chain<T> {
    /// Materialize the chain under `params`.
    pub fn make(&self, params: &Params) -> T {
        match self {
            Chain::Leaf { value, .. } => value.clone(),
            Chain::Node { maker, next, .. } => {
                let replacement = maker.apply(params, (**next).clone());
                replacement.make(params)
            }
        }
    }

    /// Rewrite the chain top-down.
    ///
    /// `rewrite` is applied to this chain first. When it returns a node, the
    /// traversal continues into *that* node's remainder, so a rewrite that changes
    /// topology is honored by the rest of the walk. A leaf ends the walk.
    pub fn transform<F>(&self, rewrite: F) -> Chain<T>
    where
        F: Fn(&Chain<T>) -> Chain<T>,
    {
        self.transform_with(&rewrite)
    }

    fn transform_with<F>(&self, rewrite: &F) -> Chain<T>
    where
        F: Fn(&Chain<T>) -> Chain<T>,
    {
        let rewritten = rewrite(self);
        match &rewritten {
            Chain::Node { id, maker, next } => Chain::Node {
                id: id.clone(),
                maker: maker.clone(),
                next: Arc::new(next.transform_with(rewrite)),
            },
            Chain::Leaf { .. } => rewritten,
        }
    }

    /// Every suffix of the chain, from the whole chain down to the leaf alone.
    pub fn tails(&self) -> Vec<Chain<T>> {
        let mut tails = Vec::new();
        self.foreach(|sub| tails.push(sub.clone()));
        tails
    }

    /// Put `right` in place of this chain's leaf.
    ///
    /// The leaf's own value is discarded: concatenation replaces the terminal
    /// element, it does not append after it.
    pub fn concat(&self, right: &Chain<T>) -> Chain<T> {
        match self {
            Chain::Node { id, maker, next } => Chain::Node {
                id: id.clone(),
                maker: maker.clone(),
                next: Arc::new(next.concat(right)),
            },
            Chain::Leaf { .. } => right.clone(),
        }
    }
}

/// Unlinks uniquely owned nodes one at a time so dropping a long chain never
/// recurses once per node. A suffix still shared with another chain is left alone.
impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        let Chain::Node { next, .. } = self else {
            return;
        };
        while Arc::get_mut(next).is_some() {
            let rest = match &**next {
                Chain::Node { next: rest, .. } => Arc::clone(rest),
                Chain::Leaf { .. } => return,
            };
            let unlinked = std::mem::replace(next, rest);
            if Arc::try_unwrap(unlinked).is_err() {
                return;
            }
        }
    }
}

impl<T: Clone> Clone for Chain<T> {
    fn clone(&self) -> Self {
        match self {
            Chain::Node { id, maker, next } => Chain::Node {
                id: id.clone(),
                maker: maker.clone(),
                next: Arc::clone(next),
            },
            Chain::Leaf { id, value } => Chain::Leaf {
                id: id.clone(),
                value: value.clone(),
            },
        }
    }
}

/// Structural equality: same ids, same maker functions, equal leaf values.
impl<T: PartialEq> PartialEq for Chain<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Chain::Node { id, maker, next },
                Chain::Node {
                    id: other_id,
                    maker: other_maker,
                    next: other_next,
                },
            ) => {
                id == other_id
                    && maker.same_as(other_maker)
                    && (Arc::ptr_eq(next, other_next) || next == other_next)
            }
            (
                Chain::Leaf { id, value },
                Chain::Leaf {
                    id: other_id,
                    value: other_value,
                },
            ) => id == other_id && value == other_value,
            _ => false,
        }
    }
}

impl<T: Clone> Add for Chain<T> {
    type Output = Chain<T>;

    fn add(self, right: Chain<T>) -> Chain<T> {
        self.concat(&right)
    }
}

impl<T: Clone> Add<&Chain<T>> for &Chain<T> {
    type Output = Chain<T>;

    fn add(self, right: &Chain<T>) -> Chain<T> {
        self.concat(right)
    }
}

impl<T> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("depth", &self.depth())
            .field("ids", &self.ids())
            .finish()
    }
}

/// One line per element, head first: `<id>: Node = <maker>` or `<id>: Leaf = <value>`.
impl<T: fmt::Debug> fmt::Display for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::new();
        self.foreach(|sub| {
            lines.push(match sub {
                Chain::Node { id, maker, .. } => {
                    format!("{}: Node = {}", id, maker.description())
                }
                Chain::Leaf { id, value } => format!("{}: Leaf = {:?}", id, value),
            })
        });
        write!(f, "{}", lines.join("\n"))
    }
}
