// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Persistent structural edits addressed by element id.
//!
//! Every edit returns a new chain. Edits only ever target nodes; the terminal
//! leaf is replaced with [`Chain::concat`]. Naming an id that is not present
//! returns an equivalent chain rather than an error.

use std::sync::Arc;

use super::Chain;
use crate::element::Element;

impl<T: Clone> Chain<T> {
    /// `element` in front of this chain.
    pub fn prepend<E>(&self, element: &E) -> Chain<T>
    where
        E: Element<T> + ?Sized,
    {
        element.to_chain(self.clone())
    }

    /// Drop every node identified by `id`.
    pub fn remove(&self, id: &str) -> Chain<T> {
        self.transform(|sub| skip_matching(sub, id))
    }

    /// Swap every node identified by `id` for `element` over the same remainder.
    pub fn replace<E>(&self, id: &str, element: &E) -> Chain<T>
    where
        E: Element<T> + ?Sized,
    {
        self.transform(|sub| match sub {
            Chain::Node { id: node_id, next, .. } if node_id == id => {
                element.to_chain((**next).clone())
            }
            other => other.clone(),
        })
    }

    /// Splice `element` in ahead of every node identified by `id`.
    pub fn insert_before<E>(&self, id: &str, element: &E) -> Chain<T>
    where
        E: Element<T> + ?Sized,
    {
        match self {
            Chain::Leaf { .. } => self.clone(),
            Chain::Node {
                id: node_id,
                maker,
                next,
            } => {
                let rest = Chain::Node {
                    id: node_id.clone(),
                    maker: maker.clone(),
                    next: Arc::new(next.insert_before(id, element)),
                };
                if node_id == id {
                    element.to_chain(rest)
                } else {
                    rest
                }
            }
        }
    }

    /// Splice `element` in behind every node identified by `id`.
    pub fn insert_after<E>(&self, id: &str, element: &E) -> Chain<T>
    where
        E: Element<T> + ?Sized,
    {
        match self {
            Chain::Leaf { .. } => self.clone(),
            Chain::Node {
                id: node_id,
                maker,
                next,
            } => {
                let edited = next.insert_after(id, element);
                let next = if node_id == id {
                    element.to_chain(edited)
                } else {
                    edited
                };
                Chain::Node {
                    id: node_id.clone(),
                    maker: maker.clone(),
                    next: Arc::new(next),
                }
            }
        }
    }
}

/// First sub-chain, starting at `chain`, whose head is not a node called `id`.
fn skip_matching<T: Clone>(chain: &Chain<T>, id: &str) -> Chain<T> {
    let mut current = chain;
    while let Chain::Node { id: node_id, next, .. } = current {
        if node_id != id {
            break;
        }
        current = &**next;
    }
    current.clone()
}
