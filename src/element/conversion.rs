// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Conversion of plain values into chain elements.
//!
//! [`IntoElement<T>`] is the capability a value needs before it can be pushed
//! onto a chain of `T`. The bound is checked by the compiler, so a value with no
//! conversion is rejected while the pipeline is being written rather than being
//! dropped when it runs:
//!
//! ```compile_fail
//! use the_layercake::builder::ChainBuilder;
//!
//! let mut builder = ChainBuilder::new("base", 1_i64);
//! // an i64 is not a stage for a chain of i64
//! builder.push("bogus", 5_i64);
//! ```

use super::Simple;
use crate::params::Params;

/// Values that can become an [`Element`](super::Element) of a chain of `T`.
pub trait IntoElement<T> {
    type Element: super::Element<T> + 'static;

    /// Package `self` as an element whose node is identified by `id`.
    fn into_element(self, id: &str) -> Self::Element;
}

/// A `T -> T` function becomes a [`Simple`] element applying it to whatever
/// the rest of the chain materializes into.
impl<T, F> IntoElement<T> for F
where
    T: Clone + 'static,
    F: Fn(T) -> T + Send + Sync + 'static,
{
    type Element = Simple<T>;

    fn into_element(self, id: &str) -> Simple<T> {
        Simple::new(id, move |_: &Params, next: T| self(next)).with_description("fn")
    }
}
