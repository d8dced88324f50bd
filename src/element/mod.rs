// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Adapters that turn ordinary logic into chain elements.
//!
//! Every adapter implements [`Element`]: given the chain it will sit in front
//! of, produce the chain with itself prepended. Two shapes cover nearly every
//! pipeline stage:
//!
//! * [`Simple`] works on materialized values. Its node materializes the
//!   remainder first, transforms the result, and wraps it in a fresh leaf. It
//!   can never skip or reshape what comes after it.
//! * [`Module`] works on the raw, unmaterialized remainder and may return any
//!   chain, including the remainder itself (eliding the module) or a different
//!   sub-chain chosen from the parameters.
//!
//! [`Module1`] and [`Module2`] are [`Module`]s that look up one or two
//! parameter kinds before running.

mod conversion;

pub use conversion::IntoElement;

use std::marker::PhantomData;
use std::sync::Arc;

use crate::chain::{Chain, MakeFn, Maker};
use crate::params::{Param, Params};

/// Logic packaged so it can be prepended onto a chain.
pub trait Element<T>: Send + Sync {
    /// Identifier given to the node this element produces.
    fn id(&self) -> &str;

    /// Short text shown for the node when a chain is rendered.
    fn description(&self) -> &str;

    /// `next` with this element in front of it.
    fn to_chain(&self, next: Chain<T>) -> Chain<T>;
}

type TransformFn<T> = dyn Fn(&Params, T) -> T + Send + Sync;

/// Value-level element: transforms what the rest of the chain materializes into.
pub struct Simple<T> {
    id: String,
    description: String,
    transform: Arc<TransformFn<T>>,
}

impl<T> Simple<T> {
    pub fn new<F>(id: impl Into<String>, transform: F) -> Self
    where
        F: Fn(&Params, T) -> T + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            description: "simple".to_string(),
            transform: Arc::new(transform),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl<T: Clone + 'static> Element<T> for Simple<T> {
    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn to_chain(&self, next: Chain<T>) -> Chain<T> {
        let leaf_id = self.id.clone();
        let transform = Arc::clone(&self.transform);
        let maker = Maker::new(self.description.clone(), move |params: &Params, next: Chain<T>| {
            let value = next.make(params);
            Chain::leaf(leaf_id.clone(), transform(params, value))
        });
        Chain::node(self.id.clone(), maker, next)
    }
}

/// Chain-level element: decides what to materialize in place of the remainder.
pub struct Module<T> {
    id: String,
    description: String,
    make: Arc<MakeFn<T>>,
}

impl<T> Module<T> {
    pub fn new<F>(id: impl Into<String>, make: F) -> Self
    where
        F: Fn(&Params, Chain<T>) -> Chain<T> + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            description: "module".to_string(),
            make: Arc::new(make),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl<T> Element<T> for Module<T> {
    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn to_chain(&self, next: Chain<T>) -> Chain<T> {
        let maker = Maker::from_arc(self.description.clone(), Arc::clone(&self.make));
        Chain::node(self.id.clone(), maker, next)
    }
}

/// A [`Module`] driven by one parameter kind.
///
/// ```
/// use the_layercake::chain::Chain;
/// use the_layercake::element::{Element, Module1};
/// use the_layercake::params::{Param, Params};
///
/// struct Enabled;
/// impl Param for Enabled {
///     type Value = bool;
///     fn default_value() -> bool { true }
/// }
///
/// let doubler = Module1::<Enabled, i64>::new("double", |enabled, next: Chain<i64>| {
///     if enabled { Chain::leaf("double", next.make(&Params::empty()) * 2) } else { next }
/// });
/// let chain = doubler.to_chain(Chain::leaf("base", 21));
///
/// assert_eq!(chain.make(&Params::empty()), 42);
/// assert_eq!(chain.make(&Params::empty().with::<Enabled>(false)), 21);
/// ```
pub struct Module1<K, T> {
    inner: Module<T>,
    _kind: PhantomData<fn() -> K>,
}

impl<K: Param, T: 'static> Module1<K, T> {
    pub fn new<F>(id: impl Into<String>, make: F) -> Self
    where
        F: Fn(K::Value, Chain<T>) -> Chain<T> + Send + Sync + 'static,
    {
        Self {
            inner: Module::new(id, move |params: &Params, next| make(params.get::<K>(), next))
                .with_description(format!("module({})", K::name())),
            _kind: PhantomData,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.inner = self.inner.with_description(description);
        self
    }
}

impl<K, T> Element<T> for Module1<K, T> {
    fn id(&self) -> &str {
        self.inner.id()
    }

    fn description(&self) -> &str {
        self.inner.description()
    }

    fn to_chain(&self, next: Chain<T>) -> Chain<T> {
        self.inner.to_chain(next)
    }
}

/// A [`Module`] driven by two parameter kinds.
pub struct Module2<K1, K2, T> {
    inner: Module<T>,
    _kinds: PhantomData<fn() -> (K1, K2)>,
}

impl<K1: Param, K2: Param, T: 'static> Module2<K1, K2, T> {
    pub fn new<F>(id: impl Into<String>, make: F) -> Self
    where
        F: Fn(K1::Value, K2::Value, Chain<T>) -> Chain<T> + Send + Sync + 'static,
    {
        Self {
            inner: Module::new(id, move |params: &Params, next| {
                make(params.get::<K1>(), params.get::<K2>(), next)
            })
            .with_description(format!("module({}, {})", K1::name(), K2::name())),
            _kinds: PhantomData,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.inner = self.inner.with_description(description);
        self
    }
}

impl<K1, K2, T> Element<T> for Module2<K1, K2, T> {
    fn id(&self) -> &str {
        self.inner.id()
    }

    fn description(&self) -> &str {
        self.inner.description()
    }

    fn to_chain(&self, next: Chain<T>) -> Chain<T> {
        self.inner.to_chain(next)
    }
}
