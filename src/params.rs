// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Typed, persistent parameter maps.
//!
//! A [`Params`] value maps *parameter kinds* to values of heterogeneous types.
//! Each kind is described by a type implementing [`Param`]: the descriptor type
//! is the key, and it supplies the value type and its default. Two descriptors
//! over the same value type (say, two `u32` limits) are therefore distinct slots.
//!
//! Lookups never fail. An absent kind resolves to its descriptor's default.
//!
//! # Example
//! ```
//! use the_layercake::params::{Param, Params};
//!
//! struct Multiplier;
//! impl Param for Multiplier {
//!     type Value = i64;
//!     fn default_value() -> i64 { 1 }
//! }
//!
//! let empty = Params::empty();
//! let five = empty.with::<Multiplier>(5);
//!
//! assert_eq!(empty.get::<Multiplier>(), 1);
//! assert_eq!(five.get::<Multiplier>(), 5);
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::ops::Add;
use std::sync::Arc;

/// A parameter kind descriptor.
///
/// Implement this on a (usually zero-sized) marker type. The marker type is the
/// identity of the slot, `Value` is what the slot holds.
pub trait Param: 'static {
    type Value: Clone + Send + Sync + 'static;

    /// Value returned when the slot has not been set.
    fn default_value() -> Self::Value;

    /// Name used in diagnostics.
    fn name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

#[derive(Clone)]
struct Slot {
    name: &'static str,
    value: Arc<dyn Any + Send + Sync>,
}

/// Immutable map from parameter kinds to values.
///
/// Cloning is cheap: the slot table is reference counted, and `with`/`merge`
/// copy only the table while sharing every stored value.
#[derive(Clone, Default)]
pub struct Params {
    slots: Arc<HashMap<TypeId, Slot>>,
}

impl Params {
    /// The map with no slots set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Value for kind `K`, or `K::default_value()` when the slot is unset.
    pub fn get<K: Param>(&self) -> K::Value {
        self.slots
            .get(&TypeId::of::<K>())
            .and_then(|slot| slot.value.downcast_ref::<K::Value>())
            .cloned()
            .unwrap_or_else(K::default_value)
    }

    /// Whether kind `K` has been set explicitly.
    pub fn contains<K: Param>(&self) -> bool {
        self.slots.contains_key(&TypeId::of::<K>())
    }

    /// A new map with `K` set to `value`. `self` is unaffected.
    pub fn with<K: Param>(&self, value: K::Value) -> Params {
        let mut slots = (*self.slots).clone();
        slots.insert(
            TypeId::of::<K>(),
            Slot {
                name: K::name(),
                value: Arc::new(value),
            },
        );
        Params {
            slots: Arc::new(slots),
        }
    }

    /// Right-biased union: slots set in `other` win.
    pub fn merge(&self, other: &Params) -> Params {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        let mut slots = (*self.slots).clone();
        for (key, slot) in other.slots.iter() {
            slots.insert(*key, slot.clone());
        }
        Params {
            slots: Arc::new(slots),
        }
    }

    /// Number of explicitly set kinds.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.slots.values().map(|slot| slot.name).collect();
        names.sort_unstable();
        f.debug_struct("Params")
            .field("slot_count", &self.slots.len())
            .field("kinds", &names)
            .finish()
    }
}

impl Add for Params {
    type Output = Params;

    fn add(self, rhs: Params) -> Params {
        self.merge(&rhs)
    }
}

impl Add<&Params> for &Params {
    type Output = Params;

    fn add(self, rhs: &Params) -> Params {
        self.merge(rhs)
    }
}
