// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Elements resolved by name at configuration time.
//!
//! Where elements are chosen from a configuration file instead of in code, the
//! compiler cannot check that a conversion exists. [`ElementRegistry`] is the
//! runtime counterpart: a table of named factories. Asking for a name nobody
//! registered is an explicit [`CompositionError::UnknownElement`], never a
//! silently missing stage.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::ElementConfig;
use crate::element::{Element, IntoElement};
use crate::errors::CompositionError;
use crate::observability::messages::registry::{ElementRegistered, ElementResolutionFailed};
use crate::observability::messages::StructuredLog;

/// Builds an element from its configuration entry.
pub type ElementFactory<T> =
    Box<dyn Fn(&ElementConfig) -> Result<Arc<dyn Element<T>>, CompositionError> + Send + Sync>;

/// Table of element factories keyed by element name.
pub struct ElementRegistry<T> {
    factories: HashMap<String, ElementFactory<T>>,
}

impl<T: 'static> ElementRegistry<T> {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register `factory` under `name`. Names are unique.
    pub fn register<F>(&mut self, name: &str, factory: F) -> Result<&mut Self, CompositionError>
    where
        F: Fn(&ElementConfig) -> Result<Arc<dyn Element<T>>, CompositionError>
            + Send
            + Sync
            + 'static,
    {
        if self.factories.contains_key(name) {
            return Err(CompositionError::DuplicateElement {
                name: name.to_string(),
            });
        }
        self.factories.insert(name.to_string(), Box::new(factory));

        ElementRegistered {
            name,
            registered_count: self.factories.len(),
        }
        .log();

        Ok(self)
    }

    /// Register a value that converts into an element, such as a `T -> T` function.
    /// Each configured use gets its own converted copy, identified by the entry's id.
    pub fn register_value<V>(&mut self, name: &str, value: V) -> Result<&mut Self, CompositionError>
    where
        V: IntoElement<T> + Clone + Send + Sync + 'static,
    {
        self.register(name, move |config: &ElementConfig| {
            let element: Arc<dyn Element<T>> = Arc::new(value.clone().into_element(&config.id));
            Ok(element)
        })
    }

    /// Build the element a configuration entry asks for.
    pub fn create(&self, config: &ElementConfig) -> Result<Arc<dyn Element<T>>, CompositionError> {
        let result = match self.factories.get(&config.element) {
            Some(factory) => factory(config),
            None => Err(CompositionError::UnknownElement {
                id: config.id.clone(),
                element: config.element.clone(),
            }),
        };

        if let Err(error) = &result {
            ElementResolutionFailed {
                element_id: &config.id,
                element: &config.element,
                error,
            }
            .log();
        }

        result
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl<T: 'static> Default for ElementRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for ElementRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.factories.keys().collect();
        names.sort_unstable();
        f.debug_struct("ElementRegistry")
            .field("element_count", &self.factories.len())
            .field("element_names", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::Chain;
    use crate::element::Simple;
    use crate::params::Params;
    use std::collections::HashMap;

    fn entry(id: &str, element: &str) -> ElementConfig {
        ElementConfig {
            id: id.to_string(),
            element: element.to_string(),
            enabled: true,
            options: HashMap::new(),
        }
    }

    fn registry() -> ElementRegistry<i64> {
        let mut registry = ElementRegistry::<i64>::new();
        registry
            .register("offset", |config: &ElementConfig| {
                let amount = config.option::<i64>("amount")?.unwrap_or(1);
                let element: Arc<dyn Element<i64>> =
                    Arc::new(Simple::new(config.id.clone(), move |_: &Params, v: i64| v + amount));
                Ok(element)
            })
            .unwrap()
            .register_value("negate", |v: i64| -v)
            .unwrap();
        registry
    }

    #[test]
    fn test_create_table_driven() {
        struct TestCase {
            name: &'static str,
            config: ElementConfig,
            input: i64,
            expected: i64,
        }

        let mut with_amount = entry("plus_five", "offset");
        with_amount
            .options
            .insert("amount".to_string(), serde_yaml::Value::from(5));

        let test_cases = vec![
            TestCase {
                name: "factory with default option",
                config: entry("plus_one", "offset"),
                input: 1,
                expected: 2,
            },
            TestCase {
                name: "factory with explicit option",
                config: with_amount,
                input: 1,
                expected: 6,
            },
            TestCase {
                name: "registered conversion",
                config: entry("flip", "negate"),
                input: 3,
                expected: -3,
            },
        ];

        let registry = registry();
        for test_case in test_cases {
            let element = registry
                .create(&test_case.config)
                .unwrap_or_else(|e| panic!("Test case '{}': {}", test_case.name, e));
            assert_eq!(element.id(), test_case.config.id, "Test case '{}'", test_case.name);

            let chain = element.to_chain(Chain::leaf("base", test_case.input));
            assert_eq!(
                chain.make(&Params::empty()),
                test_case.expected,
                "Test case '{}'",
                test_case.name
            );
        }
    }

    #[test]
    fn test_unknown_element_is_rejected() {
        let result = registry().create(&entry("mystery", "does_not_exist"));

        match result {
            Err(CompositionError::UnknownElement { id, element }) => {
                assert_eq!(id, "mystery");
                assert_eq!(element, "does_not_exist");
            }
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("unregistered element must not resolve"),
        }
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let mut registry = registry();
        let result = registry.register_value("negate", |v: i64| v);

        assert_eq!(
            result.err(),
            Some(CompositionError::DuplicateElement {
                name: "negate".to_string()
            })
        );
    }

    #[test]
    fn test_invalid_option_surfaces_from_factory() {
        let mut config = entry("bad", "offset");
        config
            .options
            .insert("amount".to_string(), serde_yaml::Value::from("lots"));

        let result = registry().create(&config);
        assert!(matches!(result, Err(CompositionError::InvalidOption { .. })));
    }

    #[test]
    fn test_names_and_lookup() {
        let registry = registry();

        assert_eq!(registry.names(), vec!["negate", "offset"]);
        assert!(registry.is_registered("offset"));
        assert!(!registry.is_registered("scale"));
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
        assert!(ElementRegistry::<i64>::default().is_empty());
    }
}
