// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Integer transformer elements.
//!
//! The materialized value is a [`Transformer`], a cheaply cloned `i64 -> i64`
//! function. Each element wraps the transformer built by the rest of the chain,
//! so the element at the head applies its step last.

use std::sync::Arc;

use crate::chain::Chain;
use crate::config::{ChainConfig, ElementConfig};
use crate::element::{Element, Module1, Simple};
use crate::errors::CompositionError;
use crate::params::{Param, Params};
use crate::registry::ElementRegistry;

#[derive(Clone)]
pub struct Transformer(Arc<dyn Fn(i64) -> i64 + Send + Sync>);

impl Transformer {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(i64) -> i64 + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn apply(&self, x: i64) -> i64 {
        (self.0)(x)
    }
}

impl std::fmt::Debug for Transformer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Transformer")
    }
}

/// Factor applied by `multiply` elements.
pub struct Multiplier;

impl Param for Multiplier {
    type Value = i64;

    fn default_value() -> i64 {
        1
    }

    fn name() -> &'static str {
        "multiplier"
    }
}

/// Whether `clamp` elements take part in the chain at all.
pub struct ClampEnabled;

impl Param for ClampEnabled {
    type Value = bool;

    fn default_value() -> bool {
        true
    }

    fn name() -> &'static str {
        "clamp"
    }
}

pub fn identity() -> Transformer {
    Transformer::new(|x| x)
}

fn wrap<F>(config: &ElementConfig, description: String, step: F) -> Arc<dyn Element<Transformer>>
where
    F: Fn(&Params, i64) -> i64 + Send + Sync + Clone + 'static,
{
    Arc::new(
        Simple::new(config.id.clone(), move |params: &Params, next: Transformer| -> Transformer {
            let step = step.clone();
            let params = params.clone();
            Transformer::new(move |x| step(&params, next.apply(x)))
        })
        .with_description(description),
    )
}

fn add(config: &ElementConfig) -> Result<Arc<dyn Element<Transformer>>, CompositionError> {
    let amount = config.option::<i64>("amount")?.unwrap_or(1);
    Ok(wrap(config, format!("add({})", amount), move |_, x| x.saturating_add(amount)))
}

fn scale(config: &ElementConfig) -> Result<Arc<dyn Element<Transformer>>, CompositionError> {
    let factor = config.option::<i64>("factor")?.unwrap_or(2);
    Ok(wrap(config, format!("scale({})", factor), move |_, x| x.saturating_mul(factor)))
}

fn negate(config: &ElementConfig) -> Result<Arc<dyn Element<Transformer>>, CompositionError> {
    Ok(wrap(config, "negate".to_string(), |_, x| x.saturating_neg()))
}

fn multiply(config: &ElementConfig) -> Result<Arc<dyn Element<Transformer>>, CompositionError> {
    Ok(wrap(config, "multiply(param)".to_string(), |params, x| {
        x.saturating_mul(params.get::<Multiplier>())
    }))
}

/// Clamps into `[min, max]`, or drops out of the chain when [`ClampEnabled`] is false.
fn clamp(config: &ElementConfig) -> Result<Arc<dyn Element<Transformer>>, CompositionError> {
    let min = config.option::<i64>("min")?.unwrap_or(i64::MIN);
    let max = config.option::<i64>("max")?.unwrap_or(i64::MAX);
    if min > max {
        return Err(CompositionError::InvalidOption {
            id: config.id.clone(),
            option: "min".to_string(),
            reason: format!("min {} exceeds max {}", min, max),
        });
    }

    let clamper = wrap(config, format!("clamp({}, {})", min, max), move |_, x| x.clamp(min, max));
    let module = Module1::<ClampEnabled, Transformer>::new(
        config.id.clone(),
        move |enabled, next: Chain<Transformer>| {
            if enabled {
                clamper.to_chain(next)
            } else {
                next
            }
        },
    )
    .with_description(format!("clamp({}, {}) if enabled", min, max));

    Ok(Arc::new(module))
}

/// Registry holding every arithmetic element: `add`, `scale`, `negate`,
/// `multiply` and `clamp`.
pub fn arithmetic_registry() -> Result<ElementRegistry<Transformer>, CompositionError> {
    let mut registry = ElementRegistry::<Transformer>::new();
    registry
        .register("add", add)?
        .register("scale", scale)?
        .register("negate", negate)?
        .register("multiply", multiply)?
        .register("clamp", clamp)?;
    Ok(registry)
}

/// Parameters named in the configuration's `params` section.
pub fn params_from_config(cfg: &ChainConfig) -> Result<Params, CompositionError> {
    let mut params = Params::empty();
    if let Some(multiplier) = cfg.param::<i64>(Multiplier::name())? {
        params = params.with::<Multiplier>(multiplier);
    }
    if let Some(enabled) = cfg.param::<bool>(ClampEnabled::name())? {
        params = params.with::<ClampEnabled>(enabled);
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChainAssembler;
    use std::collections::HashMap;

    fn entry(id: &str, element: &str, options: &[(&str, i64)]) -> ElementConfig {
        ElementConfig {
            id: id.to_string(),
            element: element.to_string(),
            enabled: true,
            options: options
                .iter()
                .map(|(k, v)| (k.to_string(), serde_yaml::Value::from(*v)))
                .collect(),
        }
    }

    fn assemble(elements: Vec<ElementConfig>) -> Chain<Transformer> {
        let cfg = ChainConfig {
            id: "identity".to_string(),
            elements,
            params: HashMap::new(),
        };
        ChainAssembler::assemble(&cfg, &arithmetic_registry().unwrap(), identity()).unwrap()
    }

    #[test]
    fn test_elements_table_driven() {
        struct TestCase {
            name: &'static str,
            elements: Vec<ElementConfig>,
            params: Params,
            input: i64,
            expected: i64,
        }

        let test_cases = vec![
            TestCase {
                name: "add default amount",
                elements: vec![entry("a", "add", &[])],
                params: Params::empty(),
                input: 5,
                expected: 6,
            },
            TestCase {
                name: "add then scale",
                elements: vec![entry("a", "add", &[("amount", 3)]), entry("s", "scale", &[])],
                params: Params::empty(),
                input: 1,
                expected: 8,
            },
            TestCase {
                name: "negate",
                elements: vec![entry("n", "negate", &[])],
                params: Params::empty(),
                input: 4,
                expected: -4,
            },
            TestCase {
                name: "multiply reads parameter",
                elements: vec![entry("m", "multiply", &[])],
                params: Params::empty().with::<Multiplier>(7),
                input: 3,
                expected: 21,
            },
            TestCase {
                name: "clamp enabled by default",
                elements: vec![
                    entry("s", "scale", &[("factor", 10)]),
                    entry("c", "clamp", &[("max", 50)]),
                ],
                params: Params::empty(),
                input: 9,
                expected: 50,
            },
            TestCase {
                name: "clamp elided when disabled",
                elements: vec![
                    entry("s", "scale", &[("factor", 10)]),
                    entry("c", "clamp", &[("max", 50)]),
                ],
                params: Params::empty().with::<ClampEnabled>(false),
                input: 9,
                expected: 90,
            },
            TestCase {
                name: "add saturates at the top",
                elements: vec![entry("a", "add", &[("amount", 5)])],
                params: Params::empty(),
                input: i64::MAX - 1,
                expected: i64::MAX,
            },
            TestCase {
                name: "scale and multiply saturate",
                elements: vec![entry("s", "scale", &[]), entry("m", "multiply", &[])],
                params: Params::empty().with::<Multiplier>(-3),
                input: i64::MAX / 2 + 1,
                expected: i64::MIN,
            },
            TestCase {
                name: "negate saturates at the bottom",
                elements: vec![entry("n", "negate", &[])],
                params: Params::empty(),
                input: i64::MIN,
                expected: i64::MAX,
            },
        ];

        for test_case in test_cases {
            let transformer = assemble(test_case.elements).make(&test_case.params);
            assert_eq!(
                transformer.apply(test_case.input),
                test_case.expected,
                "Test case '{}'",
                test_case.name
            );
        }
    }

    #[test]
    fn test_clamp_rejects_inverted_bounds() {
        let registry = arithmetic_registry().unwrap();
        let result = registry.create(&entry("c", "clamp", &[("min", 10), ("max", 1)]));

        assert!(matches!(result, Err(CompositionError::InvalidOption { .. })));
    }

    #[test]
    fn test_params_from_config() {
        let cfg: ChainConfig = serde_yaml::from_str(
            r#"
params:
  multiplier: 6
  clamp: false
"#,
        )
        .unwrap();

        let params = params_from_config(&cfg).unwrap();
        assert_eq!(params.get::<Multiplier>(), 6);
        assert!(!params.get::<ClampEnabled>());

        let empty: ChainConfig = serde_yaml::from_str("{}").unwrap();
        assert!(params_from_config(&empty).unwrap().is_empty());
    }

    #[test]
    fn test_rendering_names_each_step() {
        let chain = assemble(vec![entry("a", "add", &[("amount", 2)]), entry("n", "negate", &[])]);
        let rendered = chain.to_string();

        assert_eq!(
            rendered,
            "n: Node = negate\na: Node = add(2)\nidentity: Leaf = Transformer"
        );
    }
}
