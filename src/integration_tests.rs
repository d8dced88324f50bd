#[cfg(test)]
mod integration_tests {
    use std::sync::Arc;
    use std::thread;

    use crate::builder::ChainBuilder;
    use crate::chain::Chain;
    use crate::element::{Element, Module, Module1, Simple};
    use crate::params::{Param, Params};

    struct Bypass;
    impl Param for Bypass {
        type Value = bool;
        fn default_value() -> bool {
            false
        }
    }

    struct Offset;
    impl Param for Offset {
        type Value = i64;
        fn default_value() -> i64 {
            0
        }
    }

    fn assert_send_sync<S: Send + Sync>() {}

    #[test]
    fn test_core_types_are_thread_safe() {
        assert_send_sync::<Chain<i64>>();
        assert_send_sync::<Params>();
        assert_send_sync::<Simple<String>>();
        assert_send_sync::<Module<String>>();
        assert_send_sync::<Module1<Bypass, i64>>();
    }

    /// Test the basic build-then-materialize flow with plain functions
    #[test]
    fn test_end_to_end_function_pipeline() {
        let mut builder = ChainBuilder::new("base", 5_i64);
        builder.push("add_one", |x: i64| x + 1);
        builder.push("double", |x: i64| x * 2);

        let chain = builder.result();
        assert_eq!(chain.ids(), vec!["double", "add_one", "base"]);
        assert_eq!(chain.make(&Params::empty()), 12);
    }

    /// Test a chain-level element that elides its remainder under a parameter
    #[test]
    fn test_bypass_module_elides_remainder() {
        let bypass = Module1::<Bypass, i64>::new("gate", |bypass, next: Chain<i64>| {
            if bypass {
                Chain::leaf("gate", -1)
            } else {
                next
            }
        });

        let mut builder = ChainBuilder::new("base", 5_i64);
        builder.push("add_one", |x: i64| x + 1);
        builder.push_element(&bypass);
        builder.push("double", |x: i64| x * 2);
        let chain = builder.result();

        assert_eq!(chain.make(&Params::empty()), 12);
        assert_eq!(chain.make(&Params::empty().with::<Bypass>(true)), -2);

        // "add_one" never takes part in the replacement built under the bypass
        let gate = chain.next().unwrap();
        let replacement = match gate {
            Chain::Node { maker, next, .. } => {
                maker.apply(&Params::empty().with::<Bypass>(true), (**next).clone())
            }
            Chain::Leaf { .. } => panic!("expected the gate node"),
        };
        let visited: Vec<String> = replacement.tails().iter().map(|t| t.id().to_string()).collect();
        assert_eq!(visited, vec!["gate"]);
    }

    /// Test that a chain of value-adapters materializes through exactly one leaf per step
    #[test]
    fn test_value_adapters_produce_single_leaf() {
        let chain = Simple::new("add", |p: &Params, x: i64| x + p.get::<Offset>())
            .to_chain(Chain::leaf("base", 10));

        let replacement = match &chain {
            Chain::Node { maker, next, .. } => {
                maker.apply(&Params::empty().with::<Offset>(7), (**next).clone())
            }
            Chain::Leaf { .. } => panic!("expected a node"),
        };

        assert!(replacement.is_leaf());
        assert_eq!(replacement.id(), "add");
        assert_eq!(replacement.make(&Params::empty()), 17);
    }

    /// Test that builder snapshots and concatenations never disturb each other
    #[test]
    fn test_persistence_across_operations() {
        let mut builder = ChainBuilder::new("base", String::from("x"));
        builder.push("upper", |s: String| s.to_uppercase());
        let before = builder.result();

        builder.push("wrap", |s: String| format!("[{}]", s));
        let after = builder.result();

        let tail = Chain::leaf("tail", String::from("y"));
        let joined = before.concat(&tail);
        let edited = after.remove("upper");

        assert_eq!(before.make(&Params::empty()), "X");
        assert_eq!(after.make(&Params::empty()), "[X]");
        assert_eq!(joined.make(&Params::empty()), "Y");
        assert_eq!(edited.make(&Params::empty()), "[x]");
        assert_eq!(after.ids(), vec!["wrap", "upper", "base"]);
    }

    /// Test that one chain materializes concurrently under different parameters
    #[test]
    fn test_concurrent_materialization() {
        let mut builder = ChainBuilder::new("base", 1_i64);
        builder.push_element(&Simple::new("offset", |p: &Params, x: i64| x + p.get::<Offset>()));
        builder.push("triple", |x: i64| x * 3);
        let chain = Arc::new(builder.result());
        let shared = Params::empty().with::<Bypass>(true);

        let handles: Vec<_> = (0..8_i64)
            .map(|offset| {
                let chain = Arc::clone(&chain);
                let params = shared.with::<Offset>(offset);
                thread::spawn(move || (offset, chain.make(&params)))
            })
            .collect();

        for handle in handles {
            let (offset, value) = handle.join().unwrap();
            assert_eq!(value, (1 + offset) * 3, "offset {}", offset);
        }
        assert!(!shared.contains::<Offset>());
    }

    /// Test that chain snapshots can be handed to async tasks while the builder moves on
    #[tokio::test]
    async fn test_snapshots_shared_across_tasks() {
        let mut builder = ChainBuilder::new("base", 10_i64);
        builder.push_element(&Simple::new("offset", |p: &Params, x: i64| x + p.get::<Offset>()));
        let first = builder.result();
        builder.push("negate", |x: i64| -x);
        let second = builder.result();

        let params = Params::empty().with::<Offset>(5);
        let first_task = {
            let params = params.clone();
            tokio::spawn(async move { first.make(&params) })
        };
        let second_task = tokio::spawn(async move { second.make(&params) });

        assert_eq!(first_task.await.unwrap(), 15);
        assert_eq!(second_task.await.unwrap(), -15);
        assert_eq!(builder.make(&Params::empty()), -10);
    }

    /// Test that the transform identity law holds on a built chain
    #[test]
    fn test_transform_identity_on_built_chain() {
        let mut builder = ChainBuilder::new("base", 2_i64);
        builder.push("square", |x: i64| x * x);
        builder.push("inc", |x: i64| x + 1);
        let chain = builder.result();

        let copy = chain.transform(|sub| sub.clone());

        assert_eq!(copy, chain);
        assert_eq!(copy.make(&Params::empty()), chain.make(&Params::empty()));
    }
}
