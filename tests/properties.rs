//! Properties that hold for arbitrary input

use proptest::prelude::*;
use serde_json::{json, Map, Value};
use trace_operator::{
    for_jaeger, DeploymentStrategy, FreeForm, IngressSecurityType, Jaeger, OperatorConfig,
    Options, Platform, SpecNormalizer, TriState,
};

const STORAGE_TYPES: &[&str] = &[
    "", "memory", "MEMORY", "badger", "elasticsearch", "Elasticsearch", "cassandra", "kafka",
    "grpc-plugin", "mysql",
];
const STRATEGIES: &[&str] = &["", "allinone", "all-in-one", "production", "streaming", "bogus"];
const SECURITIES: &[&str] = &["", "none", "oauth-proxy"];

fn tri_state() -> impl Strategy<Value = TriState> {
    prop_oneof![
        Just(TriState::Unset),
        Just(TriState::Enabled),
        Just(TriState::Disabled)
    ]
}

fn storage_options() -> impl Strategy<Value = Options> {
    proptest::collection::vec(
        (
            prop::sample::select(vec![
                "es.tls",
                "es.tls.ca",
                "es.tls.skip-host-verify",
                "es.server-urls",
                "es-archive.enabled",
                "cassandra-archive.enabled",
            ]),
            prop::sample::select(vec!["true", "false", "", "/ca.crt"]),
        ),
        0..4,
    )
    .prop_map(|pairs| Options::from_pairs(pairs))
}

fn ui_options() -> impl Strategy<Value = FreeForm> {
    prop_oneof![
        Just(FreeForm::default()),
        Just(FreeForm::from_value(json!({ "archiveEnabled": false }))),
        Just(FreeForm::from_value(json!({ "dependencies": { "menuEnabled": true } }))),
        Just(FreeForm::from_value(json!({ "dependencies": "scalar" }))),
        Just(FreeForm::from_value(json!({ "menu": [] }))),
        Just(FreeForm::from_value(json!(["not", "a", "map"]))),
        Just(FreeForm::from_value(json!({ "tracking": { "gaID": "UA-1" } }))),
    ]
}

prop_compose! {
    fn arbitrary_jaeger()(
        name in prop::sample::select(vec!["", "simple", "prod"]),
        storage_type in prop::sample::select(STORAGE_TYPES.to_vec()),
        strategy in prop::sample::select(STRATEGIES.to_vec()),
        security in prop::sample::select(SECURITIES.to_vec()),
        ingress_enabled in tri_state(),
        deps_enabled in tri_state(),
        cleaner_enabled in tri_state(),
        node_count in 0..6i32,
        options in storage_options(),
        ui in ui_options(),
    ) -> Jaeger {
        let mut jaeger = Jaeger::new(name, Default::default());
        if name.is_empty() {
            jaeger.metadata.name = None;
        }
        let spec = &mut jaeger.spec;
        spec.strategy = strategy.into();
        spec.storage.storage_type = storage_type.to_string();
        spec.storage.options = options;
        spec.storage.dependencies.enabled = deps_enabled;
        spec.storage.es_index_cleaner.enabled = cleaner_enabled;
        spec.storage.elasticsearch.node_count = node_count;
        spec.ingress.enabled = ingress_enabled;
        spec.ingress.security = security.into();
        spec.ui.options = ui;
        jaeger
    }
}

fn operator_config() -> impl Strategy<Value = OperatorConfig> {
    (any::<bool>(), any::<bool>(), prop::sample::select(vec!["", "https://docs"])).prop_map(
        |(openshift, es_provision, docs)| OperatorConfig {
            platform: if openshift {
                Platform::OpenShift
            } else {
                Platform::Kubernetes
            },
            es_provision,
            documentation_url: docs.to_string(),
            ..Default::default()
        },
    )
}

fn user_map(jaeger: &Jaeger) -> Map<String, Value> {
    jaeger.spec.ui.options.as_map().unwrap_or_default()
}

proptest! {
    #[test]
    fn normalization_is_idempotent(mut jaeger in arbitrary_jaeger(), config in operator_config()) {
        let normalizer = SpecNormalizer::new(&config);
        normalizer.normalize(&mut jaeger);
        let once = jaeger.clone();
        normalizer.normalize(&mut jaeger);
        prop_assert_eq!(jaeger, once);
    }

    #[test]
    fn selection_is_idempotent(mut jaeger in arbitrary_jaeger(), config in operator_config()) {
        let first = for_jaeger(&mut jaeger, vec![], &config).kind();
        let once = jaeger.clone();
        let second = for_jaeger(&mut jaeger, vec![], &config).kind();
        prop_assert_eq!(first, second);
        prop_assert_eq!(jaeger, once);
    }

    #[test]
    fn resolved_spec_satisfies_invariants(mut jaeger in arbitrary_jaeger(), config in operator_config()) {
        let requested_storage = jaeger.spec.storage.storage_type.clone();
        let strategy = for_jaeger(&mut jaeger, vec![], &config);
        let spec = &jaeger.spec;

        prop_assert!(trace_operator::storage::is_known(&spec.storage.storage_type));
        prop_assert!(!jaeger.instance_name().is_empty());
        prop_assert!(matches!(
            spec.ingress.security,
            IngressSecurityType::NoneExplicit | IngressSecurityType::OAuthProxy
        ));
        prop_assert!(matches!(
            spec.strategy,
            DeploymentStrategy::AllInOne | DeploymentStrategy::Production | DeploymentStrategy::Streaming
        ));
        prop_assert_eq!(strategy.kind(), spec.strategy);

        if !trace_operator::storage::supports_distributed(&spec.storage.storage_type) {
            prop_assert_eq!(spec.strategy, DeploymentStrategy::AllInOne);
        }
        if !trace_operator::storage::is_known(&requested_storage) {
            prop_assert_eq!(spec.storage.storage_type.as_str(), "memory");
        }
    }

    #[test]
    fn explicit_ui_keys_are_preserved(mut jaeger in arbitrary_jaeger(), config in operator_config()) {
        let before = user_map(&jaeger);
        for_jaeger(&mut jaeger, vec![], &config);
        let after = user_map(&jaeger);

        for (key, value) in &before {
            match (key.as_str(), value) {
                // only a nested key may be added under an existing dependencies map
                ("dependencies", Value::Object(deps)) => {
                    let resolved = after[key].as_object().unwrap();
                    for (k, v) in deps {
                        prop_assert_eq!(resolved.get(k), Some(v));
                    }
                }
                _ => prop_assert_eq!(after.get(key), Some(value)),
            }
        }
    }
}
