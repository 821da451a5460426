//! End-to-end resolution scenarios

use serde_json::json;
use trace_operator::{
    for_jaeger, DeploymentStrategy, FreeForm, IngressSecurityType, Jaeger, OperatorConfig,
    Options, Platform, RedundancyPolicy, Strategy,
};

use assert_matches::assert_matches;

fn jaeger(storage_type: &str, strategy: &str) -> Jaeger {
    let mut jaeger = Jaeger::new("scenario", Default::default());
    jaeger.spec.storage.storage_type = storage_type.to_string();
    jaeger.spec.strategy = strategy.into();
    jaeger
}

fn openshift() -> OperatorConfig {
    OperatorConfig {
        platform: Platform::OpenShift,
        documentation_url: "https://docs.example.com/tracing".to_string(),
        ..Default::default()
    }
}

#[test]
fn empty_spec_resolves_to_in_memory_all_in_one() {
    let mut j = jaeger("", "");
    let strategy = for_jaeger(&mut j, vec![], &OperatorConfig::default());

    assert_matches!(strategy, Strategy::AllInOne { .. });
    assert_eq!(j.spec.storage.storage_type, "memory");
    assert_eq!(j.spec.strategy, DeploymentStrategy::AllInOne);
    assert_eq!(j.spec.ingress.security, IngressSecurityType::NoneExplicit);
}

#[test]
fn production_behind_oauth_proxy_gets_log_out_menu() {
    let mut j = jaeger("elasticsearch", "production");
    let strategy = for_jaeger(&mut j, vec![], &openshift());

    assert_matches!(strategy, Strategy::Production { .. });
    assert_eq!(j.spec.ingress.security, IngressSecurityType::OAuthProxy);

    let menu = j.spec.ui.options.get("menu").unwrap();
    assert_eq!(
        menu,
        &json!([
            {
                "label": "About",
                "items": [
                    { "label": "Documentation", "url": "https://docs.example.com/tracing" }
                ]
            },
            { "label": "Log Out", "url": "/oauth/sign_in", "anchorTarget": "_self" }
        ])
    );
}

#[test]
fn search_backend_enables_index_cleaner() {
    let mut j = jaeger("elasticsearch", "production");
    for_jaeger(&mut j, vec![], &OperatorConfig::default());

    let cleaner = &j.spec.storage.es_index_cleaner;
    assert!(cleaner.enabled.is_enabled());
    assert_eq!(cleaner.number_of_days, Some(7));
    assert_eq!(cleaner.schedule, "55 23 * * *");

    let es = &j.spec.storage.elasticsearch;
    assert_eq!(es.node_count, 3);
    assert_eq!(es.redundancy_policy, RedundancyPolicy::SingleRedundancy);
    assert!(es.resources.is_some());

    assert_eq!(j.spec.storage.es_rollover.schedule, "*/30 * * * *");
}

#[test]
fn capitalized_search_backend_leaves_index_cleaner_unset() {
    let mut j = jaeger("Elasticsearch", "production");
    let strategy = for_jaeger(&mut j, vec![], &OperatorConfig::default());

    assert_matches!(strategy, Strategy::Production { .. });
    assert_eq!(j.spec.storage.storage_type, "Elasticsearch");
    assert!(j.spec.storage.es_index_cleaner.enabled.is_unset());
}

#[test]
fn archive_storage_enables_archive_button() {
    let mut j = jaeger("cassandra", "production");
    j.spec.storage.options = Options::from_pairs([("cassandra-archive.enabled", "true")]);
    for_jaeger(&mut j, vec![], &OperatorConfig::default());

    assert_eq!(j.spec.ui.options.get("archiveEnabled"), Some(&json!(true)));
}

#[test]
fn single_node_cluster_has_zero_redundancy() {
    let mut j = jaeger("elasticsearch", "production");
    j.spec.storage.elasticsearch.node_count = 1;
    for_jaeger(&mut j, vec![], &OperatorConfig::default());
    assert_eq!(
        j.spec.storage.elasticsearch.redundancy_policy,
        RedundancyPolicy::ZeroRedundancy
    );

    let mut j = jaeger("elasticsearch", "production");
    j.spec.storage.elasticsearch.node_count = 5;
    for_jaeger(&mut j, vec![], &OperatorConfig::default());
    assert_eq!(
        j.spec.storage.elasticsearch.redundancy_policy,
        RedundancyPolicy::SingleRedundancy
    );
}

#[test]
fn unknown_storage_is_replaced_case_insensitively() {
    for (input, expected) in [
        ("ElasticSearch", "ElasticSearch"),
        ("CASSANDRA", "CASSANDRA"),
        ("mysql", "memory"),
        ("", "memory"),
    ] {
        let mut j = jaeger(input, "production");
        for_jaeger(&mut j, vec![], &OperatorConfig::default());
        assert_eq!(j.spec.storage.storage_type, expected);
    }
}

#[test]
fn dependencies_tab_hidden_when_job_cannot_run() {
    let mut j = jaeger("kafka", "streaming");
    let strategy = for_jaeger(&mut j, vec![], &OperatorConfig::default());

    assert_matches!(strategy, Strategy::Streaming { .. });
    assert!(j.spec.storage.dependencies.enabled.is_unset());
    assert_eq!(
        j.spec.ui.options.get("dependencies"),
        Some(&json!({ "menuEnabled": false }))
    );
}

#[test]
fn explicit_ui_settings_survive_resolution() {
    let user_options = json!({
        "archiveEnabled": false,
        "dependencies": { "menuEnabled": true },
        "menu": [{ "label": "Custom", "url": "/custom" }],
        "tracking": { "gaID": "UA-000000-2" }
    });

    let mut j = jaeger("kafka", "production");
    j.spec.storage.options = Options::from_pairs([("es-archive.enabled", "true")]);
    j.spec.ui.options = FreeForm::from_value(user_options.clone());
    for_jaeger(&mut j, vec![], &openshift());

    assert_eq!(j.spec.ui.options.value(), Some(&user_options));
}

#[test]
fn resolves_yaml_manifest() {
    let mut j: Jaeger = serde_yaml::from_str(
        r#"
apiVersion: jaegertracing.io/v1
kind: Jaeger
metadata:
  name: from-yaml
spec:
  strategy: production
  storage:
    type: elasticsearch
    options:
      es:
        server-urls: https://es.example.com:9200
        tls:
          ca: /certs/ca.crt
  ingress:
    enabled: false
"#,
    )
    .unwrap();

    let config = OperatorConfig {
        es_provision: true,
        ..openshift()
    };
    let strategy = for_jaeger(&mut j, vec![], &config);

    let es = strategy.elasticsearch().unwrap();
    assert!(!es.provision);
    // TLS configured, so the dependencies job stays off
    assert!(j.spec.storage.dependencies.enabled.is_unset());
    assert!(j.spec.ui.options.get("menu").is_none());
    assert_eq!(
        j.spec.ui.options.get("dependencies"),
        Some(&json!({ "menuEnabled": false }))
    );

    let rendered = serde_yaml::to_string(&j).unwrap();
    let reparsed: Jaeger = serde_yaml::from_str(&rendered).unwrap();
    assert_eq!(reparsed, j);
}
