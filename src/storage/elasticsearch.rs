//! Search Cluster Provisioning
//!
//! Decides whether a dedicated search cluster is provisioned for an instance
//! and describes it to the production topology builder.

use super::{is_type, ELASTICSEARCH};
use crate::config::OperatorConfig;
use crate::crd::{ElasticsearchSpec, Jaeger, JaegerStorageSpec};
use k8s_openapi::api::core::v1::Secret;

/// Storage option pointing at an externally managed cluster
pub const SERVER_URLS_OPTION: &str = "es.server-urls";

/// Whether a dedicated search cluster will be provisioned for this storage
///
/// Only when the backend is the search engine, the user did not point at an
/// existing cluster, and a cluster operator is available to do the work.
pub fn should_deploy_elasticsearch(storage: &JaegerStorageSpec, config: &OperatorConfig) -> bool {
    is_type(&storage.storage_type, ELASTICSEARCH)
        && storage.options.get(SERVER_URLS_OPTION).is_empty()
        && config.es_provision
}

/// Everything the production topology needs to stand up a search cluster
#[derive(Debug, Clone)]
pub struct ElasticsearchDeployment {
    /// Owning instance name
    pub instance: String,
    /// Owning instance namespace
    pub namespace: Option<String>,
    /// Resolved cluster settings
    pub spec: ElasticsearchSpec,
    /// Script generating the cluster certificates
    pub cert_script: String,
    /// Secrets supplied by the caller
    pub secrets: Vec<Secret>,
    /// Whether the cluster is provisioned at all
    pub provision: bool,
}

impl ElasticsearchDeployment {
    /// Describe the search cluster for a resolved instance
    pub fn new(
        jaeger: &Jaeger,
        config: &OperatorConfig,
        cert_script: impl Into<String>,
        secrets: Vec<Secret>,
    ) -> Self {
        Self {
            instance: jaeger.instance_name().to_string(),
            namespace: jaeger.metadata.namespace.clone(),
            spec: jaeger.spec.storage.elasticsearch.clone(),
            cert_script: cert_script.into(),
            secrets,
            provision: should_deploy_elasticsearch(&jaeger.spec.storage, config),
        }
    }

    /// Names of the supplied secrets
    pub fn secret_names(&self) -> Vec<&str> {
        self.secrets
            .iter()
            .filter_map(|s| s.metadata.name.as_deref())
            .collect()
    }
}
