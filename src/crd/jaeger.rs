//! Jaeger CRD
//!
//! The user-authored desired state of a distributed tracing deployment.
//! Almost every field is optional; the normalizer fills in the rest.

use super::values::{
    DeploymentStrategy, FreeForm, IngressSecurityType, Options, RedundancyPolicy, TriState,
};
use k8s_openapi::api::core::v1::ResourceRequirements;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// =============================================================================
// Jaeger CRD
// =============================================================================

/// Jaeger describes a tracing backend: its storage, ingress, UI and the
/// topology used to deploy it.
#[derive(CustomResource, Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "jaegertracing.io",
    version = "v1",
    kind = "Jaeger",
    plural = "jaegers",
    shortname = "jaeger",
    derive = "PartialEq",
    derive = "Default",
    printcolumn = r#"{"name": "Strategy", "type": "string", "jsonPath": ".spec.strategy"}"#,
    printcolumn = r#"{"name": "Storage", "type": "string", "jsonPath": ".spec.storage.type"}"#,
    printcolumn = r#"{"name": "Age", "type": "date", "jsonPath": ".metadata.creationTimestamp"}"#,
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct JaegerSpec {
    /// Deployment topology: allInOne, production or streaming
    #[serde(default, skip_serializing_if = "DeploymentStrategy::is_unset")]
    pub strategy: DeploymentStrategy,

    /// Span storage settings
    #[serde(default)]
    pub storage: JaegerStorageSpec,

    /// Query ingress settings
    #[serde(default)]
    pub ingress: JaegerIngressSpec,

    /// Query UI settings
    #[serde(default)]
    pub ui: JaegerUiSpec,
}

// =============================================================================
// Storage
// =============================================================================

/// Storage backend and its periodic maintenance jobs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JaegerStorageSpec {
    /// Backend identifier (memory, elasticsearch, cassandra, ...)
    #[serde(rename = "type", default)]
    pub storage_type: String,

    /// Backend flags, nested or dotted
    #[serde(default, skip_serializing_if = "Options::is_empty")]
    pub options: Options,

    /// Service dependency aggregation job
    #[serde(default)]
    pub dependencies: JaegerDependenciesSpec,

    /// Index cleaner job
    #[serde(default)]
    pub es_index_cleaner: JaegerEsIndexCleanerSpec,

    /// Self-provisioned search cluster
    #[serde(default)]
    pub elasticsearch: ElasticsearchSpec,

    /// Index rollover job
    #[serde(default)]
    pub es_rollover: JaegerEsRolloverSpec,
}

/// Dependency aggregation cron job
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JaegerDependenciesSpec {
    #[serde(default, skip_serializing_if = "TriState::is_unset")]
    pub enabled: TriState,

    #[serde(default)]
    pub image: String,

    /// Cron expression
    #[serde(default)]
    pub schedule: String,
}

/// Index cleaner cron job
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JaegerEsIndexCleanerSpec {
    #[serde(default, skip_serializing_if = "TriState::is_unset")]
    pub enabled: TriState,

    #[serde(default)]
    pub image: String,

    /// Cron expression
    #[serde(default)]
    pub schedule: String,

    /// Indices older than this many days are removed
    #[serde(default)]
    pub number_of_days: Option<i32>,
}

/// Index rollover cron job
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JaegerEsRolloverSpec {
    #[serde(default, skip_serializing_if = "TriState::is_unset")]
    pub enabled: TriState,

    #[serde(default)]
    pub image: String,

    /// Cron expression
    #[serde(default)]
    pub schedule: String,
}

/// Search cluster provisioned alongside the instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ElasticsearchSpec {
    #[serde(default)]
    pub node_count: i32,

    #[serde(default, skip_serializing_if = "RedundancyPolicy::is_unset")]
    pub redundancy_policy: RedundancyPolicy,

    #[serde(default)]
    pub resources: Option<ResourceRequirements>,
}

// =============================================================================
// Ingress and UI
// =============================================================================

/// Query ingress
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JaegerIngressSpec {
    #[serde(default, skip_serializing_if = "TriState::is_unset")]
    pub enabled: TriState,

    #[serde(default, skip_serializing_if = "IngressSecurityType::is_unset")]
    pub security: IngressSecurityType,
}

/// Query UI
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JaegerUiSpec {
    /// Passed verbatim to the UI configuration file
    #[serde(default, skip_serializing_if = "FreeForm::is_empty")]
    pub options: FreeForm,
}

// =============================================================================
// Implementations
// =============================================================================

impl Jaeger {
    /// Name of this instance, empty when none was given
    pub fn instance_name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or("")
    }
}
