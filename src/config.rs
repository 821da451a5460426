//! Operator Configuration
//!
//! Process-wide, read-only settings consumed while resolving an instance:
//! the platform the operator runs on, default images for the maintenance
//! jobs and the documentation link shown in the UI menu.
//!
//! The value is passed explicitly into every resolution call and never
//! mutated by it.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

// =============================================================================
// Platform
// =============================================================================

/// Platform the operator is running on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    #[default]
    Kubernetes,
    /// Provides a native OAuth proxy for ingress
    OpenShift,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Kubernetes => "kubernetes",
            Platform::OpenShift => "openshift",
        }
    }

    /// Whether ingresses on this platform can sit behind an OAuth proxy
    pub fn has_oauth_proxy(&self) -> bool {
        matches!(self, Platform::OpenShift)
    }
}

impl From<&str> for Platform {
    fn from(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("openshift") {
            Platform::OpenShift
        } else {
            Platform::Kubernetes
        }
    }
}

impl From<String> for Platform {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

impl From<Platform> for String {
    fn from(value: Platform) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Images
// =============================================================================

/// Components whose image can be defaulted from operator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageComponent {
    Dependencies,
    EsIndexCleaner,
    EsRollover,
}

impl std::fmt::Display for ImageComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageComponent::Dependencies => write!(f, "dependencies"),
            ImageComponent::EsIndexCleaner => write!(f, "es-index-cleaner"),
            ImageComponent::EsRollover => write!(f, "es-rollover"),
        }
    }
}

// =============================================================================
// Operator Configuration
// =============================================================================

/// Configuration for the operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperatorConfig {
    /// Platform the operator runs on
    pub platform: Platform,
    /// Default image for the dependency aggregation job
    pub dependencies_image: String,
    /// Default image for the index cleaner job
    pub es_index_cleaner_image: String,
    /// Default image for the index rollover job
    pub es_rollover_image: String,
    /// Link shown under "About" in the UI menu
    pub documentation_url: String,
    /// Whether a search cluster operator is available to provision clusters
    pub es_provision: bool,
}

impl Default for OperatorConfig {
    fn default() -> Self {
        Self {
            platform: Platform::Kubernetes,
            dependencies_image: "ghcr.io/jaegertracing/spark-dependencies/spark-dependencies"
                .to_string(),
            es_index_cleaner_image: "jaegertracing/jaeger-es-index-cleaner".to_string(),
            es_rollover_image: "jaegertracing/jaeger-es-rollover".to_string(),
            documentation_url: "https://www.jaegertracing.io/docs/latest".to_string(),
            es_provision: false,
        }
    }
}

impl OperatorConfig {
    /// Load configuration from a YAML file; missing fields keep their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        if raw.trim().is_empty() {
            debug!("Empty operator config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        serde_yaml::from_str(&raw).map_err(|e| {
            Error::Configuration(format!("Invalid operator config {}: {}", path.display(), e))
        })
    }

    /// Configured default image for a component
    pub fn default_image(&self, component: ImageComponent) -> &str {
        match component {
            ImageComponent::Dependencies => &self.dependencies_image,
            ImageComponent::EsIndexCleaner => &self.es_index_cleaner_image,
            ImageComponent::EsRollover => &self.es_rollover_image,
        }
    }

    /// Resolve an image reference: the current one if set, otherwise the default
    pub fn image_name(&self, current: &str, component: ImageComponent) -> String {
        if current.is_empty() {
            self.default_image(component).to_string()
        } else {
            current.to_string()
        }
    }
}
