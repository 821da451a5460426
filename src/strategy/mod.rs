//! Deployment Strategy Selection
//!
//! Entry point for resolving a Jaeger instance: normalizes the spec in place
//! and picks the topology that will realize it. The returned [`Strategy`] is
//! handed to the topology builders, which create the concrete resources.

use crate::config::OperatorConfig;
use crate::crd::{DeploymentStrategy, Jaeger};
use crate::normalize::SpecNormalizer;
use crate::storage::ElasticsearchDeployment;
use k8s_openapi::api::core::v1::Secret;
use tracing::{debug, instrument, warn};

/// Script generating the certificates of a provisioned search cluster
pub const ES_CERT_GENERATION_SCRIPT: &str = "./scripts/cert_generation.sh";

// =============================================================================
// Strategy
// =============================================================================

/// Topology chosen for a resolved instance
#[derive(Debug, Clone)]
pub enum Strategy {
    /// Collector, query and storage in one process
    AllInOne { jaeger: Jaeger },
    /// Separately scaled collector and query over shared storage
    Production {
        jaeger: Jaeger,
        elasticsearch: ElasticsearchDeployment,
    },
    /// Production with a streaming buffer in front of the storage
    Streaming { jaeger: Jaeger },
}

impl Strategy {
    pub fn kind(&self) -> DeploymentStrategy {
        match self {
            Strategy::AllInOne { .. } => DeploymentStrategy::AllInOne,
            Strategy::Production { .. } => DeploymentStrategy::Production,
            Strategy::Streaming { .. } => DeploymentStrategy::Streaming,
        }
    }

    /// The resolved instance this topology realizes
    pub fn jaeger(&self) -> &Jaeger {
        match self {
            Strategy::AllInOne { jaeger }
            | Strategy::Production { jaeger, .. }
            | Strategy::Streaming { jaeger } => jaeger,
        }
    }

    /// Search cluster descriptor, production only
    pub fn elasticsearch(&self) -> Option<&ElasticsearchDeployment> {
        match self {
            Strategy::Production { elasticsearch, .. } => Some(elasticsearch),
            _ => None,
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}

// =============================================================================
// Selector
// =============================================================================

/// Resolves Jaeger instances and selects their topology
#[derive(Debug, Clone, Copy)]
pub struct StrategySelector<'a> {
    config: &'a OperatorConfig,
}

impl<'a> StrategySelector<'a> {
    pub fn new(config: &'a OperatorConfig) -> Self {
        Self { config }
    }

    /// Normalize the instance in place and return its topology
    ///
    /// Never fails: whatever the input, a complete spec and a topology come
    /// out. Secrets are only used by the production topology.
    #[instrument(name = "strategy.for", skip_all, fields(instance = %jaeger.instance_name()))]
    pub fn select(&self, jaeger: &mut Jaeger, secrets: Vec<Secret>) -> Strategy {
        if jaeger.spec.strategy == DeploymentStrategy::DeprecatedAllInOne {
            warn!("Strategy 'all-in-one' is no longer supported, please use 'allInOne'");
            jaeger.spec.strategy = DeploymentStrategy::AllInOne;
        }

        SpecNormalizer::new(self.config).normalize(jaeger);

        debug!(strategy = %jaeger.spec.strategy, "Strategy chosen");
        match jaeger.spec.strategy {
            DeploymentStrategy::AllInOne => Strategy::AllInOne {
                jaeger: jaeger.clone(),
            },
            DeploymentStrategy::Streaming => Strategy::Streaming {
                jaeger: jaeger.clone(),
            },
            _ => {
                let elasticsearch = ElasticsearchDeployment::new(
                    jaeger,
                    self.config,
                    ES_CERT_GENERATION_SCRIPT,
                    secrets,
                );
                Strategy::Production {
                    jaeger: jaeger.clone(),
                    elasticsearch,
                }
            }
        }
    }
}

/// Resolve an instance with the given operator configuration
pub fn for_jaeger(jaeger: &mut Jaeger, secrets: Vec<Secret>, config: &OperatorConfig) -> Strategy {
    StrategySelector::new(config).select(jaeger, secrets)
}
