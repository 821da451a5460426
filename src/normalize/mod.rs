//! Spec Normalization
//!
//! Turns a partially specified Jaeger resource into a complete, internally
//! consistent one. Normalization is total: unknown, missing or contradictory
//! settings are replaced by safe defaults and reported through `tracing`,
//! never returned as errors. Running it again on its own output changes
//! nothing.
//!
//! # Stages
//!
//! Stages run in the order of [`Stage::ORDER`]. Later stages read fields
//! written by earlier ones, see [`Stage::reads`].
//!
//! ```text
//! Name ─ StorageType ─ Strategy ─ StorageCompatibility ─ IngressSecurity
//!                                                              │
//!   Ui ─ Rollover ─ Elasticsearch ─ IndexCleaner ─ Dependencies┘
//! ```

pub mod dependencies;
pub mod elasticsearch;
pub mod index_cleaner;
pub mod rollover;
pub mod ui;

pub use dependencies::normalize_dependencies;
pub use elasticsearch::normalize_elasticsearch;
pub use index_cleaner::normalize_index_cleaner;
pub use rollover::normalize_rollover;
pub use ui::normalize_ui;

use crate::config::OperatorConfig;
use crate::crd::{DeploymentStrategy, IngressSecurityType, Jaeger};
use crate::storage;
use tracing::{info, instrument, warn};

/// Name given to instances created without one
pub const DEFAULT_NAME: &str = "my-jaeger";

/// Daily schedule shared by the dependency and index cleaner jobs
pub const DEFAULT_DAILY_SCHEDULE: &str = "55 23 * * *";

// =============================================================================
// Stages
// =============================================================================

/// A single normalization step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Default an empty instance name
    Name,
    /// Fall back to in-memory storage for empty or unknown types
    StorageType,
    /// Anything but production or streaming becomes all-in-one
    Strategy,
    /// Single-process backends force all-in-one
    StorageCompatibility,
    /// Pick OAuth proxy or no security for the ingress
    IngressSecurity,
    /// Dependency aggregation job
    Dependencies,
    /// Index cleaner job
    IndexCleaner,
    /// Search cluster sizing
    Elasticsearch,
    /// Index rollover job
    Rollover,
    /// Derived UI options
    Ui,
}

impl Stage {
    /// Execution order
    pub const ORDER: [Stage; 10] = [
        Stage::Name,
        Stage::StorageType,
        Stage::Strategy,
        Stage::StorageCompatibility,
        Stage::IngressSecurity,
        Stage::Dependencies,
        Stage::IndexCleaner,
        Stage::Elasticsearch,
        Stage::Rollover,
        Stage::Ui,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Stage::Name => "name",
            Stage::StorageType => "storage-type",
            Stage::Strategy => "strategy",
            Stage::StorageCompatibility => "storage-compatibility",
            Stage::IngressSecurity => "ingress-security",
            Stage::Dependencies => "dependencies",
            Stage::IndexCleaner => "index-cleaner",
            Stage::Elasticsearch => "elasticsearch",
            Stage::Rollover => "rollover",
            Stage::Ui => "ui",
        }
    }

    /// Earlier stages whose output this stage reads
    pub fn reads(&self) -> &'static [Stage] {
        match self {
            Stage::Name
            | Stage::StorageType
            | Stage::Strategy
            | Stage::IngressSecurity
            | Stage::Elasticsearch
            | Stage::Rollover => &[],
            Stage::StorageCompatibility => &[Stage::StorageType, Stage::Strategy],
            Stage::Dependencies => &[Stage::StorageType],
            Stage::IndexCleaner => &[Stage::StorageType],
            Stage::Ui => &[
                Stage::StorageType,
                Stage::IngressSecurity,
                Stage::Dependencies,
            ],
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// Normalizer
// =============================================================================

/// Applies every normalization stage to a Jaeger resource in place
#[derive(Debug, Clone, Copy)]
pub struct SpecNormalizer<'a> {
    config: &'a OperatorConfig,
}

impl<'a> SpecNormalizer<'a> {
    pub fn new(config: &'a OperatorConfig) -> Self {
        Self { config }
    }

    /// Run all stages in order
    #[instrument(name = "normalize", skip_all, fields(instance = %jaeger.instance_name()))]
    pub fn normalize(&self, jaeger: &mut Jaeger) {
        for stage in Stage::ORDER {
            self.apply(stage, jaeger);
        }
    }

    /// Run a single stage
    pub fn apply(&self, stage: Stage, jaeger: &mut Jaeger) {
        match stage {
            Stage::Name => normalize_name(jaeger),
            Stage::StorageType => normalize_storage_type(jaeger),
            Stage::Strategy => normalize_strategy(jaeger),
            Stage::StorageCompatibility => enforce_storage_compatibility(jaeger),
            Stage::IngressSecurity => normalize_ingress_security(jaeger, self.config),
            Stage::Dependencies => normalize_dependencies(&mut jaeger.spec.storage, self.config),
            Stage::IndexCleaner => normalize_index_cleaner(&mut jaeger.spec.storage, self.config),
            Stage::Elasticsearch => normalize_elasticsearch(&mut jaeger.spec.storage.elasticsearch),
            Stage::Rollover => normalize_rollover(&mut jaeger.spec.storage.es_rollover, self.config),
            Stage::Ui => normalize_ui(&mut jaeger.spec, self.config),
        }
    }
}

fn normalize_name(jaeger: &mut Jaeger) {
    if jaeger.instance_name().is_empty() {
        info!(
            name = DEFAULT_NAME,
            "This Jaeger instance was created without a name. Applying a default name"
        );
        jaeger.metadata.name = Some(DEFAULT_NAME.to_string());
    }
}

fn normalize_storage_type(jaeger: &mut Jaeger) {
    let storage = &mut jaeger.spec.storage;
    if storage.storage_type.is_empty() {
        info!("Storage type not provided. Falling back to 'memory'");
        storage.storage_type = storage::MEMORY.to_string();
    }

    if !storage::is_known(&storage.storage_type) {
        info!(
            storage = %storage.storage_type,
            known_options = ?storage::valid_types(),
            "The provided storage type is unknown. Falling back to 'memory'"
        );
        storage.storage_type = storage::MEMORY.to_string();
    }
}

fn normalize_strategy(jaeger: &mut Jaeger) {
    let strategy = &mut jaeger.spec.strategy;
    if !matches!(
        strategy,
        DeploymentStrategy::Production | DeploymentStrategy::Streaming
    ) {
        info!(
            requested = %strategy,
            "Deployment strategy not provided or not recognized. Falling back to allInOne"
        );
        *strategy = DeploymentStrategy::AllInOne;
    }
}

fn enforce_storage_compatibility(jaeger: &mut Jaeger) {
    let spec = &mut jaeger.spec;
    if !storage::supports_distributed(&spec.storage.storage_type)
        && spec.strategy != DeploymentStrategy::AllInOne
    {
        warn!(
            storage = %spec.storage.storage_type,
            requested = %spec.strategy,
            "No suitable storage provided. Falling back to allInOne"
        );
        spec.strategy = DeploymentStrategy::AllInOne;
    }
}

/// OAuth proxy on platforms that provide one, unless the user explicitly
/// asked for no security; no security everywhere else.
fn normalize_ingress_security(jaeger: &mut Jaeger, config: &OperatorConfig) {
    let ingress = &mut jaeger.spec.ingress;
    let security = if config.platform.has_oauth_proxy()
        && ingress.security != IngressSecurityType::NoneExplicit
    {
        IngressSecurityType::OAuthProxy
    } else {
        IngressSecurityType::NoneExplicit
    };
    if ingress.security != security {
        info!(
            platform = %config.platform,
            security = %security,
            "Applying the ingress security supported by the platform"
        );
        ingress.security = security;
    }
}
