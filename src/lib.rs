//! Trace Operator - Desired State Resolution
//!
//! Resolves user-authored Jaeger resources into complete, consistent
//! specs and selects the deployment topology that realizes them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                          Strategy Selector                                   │
//! ├─────────────────────────────────────────────────────────────────────────────┤
//! │                          Spec Normalizer                                     │
//! │  ┌─────────────┐ ┌──────────────┐ ┌─────────────┐ ┌──────────┐ ┌──────────┐  │
//! │  │ Name/Storage│ │ Dependencies │ │Index Cleaner│ │ ES/Roll- │ │    UI    │  │
//! │  │ Strategy/   │ │     Job      │ │     Job     │ │   over   │ │ Options  │  │
//! │  │ Ingress     │ │              │ │             │ │          │ │          │  │
//! │  └─────────────┘ └──────────────┘ └─────────────┘ └──────────┘ └──────────┘  │
//! ├─────────────────────────────────────────────────────────────────────────────┤
//! │  ┌──────────────────────┐  ┌──────────────────────────────────────────────┐ │
//! │  │   Storage Catalog    │  │   Operator Config (platform, images, docs)   │ │
//! │  └──────────────────────┘  └──────────────────────────────────────────────┘ │
//! ├─────────────────────────────────────────────────────────────────────────────┤
//! │          Topology builders: allInOne │ production │ streaming               │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`strategy`]: Topology selection entry point
//! - [`normalize`]: Ordered normalization stages
//! - [`storage`]: Storage backend catalog and search cluster descriptor
//! - [`crd`]: Custom Resource Definitions
//! - [`config`]: Operator configuration
//! - [`error`]: Error types and handling

pub mod config;
pub mod crd;
pub mod error;
pub mod normalize;
pub mod storage;
pub mod strategy;

// Re-export commonly used types
pub use config::{ImageComponent, OperatorConfig, Platform};

pub use crd::{
    DeploymentStrategy, FreeForm, IngressSecurityType, Jaeger, JaegerSpec, JaegerStorageSpec,
    Options, RedundancyPolicy, TriState,
};

pub use error::{Error, Result};

pub use normalize::{SpecNormalizer, Stage};

pub use storage::ElasticsearchDeployment;

pub use strategy::{for_jaeger, Strategy, StrategySelector};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
