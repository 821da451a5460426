//! Dependency aggregation job defaults

use super::DEFAULT_DAILY_SCHEDULE;
use crate::config::{ImageComponent, OperatorConfig};
use crate::crd::{JaegerStorageSpec, TriState};
use crate::storage::{self, should_deploy_elasticsearch};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// TLS flags of the search backend; any of them being set means TLS is in use
const TLS_ENABLED_OPTIONS: [&str; 2] = ["es.tls", "es.tls.enabled"];
const TLS_SKIP_HOST_VERIFY_OPTION: &str = "es.tls.skip-host-verify";
const TLS_CA_OPTION: &str = "es.tls.ca";

/// Apply defaults to the dependency aggregation job
///
/// The job is switched on automatically only when the backend supports it,
/// the user has no opinion, no cluster is being provisioned for this
/// instance, and TLS is not configured (the job would otherwise talk to the
/// backend without verifying it).
pub fn normalize_dependencies(spec: &mut JaegerStorageSpec, config: &OperatorConfig) {
    if storage::supports_dependencies(&spec.storage_type)
        && spec.dependencies.enabled.is_unset()
        && !should_deploy_elasticsearch(spec, config)
        && !tls_configured(&spec.options.map())
    {
        info!(storage = %spec.storage_type, "Enabling the dependencies job");
        spec.dependencies.enabled = TriState::Enabled;
    }

    if spec.dependencies.image.is_empty() {
        debug!(image = %config.dependencies_image, "Dependencies image not provided. Using default");
        spec.dependencies.image = config.image_name("", ImageComponent::Dependencies);
    }

    if spec.dependencies.schedule.is_empty() {
        debug!(schedule = DEFAULT_DAILY_SCHEDULE, "Dependencies schedule not provided. Using default");
        spec.dependencies.schedule = DEFAULT_DAILY_SCHEDULE.to_string();
    }
}

fn tls_configured(options: &BTreeMap<String, String>) -> bool {
    let is_true = |key: &str| {
        options
            .get(key)
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    };

    TLS_ENABLED_OPTIONS.iter().any(|key| is_true(key))
        || is_true(TLS_SKIP_HOST_VERIFY_OPTION)
        || options.get(TLS_CA_OPTION).is_some_and(|ca| !ca.is_empty())
}
