//! Search cluster sizing defaults

use crate::crd::{ElasticsearchSpec, RedundancyPolicy};
use k8s_openapi::api::core::v1::ResourceRequirements;
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Nodes in a cluster when the user did not choose
pub const DEFAULT_NODE_COUNT: i32 = 3;

const DEFAULT_MEMORY: &str = "16Gi";
const DEFAULT_CPU_REQUEST: &str = "1";

/// Apply defaults to the search cluster settings
///
/// Resources are only defaulted when absent altogether; a partially
/// specified object is left exactly as written.
pub fn normalize_elasticsearch(spec: &mut ElasticsearchSpec) {
    if spec.node_count == 0 {
        info!(node_count = DEFAULT_NODE_COUNT, "Search cluster node count not provided. Using default");
        spec.node_count = DEFAULT_NODE_COUNT;
    }

    if spec.redundancy_policy.is_unset() {
        spec.redundancy_policy = if spec.node_count == 1 {
            RedundancyPolicy::ZeroRedundancy
        } else {
            RedundancyPolicy::SingleRedundancy
        };
        info!(
            node_count = spec.node_count,
            policy = %spec.redundancy_policy,
            "Redundancy policy not provided. Derived from node count"
        );
    }

    if spec.resources.is_none() {
        debug!(
            memory = DEFAULT_MEMORY,
            cpu = DEFAULT_CPU_REQUEST,
            "Search cluster resources not provided. Using default bundle"
        );
        spec.resources = Some(default_resources());
    }
}

/// 16Gi of memory requested and capped, one CPU requested
pub fn default_resources() -> ResourceRequirements {
    let memory = Quantity(DEFAULT_MEMORY.to_string());
    ResourceRequirements {
        limits: Some(BTreeMap::from([("memory".to_string(), memory.clone())])),
        requests: Some(BTreeMap::from([
            ("memory".to_string(), memory),
            ("cpu".to_string(), Quantity(DEFAULT_CPU_REQUEST.to_string())),
        ])),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(node_count: i32) -> ElasticsearchSpec {
        ElasticsearchSpec {
            node_count,
            ..Default::default()
        }
    }

    #[test]
    fn test_redundancy_from_node_count() {
        let cases = [
            (1, 1, RedundancyPolicy::ZeroRedundancy),
            (5, 5, RedundancyPolicy::SingleRedundancy),
            (0, 3, RedundancyPolicy::SingleRedundancy),
            (2, 2, RedundancyPolicy::SingleRedundancy),
        ];
        for (input, nodes, policy) in cases {
            let mut es = spec(input);
            normalize_elasticsearch(&mut es);
            assert_eq!(es.node_count, nodes);
            assert_eq!(es.redundancy_policy, policy, "node count {}", input);
        }
    }

    #[test]
    fn test_explicit_redundancy_is_kept() {
        let mut es = spec(1);
        es.redundancy_policy = RedundancyPolicy::FullRedundancy;
        normalize_elasticsearch(&mut es);
        assert_eq!(es.redundancy_policy, RedundancyPolicy::FullRedundancy);
    }

    #[test]
    fn test_default_resources() {
        let mut es = spec(0);
        normalize_elasticsearch(&mut es);

        let resources = es.resources.unwrap();
        let limits = resources.limits.unwrap();
        let requests = resources.requests.unwrap();
        assert_eq!(limits["memory"], Quantity("16Gi".into()));
        assert!(!limits.contains_key("cpu"));
        assert_eq!(requests["memory"], Quantity("16Gi".into()));
        assert_eq!(requests["cpu"], Quantity("1".into()));
    }

    #[test]
    fn test_partial_resources_are_not_merged() {
        let partial = ResourceRequirements {
            limits: Some(BTreeMap::from([("cpu".to_string(), Quantity("2".into()))])),
            ..Default::default()
        };
        let mut es = spec(3);
        es.resources = Some(partial.clone());
        normalize_elasticsearch(&mut es);
        assert_eq!(es.resources, Some(partial));
    }
}
