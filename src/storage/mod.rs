//! Storage Backends
//!
//! The catalog of span storage backends the operator knows about, the
//! capabilities of each, and the descriptor handed to the production
//! topology when a search cluster may need to be provisioned.

pub mod elasticsearch;

pub use elasticsearch::*;

/// In-process storage, the fallback for anything unknown
pub const MEMORY: &str = "memory";
/// Distributed search engine backend
pub const ELASTICSEARCH: &str = "elasticsearch";
/// Wide-column backend
pub const CASSANDRA: &str = "cassandra";
/// Embedded on-disk backend
pub const BADGER: &str = "badger";
/// Streaming ingest buffer
pub const KAFKA: &str = "kafka";
/// Out-of-process storage plugin
pub const GRPC_PLUGIN: &str = "grpc-plugin";

const VALID_TYPES: [&str; 6] = [MEMORY, KAFKA, ELASTICSEARCH, CASSANDRA, BADGER, GRPC_PLUGIN];

/// Supported backend identifiers, in catalog order
pub fn valid_types() -> &'static [&'static str] {
    &VALID_TYPES
}

/// Case-insensitive membership test against the catalog
pub fn is_known(storage_type: &str) -> bool {
    VALID_TYPES
        .iter()
        .any(|known| known.eq_ignore_ascii_case(storage_type))
}

/// Whether the backend can be shared by separately deployed collector and query
///
/// In-process and embedded backends live inside a single process, so only
/// the all-in-one topology can use them.
pub fn supports_distributed(storage_type: &str) -> bool {
    !storage_type.eq_ignore_ascii_case(MEMORY) && !storage_type.eq_ignore_ascii_case(BADGER)
}

/// Whether the dependency aggregation job can read from this backend
pub fn supports_dependencies(storage_type: &str) -> bool {
    storage_type.eq_ignore_ascii_case(CASSANDRA) || storage_type.eq_ignore_ascii_case(ELASTICSEARCH)
}

/// Backend identifier comparison, ignoring case
pub fn is_type(storage_type: &str, expected: &str) -> bool {
    storage_type.eq_ignore_ascii_case(expected)
}
