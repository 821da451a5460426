//! Value types shared by the Jaeger CRD
//!
//! Tri-state flags, free-form option tables and the string-backed enums
//! used by the Jaeger resource. All of them deserialize leniently: an unrecognized
//! value degrades to the unset state instead of rejecting the resource.

use schemars::gen::SchemaGenerator;
use schemars::schema::{InstanceType, Schema, SchemaObject};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

// =============================================================================
// Tri-State Flag
// =============================================================================

/// A boolean setting that distinguishes "no opinion" from an explicit choice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum TriState {
    #[default]
    Unset,
    Enabled,
    Disabled,
}

impl TriState {
    pub fn is_unset(&self) -> bool {
        *self == TriState::Unset
    }

    pub fn is_enabled(&self) -> bool {
        *self == TriState::Enabled
    }

    pub fn is_disabled(&self) -> bool {
        *self == TriState::Disabled
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => TriState::Unset,
            Some(true) => TriState::Enabled,
            Some(false) => TriState::Disabled,
        }
    }
}

impl From<TriState> for Option<bool> {
    fn from(value: TriState) -> Self {
        match value {
            TriState::Unset => None,
            TriState::Enabled => Some(true),
            TriState::Disabled => Some(false),
        }
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        Some(value).into()
    }
}

impl JsonSchema for TriState {
    fn schema_name() -> String {
        "TriState".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        <Option<bool>>::json_schema(gen)
    }

    fn is_referenceable() -> bool {
        false
    }
}

// =============================================================================
// Free-Form Tables
// =============================================================================

/// Schema for an object whose fields are not known ahead of time
fn preserve_unknown_fields() -> Schema {
    let mut schema = SchemaObject {
        instance_type: Some(InstanceType::Object.into()),
        ..Default::default()
    };
    schema
        .extensions
        .insert("x-kubernetes-preserve-unknown-fields".to_string(), Value::Bool(true));
    Schema::Object(schema)
}

/// Arbitrarily nested, user-authored option table (e.g. UI options)
///
/// The content is kept as a tagged JSON value so that user-set keys survive
/// resolution byte-for-byte, whatever their shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FreeForm(Option<Value>);

impl FreeForm {
    /// Create a free-form table from an object
    pub fn new(map: Map<String, Value>) -> Self {
        Self(Some(Value::Object(map)))
    }

    /// Wrap any JSON value, including ones that are not objects
    pub fn from_value(value: Value) -> Self {
        Self(Some(value))
    }

    /// True when nothing has been set
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            None | Some(Value::Null) => true,
            Some(Value::Object(map)) => map.is_empty(),
            Some(_) => false,
        }
    }

    /// The content as an object, or `None` if it has another shape
    pub fn as_map(&self) -> Option<Map<String, Value>> {
        match &self.0 {
            Some(Value::Object(map)) => Some(map.clone()),
            _ => None,
        }
    }

    /// Look up a top-level key
    pub fn get(&self, key: &str) -> Option<&Value> {
        match &self.0 {
            Some(Value::Object(map)) => map.get(key),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&Value> {
        self.0.as_ref()
    }
}

impl JsonSchema for FreeForm {
    fn schema_name() -> String {
        "FreeForm".to_string()
    }

    fn json_schema(_: &mut SchemaGenerator) -> Schema {
        preserve_unknown_fields()
    }

    fn is_referenceable() -> bool {
        false
    }
}

/// Storage options, written either nested or with dotted keys
///
/// `{"es": {"tls": {"ca": "/ca.crt"}}}` and `{"es.tls.ca": "/ca.crt"}`
/// flatten to the same entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(Option<Value>);

impl Options {
    /// Build options from flat `key = value` pairs
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let map = pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect::<Map<String, Value>>();
        Self(Some(Value::Object(map)))
    }

    pub fn is_empty(&self) -> bool {
        self.map().is_empty()
    }

    /// Flattened view with dotted keys and string values
    pub fn map(&self) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();
        if let Some(Value::Object(map)) = &self.0 {
            flatten_into(&mut out, "", map);
        }
        out
    }

    /// Flattened value for a single key, empty when missing
    pub fn get(&self, key: &str) -> String {
        self.map().remove(key).unwrap_or_default()
    }
}

fn flatten_into(out: &mut BTreeMap<String, String>, prefix: &str, map: &Map<String, Value>) {
    for (key, value) in map {
        let full = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            Value::Object(nested) => flatten_into(out, &full, nested),
            Value::Null => {}
            Value::Array(items) => {
                let joined = items
                    .iter()
                    .filter_map(scalar_to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                out.insert(full, joined);
            }
            scalar => {
                if let Some(s) = scalar_to_string(scalar) {
                    out.insert(full, s);
                }
            }
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl JsonSchema for Options {
    fn schema_name() -> String {
        "Options".to_string()
    }

    fn json_schema(_: &mut SchemaGenerator) -> Schema {
        preserve_unknown_fields()
    }

    fn is_referenceable() -> bool {
        false
    }
}

// =============================================================================
// Deployment Strategy
// =============================================================================

/// Deployment topology requested for an instance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeploymentStrategy {
    /// Empty or unrecognized
    #[default]
    Unset,
    AllInOne,
    /// Old spelling of `allinone`, rewritten before resolution
    DeprecatedAllInOne,
    Production,
    Streaming,
}

impl DeploymentStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentStrategy::Unset => "",
            DeploymentStrategy::AllInOne => "allinone",
            DeploymentStrategy::DeprecatedAllInOne => "all-in-one",
            DeploymentStrategy::Production => "production",
            DeploymentStrategy::Streaming => "streaming",
        }
    }

    pub fn is_unset(&self) -> bool {
        *self == DeploymentStrategy::Unset
    }
}

impl From<&str> for DeploymentStrategy {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "allinone" => DeploymentStrategy::AllInOne,
            "all-in-one" => DeploymentStrategy::DeprecatedAllInOne,
            "production" => DeploymentStrategy::Production,
            "streaming" => DeploymentStrategy::Streaming,
            _ => DeploymentStrategy::Unset,
        }
    }
}

impl From<String> for DeploymentStrategy {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

impl From<DeploymentStrategy> for String {
    fn from(value: DeploymentStrategy) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for DeploymentStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl JsonSchema for DeploymentStrategy {
    fn schema_name() -> String {
        "DeploymentStrategy".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        String::json_schema(gen)
    }

    fn is_referenceable() -> bool {
        false
    }
}

// =============================================================================
// Ingress Security
// =============================================================================

/// How the query UI ingress is protected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IngressSecurityType {
    #[default]
    Unset,
    /// User asked for no security at all
    NoneExplicit,
    OAuthProxy,
}

impl IngressSecurityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IngressSecurityType::Unset => "",
            IngressSecurityType::NoneExplicit => "none",
            IngressSecurityType::OAuthProxy => "oauth-proxy",
        }
    }

    pub fn is_unset(&self) -> bool {
        *self == IngressSecurityType::Unset
    }
}

impl From<&str> for IngressSecurityType {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "none" => IngressSecurityType::NoneExplicit,
            "oauth-proxy" => IngressSecurityType::OAuthProxy,
            _ => IngressSecurityType::Unset,
        }
    }
}

impl From<String> for IngressSecurityType {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

impl From<IngressSecurityType> for String {
    fn from(value: IngressSecurityType) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for IngressSecurityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl JsonSchema for IngressSecurityType {
    fn schema_name() -> String {
        "IngressSecurityType".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        String::json_schema(gen)
    }

    fn is_referenceable() -> bool {
        false
    }
}

// =============================================================================
// Redundancy Policy
// =============================================================================

/// Replica policy for a provisioned search cluster
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RedundancyPolicy {
    #[default]
    Unset,
    /// No replicas
    ZeroRedundancy,
    /// One replica per shard
    SingleRedundancy,
    /// Replicas on half of the data nodes
    MultipleRedundancy,
    /// Replicas on every data node
    FullRedundancy,
}

impl RedundancyPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RedundancyPolicy::Unset => "",
            RedundancyPolicy::ZeroRedundancy => "ZeroRedundancy",
            RedundancyPolicy::SingleRedundancy => "SingleRedundancy",
            RedundancyPolicy::MultipleRedundancy => "MultipleRedundancy",
            RedundancyPolicy::FullRedundancy => "FullRedundancy",
        }
    }

    pub fn is_unset(&self) -> bool {
        *self == RedundancyPolicy::Unset
    }
}

impl From<&str> for RedundancyPolicy {
    fn from(value: &str) -> Self {
        match value.trim() {
            "ZeroRedundancy" => RedundancyPolicy::ZeroRedundancy,
            "SingleRedundancy" => RedundancyPolicy::SingleRedundancy,
            "MultipleRedundancy" => RedundancyPolicy::MultipleRedundancy,
            "FullRedundancy" => RedundancyPolicy::FullRedundancy,
            _ => RedundancyPolicy::Unset,
        }
    }
}

impl From<String> for RedundancyPolicy {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

impl From<RedundancyPolicy> for String {
    fn from(value: RedundancyPolicy) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for RedundancyPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl JsonSchema for RedundancyPolicy {
    fn schema_name() -> String {
        "RedundancyPolicy".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        String::json_schema(gen)
    }

    fn is_referenceable() -> bool {
        false
    }
}
