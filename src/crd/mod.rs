//! Custom Resource Definitions for the Trace Operator
//!
//! This module contains the CRD types:
//! - Jaeger: desired state of a tracing deployment
//! - Value types: tri-state flags, free-form tables and string-backed enums

pub mod jaeger;
pub mod values;

pub use jaeger::*;
pub use values::*;
