//! Intermediate representation types for the stubble skeleton generator.
//!
//! This crate provides the canonical model shared by the extractor and the
//! renderer. It is the single source of truth for what a reflected type
//! looks like.
//!
//! # Architecture
//!
//! ```text
//! introspector (host / catalog) → stubble-core (extract) → stubble-ir → stubble-codegen
//! ```
//!
//! The model is:
//! - Host-agnostic (no dependency on any particular introspection facility)
//! - Deterministic (ordered collections, fixed bucket order)
//! - Serializable (serde) for model dumps

mod model;
mod types;
mod value;

pub use model::{
    ClassModel, DefaultValue, Member, MethodGroup, MethodSignature, MethodTable,
    NAMESPACE_SEPARATOR, Parameter, split_qualified_name,
};
pub use types::{FIELD_GROUPS, METHOD_GROUPS, MemberScope, TypeKind, Visibility};
pub use value::{ArrayKey, Value, is_list};
