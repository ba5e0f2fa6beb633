//! TOML and JSON type catalogs.
//!
//! A catalog describes classes, interfaces and traits without a running PHP
//! host. Once parsed and validated it is a [`TypeIntrospector`] that the
//! reflector can read from.
//!
//! [`TypeIntrospector`]: stubble_core::TypeIntrospector

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod catalog;
mod error;
mod file;
mod parse;
mod validate;

pub use catalog::Catalog;
pub use error::{Error, Result, SourceContext};
pub use file::{CatalogFile, ConstantEntry, MethodEntry, ParameterEntry, PropertyEntry, TypeEntry};
pub use parse::{Format, parse_catalog};
pub use validate::ParseContext;
