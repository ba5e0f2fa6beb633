//! PHP skeleton generation for stubble.
//!
//! - [`builder`] - Indentation-aware text building (CodeBuilder, CodeFragment)
//! - [`ast`] - Declaration and region nodes
//! - [`encode`] - PHP literal encoding of values
//! - [`PhpRenderer`] - Renders a [`ClassModel`](stubble_ir::ClassModel)
//! - [`GenerateSignatures`] - Parse-and-render entry point on a reflector

pub mod ast;
pub mod builder;
pub mod encode;

mod generate;
mod renderer;

pub use encode::{UNKNOWN_VALUE_MARKER, ValueEncoder};
pub use generate::GenerateSignatures;
pub use renderer::{PhpRenderer, RenderOptions};
