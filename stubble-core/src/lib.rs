//! Class model extraction for stubble.
//!
//! [`Reflector`] reads one type through a [`TypeIntrospector`] and fills a
//! [`ClassModel`](stubble_ir::ClassModel). Missing native type information is
//! recovered from doc comments via [`docblock`].

pub mod docblock;
pub mod introspect;

mod error;
mod reflector;

pub use docblock::DocType;
pub use error::{Error, Result};
pub use introspect::{
    ConstantInfo, MemoryIntrospector, MethodInfo, NativeType, ParameterDefault, ParameterInfo,
    PropertyInfo, TypeInfo, TypeIntrospector,
};
pub use reflector::{Reflector, extract};
