//! Read-only introspection boundary.
//!
//! A [`TypeIntrospector`] answers structural questions about loaded types.
//! Any host that can describe a type's modifiers, supertypes and members
//! through these records can drive the extractor: a live runtime bridge, a
//! static analysis front end, or a hand-written catalog.

use indexmap::IndexMap;
use stubble_ir::{NAMESPACE_SEPARATOR, TypeKind, Value, Visibility};

/// Capability trait for looking up type metadata by name.
pub trait TypeIntrospector {
    /// Look up a type by fully qualified name.
    ///
    /// Implementations should tolerate a leading namespace separator.
    fn reflect(&self, name: &str) -> Option<&TypeInfo>;
}

impl<T: TypeIntrospector + ?Sized> TypeIntrospector for &T {
    fn reflect(&self, name: &str) -> Option<&TypeInfo> {
        (**self).reflect(name)
    }
}

impl<T: TypeIntrospector + ?Sized> TypeIntrospector for Box<T> {
    fn reflect(&self, name: &str) -> Option<&TypeInfo> {
        self.as_ref().reflect(name)
    }
}

/// Structural metadata of one type, as reported by the host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeInfo {
    /// Fully qualified name.
    pub name: String,
    pub kind: TypeKind,
    pub is_abstract: bool,
    pub is_final: bool,
    pub doc_comment: Option<String>,
    /// Directly declared interfaces.
    pub interfaces: Vec<String>,
    /// Direct supertype.
    pub parent: Option<String>,
    pub constants: Vec<ConstantInfo>,
    pub properties: Vec<PropertyInfo>,
    /// Default values of properties, keyed by property name.
    ///
    /// Properties without a statically known default have no entry.
    pub default_properties: IndexMap<String, Value>,
    pub methods: Vec<MethodInfo>,
}

impl TypeInfo {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Self::default()
        }
    }
}

/// A class constant.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantInfo {
    pub name: String,
    pub doc_comment: Option<String>,
    pub visibility: Visibility,
    /// `None` for a typed constant the host could not evaluate.
    pub value: Option<Value>,
}

/// A declared property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyInfo {
    pub name: String,
    pub doc_comment: Option<String>,
    pub visibility: Visibility,
    pub is_static: bool,
}

/// A declared method.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodInfo {
    pub name: String,
    pub doc_comment: Option<String>,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_final: bool,
    pub is_abstract: bool,
    pub return_type: Option<NativeType>,
    pub parameters: Vec<ParameterInfo>,
}

impl MethodInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc_comment: None,
            visibility: Visibility::Public,
            is_static: false,
            is_final: false,
            is_abstract: false,
            return_type: None,
            parameters: Vec::new(),
        }
    }
}

/// A native (declared in code) type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeType {
    pub name: String,
    pub allows_null: bool,
}

impl NativeType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            allows_null: false,
        }
    }

    pub fn nullable(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            allows_null: true,
        }
    }
}

/// A declared method parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterInfo {
    /// Name without the leading `$`.
    pub name: String,
    pub native_type: Option<NativeType>,
    /// Legacy `array` hint without a reported type.
    pub is_array: bool,
    /// Legacy `callable` hint without a reported type.
    pub is_callable: bool,
    pub by_reference: bool,
    pub variadic: bool,
    pub default: ParameterDefault,
}

impl ParameterInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            native_type: None,
            is_array: false,
            is_callable: false,
            by_reference: false,
            variadic: false,
            default: ParameterDefault::None,
        }
    }
}

/// What the host knows about a parameter default.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ParameterDefault {
    /// No default value.
    #[default]
    None,
    /// A literal default.
    Literal(Value),
    /// A default referring to a named constant.
    Constant(String),
    /// The host failed to read the default.
    Unreadable(String),
}

/// An introspector over an in-memory set of types.
///
/// Lookups ignore a leading separator and fall back to a case-insensitive
/// match, mirroring how PHP resolves class names.
#[derive(Debug, Clone, Default)]
pub struct MemoryIntrospector {
    types: IndexMap<String, TypeInfo>,
}

impl MemoryIntrospector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type, replacing any previous entry with the same name.
    pub fn insert(&mut self, info: TypeInfo) {
        let key = info.name.trim_start_matches(NAMESPACE_SEPARATOR).to_string();
        self.types.insert(key, info);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, info: TypeInfo) -> Self {
        self.insert(info);
        self
    }

    pub fn types(&self) -> impl Iterator<Item = &TypeInfo> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeIntrospector for MemoryIntrospector {
    fn reflect(&self, name: &str) -> Option<&TypeInfo> {
        let name = name.trim_start_matches(NAMESPACE_SEPARATOR);
        self.types.get(name).or_else(|| {
            self.types
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, info)| info)
        })
    }
}

impl FromIterator<TypeInfo> for MemoryIntrospector {
    fn from_iter<T: IntoIterator<Item = TypeInfo>>(iter: T) -> Self {
        let mut introspector = Self::new();
        for info in iter {
            introspector.insert(info);
        }
        introspector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_exact_and_leading_separator() {
        let introspector =
            MemoryIntrospector::new().with(TypeInfo::new("App\\User", TypeKind::Class));
        assert!(introspector.reflect("App\\User").is_some());
        assert!(introspector.reflect("\\App\\User").is_some());
        assert!(introspector.reflect("App\\Missing").is_none());
    }

    #[test]
    fn test_reflect_case_insensitive() {
        let introspector =
            MemoryIntrospector::new().with(TypeInfo::new("App\\User", TypeKind::Class));
        let info = introspector.reflect("app\\user").unwrap();
        assert_eq!(info.name, "App\\User");
    }

    #[test]
    fn test_reflect_through_reference() {
        let introspector: MemoryIntrospector =
            [TypeInfo::new("Countable", TypeKind::Interface)].into_iter().collect();
        let by_ref = &introspector;
        assert_eq!(
            by_ref.reflect("Countable").map(|t| t.kind),
            Some(TypeKind::Interface)
        );
        assert_eq!(introspector.len(), 1);
    }
}
