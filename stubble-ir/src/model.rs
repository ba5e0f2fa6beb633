//! Canonical class model.
//!
//! The extractor fills a [`ClassModel`] from whatever introspection facility
//! is available; the renderer only ever reads it.
//!
//! ```text
//! TypeIntrospector → Reflector (extract) → ClassModel → PhpRenderer (render)
//! ```

use serde::{Deserialize, Serialize};

use crate::{METHOD_GROUPS, MemberScope, TypeKind, Value, Visibility};

/// Namespace separator in qualified type names.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Structural description of one class, interface or trait.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassModel {
    /// Fully qualified name without a leading separator.
    pub qualified_name: String,
    /// Name without the namespace.
    pub simple_name: String,
    /// Namespace, empty when the type is global.
    pub namespace: String,
    pub kind: TypeKind,
    pub is_final: bool,
    pub is_abstract: bool,
    /// Raw doc comment of the type.
    pub doc_comment: Option<String>,
    /// Extended class or interfaces, in declaration order.
    pub extends: Vec<String>,
    /// Implemented interfaces (never populated for interfaces).
    pub implements: Vec<String>,
    pub constants: Vec<Member>,
    pub instance_fields: Vec<Member>,
    pub static_fields: Vec<Member>,
    pub methods: MethodTable,
}

impl ClassModel {
    /// Create an empty model for a qualified name.
    pub fn new(qualified_name: &str) -> Self {
        let (namespace, simple_name) = split_qualified_name(qualified_name);
        Self {
            qualified_name: qualified_name
                .trim_start_matches(NAMESPACE_SEPARATOR)
                .to_string(),
            simple_name: simple_name.to_string(),
            namespace: namespace.to_string(),
            ..Self::default()
        }
    }

    pub fn has_namespace(&self) -> bool {
        !self.namespace.is_empty()
    }

    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    /// Total number of methods over all buckets.
    pub fn method_count(&self) -> usize {
        self.methods.len()
    }

    /// Fields of the given scope.
    pub fn fields(&self, scope: MemberScope) -> &[Member] {
        match scope {
            MemberScope::Instance => &self.instance_fields,
            MemberScope::Static => &self.static_fields,
        }
    }
}

/// Split a qualified name into `(namespace, simple_name)`.
///
/// A leading separator is ignored; the namespace is empty for global names.
pub fn split_qualified_name(name: &str) -> (&str, &str) {
    let name = name.trim_start_matches(NAMESPACE_SEPARATOR);
    match name.rfind(NAMESPACE_SEPARATOR) {
        Some(pos) => (&name[..pos], &name[pos + 1..]),
        None => ("", name),
    }
}

/// A constant or a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub doc_comment: Option<String>,
    pub visibility: Visibility,
    /// `None` when there is no value at all, `Some(Value::Null)` for an
    /// explicit null.
    pub value: Option<Value>,
    /// Type inferred from the value, or from the `@var` annotation.
    pub inferred_type: Option<String>,
}

impl Member {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc_comment: None,
            visibility: Visibility::Public,
            value: None,
            inferred_type: None,
        }
    }

    pub fn visibility(mut self, vis: Visibility) -> Self {
        self.visibility = vis;
        self
    }

    pub fn value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc_comment = Some(doc.into());
        self
    }
}

/// A method signature without body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodSignature {
    pub name: String,
    pub doc_comment: Option<String>,
    pub is_final: bool,
    pub is_abstract: bool,
    /// Return type, possibly with a leading `?`.
    pub return_type: Option<String>,
    pub parameters: Vec<Parameter>,
}

impl MethodSignature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc_comment: None,
            is_final: false,
            is_abstract: false,
            return_type: None,
            parameters: Vec::new(),
        }
    }

    pub fn param(mut self, param: Parameter) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc_comment = Some(doc.into());
        self
    }
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Name without the leading `$`.
    pub name: String,
    pub ty: Option<String>,
    pub by_reference: bool,
    pub variadic: bool,
    pub default: Option<DefaultValue>,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            by_reference: false,
            variadic: false,
            default: None,
        }
    }

    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    pub fn by_reference(mut self) -> Self {
        self.by_reference = true;
        self
    }

    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    pub fn default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    /// True when the default refers to a named constant.
    pub fn default_is_symbolic(&self) -> bool {
        matches!(self.default, Some(DefaultValue::Constant(_)))
    }
}

/// Default value of a parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum DefaultValue {
    /// A literal value.
    Literal(Value),
    /// A reference to a named constant, printed verbatim.
    Constant(String),
}

/// One (scope, visibility) bucket of methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodGroup {
    pub scope: MemberScope,
    pub visibility: Visibility,
    pub methods: Vec<MethodSignature>,
}

/// Methods partitioned into the fixed [`METHOD_GROUPS`] buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MethodTable {
    groups: Vec<MethodGroup>,
}

impl MethodTable {
    pub fn new() -> Self {
        Self {
            groups: METHOD_GROUPS
                .iter()
                .map(|&(scope, visibility)| MethodGroup {
                    scope,
                    visibility,
                    methods: Vec::new(),
                })
                .collect(),
        }
    }

    /// Append a method to its bucket, keeping insertion order.
    pub fn push(&mut self, scope: MemberScope, visibility: Visibility, method: MethodSignature) {
        if let Some(group) = self
            .groups
            .iter_mut()
            .find(|g| g.scope == scope && g.visibility == visibility)
        {
            group.methods.push(method);
        }
    }

    /// Methods of one bucket.
    pub fn bucket(&self, scope: MemberScope, visibility: Visibility) -> &[MethodSignature] {
        self.groups
            .iter()
            .find(|g| g.scope == scope && g.visibility == visibility)
            .map(|g| g.methods.as_slice())
            .unwrap_or(&[])
    }

    /// Buckets in output order.
    pub fn groups(&self) -> impl Iterator<Item = &MethodGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.methods.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MethodTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_qualified_name() {
        assert_eq!(split_qualified_name("App\\Models\\User"), ("App\\Models", "User"));
        assert_eq!(split_qualified_name("\\App\\User"), ("App", "User"));
        assert_eq!(split_qualified_name("Plain"), ("", "Plain"));
    }

    #[test]
    fn test_class_model_new() {
        let model = ClassModel::new("\\Vendor\\Pkg\\Thing");
        assert_eq!(model.qualified_name, "Vendor\\Pkg\\Thing");
        assert_eq!(model.simple_name, "Thing");
        assert_eq!(model.namespace, "Vendor\\Pkg");
        assert!(model.has_namespace());
        assert_eq!(model.method_count(), 0);
    }

    #[test]
    fn test_method_table_buckets() {
        let mut table = MethodTable::new();
        table.push(MemberScope::Static, Visibility::Private, MethodSignature::new("a"));
        table.push(MemberScope::Instance, Visibility::Public, MethodSignature::new("b"));
        table.push(MemberScope::Static, Visibility::Private, MethodSignature::new("c"));

        assert_eq!(table.len(), 3);
        let names: Vec<_> = table
            .bucket(MemberScope::Static, Visibility::Private)
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "c"]);
        assert!(table.bucket(MemberScope::Static, Visibility::Public).is_empty());
        assert_eq!(table.groups().count(), METHOD_GROUPS.len());
    }

    #[test]
    fn test_default_is_symbolic() {
        let literal = Parameter::new("x").default(DefaultValue::Literal(Value::Int(1)));
        let symbolic = Parameter::new("y").default(DefaultValue::Constant("PHP_EOL".into()));
        assert!(!literal.default_is_symbolic());
        assert!(symbolic.default_is_symbolic());
        assert!(!Parameter::new("z").default_is_symbolic());
    }
}
