//! Catalog as an introspection source.

use stubble_core::{
    ConstantInfo, MemoryIntrospector, MethodInfo, NativeType, ParameterDefault, ParameterInfo,
    PropertyInfo, TypeInfo, TypeIntrospector,
};

use crate::file::{CatalogFile, ConstantEntry, MethodEntry, ParameterEntry, TypeEntry};

/// A validated set of type descriptions.
///
/// Lookups follow [`MemoryIntrospector`]: a leading `\` is ignored and names
/// fall back to a case-insensitive match.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    types: MemoryIntrospector,
}

impl Catalog {
    /// Types in declaration order.
    pub fn types(&self) -> impl Iterator<Item = &TypeInfo> {
        self.types.types()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeIntrospector for Catalog {
    fn reflect(&self, name: &str) -> Option<&TypeInfo> {
        self.types.reflect(name)
    }
}

impl From<CatalogFile> for Catalog {
    fn from(file: CatalogFile) -> Self {
        let types = file
            .types
            .into_iter()
            .map(|(name, entry)| lower_type(name, entry))
            .collect();
        Self { types }
    }
}

fn lower_type(name: String, entry: TypeEntry) -> TypeInfo {
    let mut info = TypeInfo::new(name, entry.kind);
    info.is_abstract = entry.is_abstract;
    info.is_final = entry.is_final;
    info.doc_comment = entry.doc;
    info.parent = entry.parent;
    info.interfaces = entry.interfaces;
    info.constants = entry.constants.into_iter().map(lower_constant).collect();

    for property in entry.properties {
        let name = property.name.trim_start_matches('$').to_string();
        if let Some(default) = property.default {
            info.default_properties.insert(name.clone(), default);
        }
        info.properties.push(PropertyInfo {
            name,
            doc_comment: property.doc,
            visibility: property.visibility,
            is_static: property.is_static,
        });
    }

    info.methods = entry.methods.into_iter().map(lower_method).collect();
    tracing::debug!(
        name = %info.name,
        constants = info.constants.len(),
        properties = info.properties.len(),
        methods = info.methods.len(),
        "loaded catalog type"
    );
    info
}

fn lower_constant(entry: ConstantEntry) -> ConstantInfo {
    ConstantInfo {
        name: entry.name,
        doc_comment: entry.doc,
        visibility: entry.visibility,
        value: entry.value,
    }
}

fn lower_method(entry: MethodEntry) -> MethodInfo {
    let mut method = MethodInfo::new(entry.name);
    method.doc_comment = entry.doc;
    method.visibility = entry.visibility;
    method.is_static = entry.is_static;
    method.is_final = entry.is_final;
    method.is_abstract = entry.is_abstract;
    method.return_type = entry.returns.as_deref().and_then(parse_native_type);
    method.parameters = entry.parameters.into_iter().map(lower_parameter).collect();
    method
}

fn lower_parameter(entry: ParameterEntry) -> ParameterInfo {
    let mut parameter = ParameterInfo::new(entry.name.trim_start_matches('$'));
    parameter.native_type = entry.ty.as_deref().and_then(parse_native_type);
    parameter.by_reference = entry.by_reference;
    parameter.variadic = entry.variadic;
    parameter.default = match (entry.default, entry.default_constant) {
        (Some(value), _) => ParameterDefault::Literal(value),
        (None, Some(constant)) => ParameterDefault::Constant(constant),
        (None, None) => ParameterDefault::None,
    };
    parameter
}

/// Parse a written type: `?T` is nullable `T`, and so is a union naming
/// `null`.
pub(crate) fn parse_native_type(written: &str) -> Option<NativeType> {
    let written = written.trim();
    if written.is_empty() {
        return None;
    }

    if let Some(inner) = written.strip_prefix('?') {
        return Some(NativeType::nullable(inner.trim()));
    }

    let allows_null = written
        .split('|')
        .any(|part| part.trim().eq_ignore_ascii_case("null"))
        || written.eq_ignore_ascii_case("mixed");
    Some(NativeType {
        name: written.to_string(),
        allows_null,
    })
}

#[cfg(test)]
mod tests {
    use stubble_ir::{TypeKind, Value, Visibility};

    use super::*;

    #[test]
    fn test_parse_native_type() {
        assert_eq!(parse_native_type("int"), Some(NativeType::new("int")));
        assert_eq!(parse_native_type("?string"), Some(NativeType::nullable("string")));
        assert_eq!(parse_native_type("  "), None);

        let union = parse_native_type("int|null").unwrap();
        assert_eq!(union.name, "int|null");
        assert!(union.allows_null);
        assert!(parse_native_type("mixed").unwrap().allows_null);
    }

    #[test]
    fn test_lower_parameter_defaults() {
        let literal = lower_parameter(ParameterEntry {
            name: "$limit".into(),
            ty: Some("int".into()),
            by_reference: false,
            variadic: false,
            default: Some(Value::Int(10)),
            default_constant: None,
        });
        assert_eq!(literal.name, "limit");
        assert_eq!(literal.default, ParameterDefault::Literal(Value::Int(10)));

        let constant = lower_parameter(ParameterEntry {
            name: "mode".into(),
            ty: None,
            by_reference: true,
            variadic: false,
            default: None,
            default_constant: Some("self::ANY".into()),
        });
        assert!(constant.by_reference);
        assert_eq!(constant.default, ParameterDefault::Constant("self::ANY".into()));
    }

    #[test]
    fn test_lower_type_collects_property_defaults() {
        let file: CatalogFile = toml::from_str(
            r#"
            [types.Counter]
            properties = [
                { name = "count", static = true, visibility = "private", default = 0 },
                { name = "label" },
            ]
            "#,
        )
        .unwrap();

        let catalog = Catalog::from(file);
        let info = catalog.reflect("counter").unwrap();
        assert_eq!(info.kind, TypeKind::Class);
        assert_eq!(info.properties.len(), 2);
        assert_eq!(info.properties[0].visibility, Visibility::Private);
        assert_eq!(info.default_properties.get("count"), Some(&Value::Int(0)));
        assert!(!info.default_properties.contains_key("label"));
    }
}
