//! Extraction of a [`ClassModel`] from a [`TypeIntrospector`].

use stubble_ir::{
    ClassModel, DefaultValue, Member, MemberScope, MethodSignature, MethodTable, Parameter,
    TypeKind, Value, Visibility,
};

use crate::{
    Error, Result,
    docblock::{self, with_nullable_marker},
    introspect::{
        MethodInfo, NativeType, ParameterDefault, ParameterInfo, TypeInfo, TypeIntrospector,
    },
};

/// Reads one type from an introspector into a [`ClassModel`].
///
/// Construction fails if the type cannot be resolved. [`parse`](Self::parse)
/// fills the model; calling it again rebuilds the model from scratch.
///
/// # Example
///
/// ```
/// use stubble_core::{MemoryIntrospector, Reflector, TypeInfo};
/// use stubble_ir::TypeKind;
///
/// let host = MemoryIntrospector::new().with(TypeInfo::new("App\\Clock", TypeKind::Interface));
/// let mut reflector = Reflector::new(&host, "App\\Clock", true).unwrap();
/// let model = reflector.parse().unwrap();
/// assert_eq!(model.simple_name, "Clock");
/// assert_eq!(model.namespace, "App");
/// ```
#[derive(Debug)]
pub struct Reflector<I> {
    introspector: I,
    name: String,
    pretty_print: bool,
    model: ClassModel,
    parsed: bool,
}

impl<I: TypeIntrospector> Reflector<I> {
    /// Resolve `name` and prepare an empty model for it.
    pub fn new(introspector: I, name: &str, pretty_print: bool) -> Result<Self> {
        let info = introspector
            .reflect(name)
            .ok_or_else(|| Error::type_not_found(name))?;
        let model = ClassModel::new(&info.name);
        let name = model.qualified_name.clone();

        Ok(Self {
            introspector,
            name,
            pretty_print,
            model,
            parsed: false,
        })
    }

    /// Extract all data from the type, replacing any previous result.
    pub fn parse(&mut self) -> Result<&ClassModel> {
        self.parsed = false;
        let info = self
            .introspector
            .reflect(&self.name)
            .ok_or_else(|| Error::type_not_found(&self.name))?;

        let _span = tracing::debug_span!("extract", ty = %self.name).entered();
        self.model = extract(&self.introspector, info);
        self.parsed = true;

        tracing::debug!(
            constants = self.model.constants.len(),
            fields = self.model.instance_fields.len() + self.model.static_fields.len(),
            methods = self.model.method_count(),
            "extracted type"
        );
        Ok(&self.model)
    }

    /// Parse unless a model is already available.
    pub fn ensure_parsed(&mut self) -> Result<&ClassModel> {
        if self.parsed {
            Ok(&self.model)
        } else {
            self.parse()
        }
    }
}

impl<I> Reflector<I> {
    /// The current model; empty until parsed.
    pub fn model(&self) -> &ClassModel {
        &self.model
    }

    pub fn into_model(self) -> ClassModel {
        self.model
    }

    pub fn is_parsed(&self) -> bool {
        self.parsed
    }

    pub fn pretty_print(&self) -> bool {
        self.pretty_print
    }

    /// Fully qualified name of the reflected type.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Build a complete model for `info`.
///
/// `introspector` is only consulted to classify the parent type.
pub fn extract(introspector: &impl TypeIntrospector, info: &TypeInfo) -> ClassModel {
    let mut model = ClassModel::new(&info.name);

    model.kind = info.kind;
    model.is_final = info.is_final;
    model.is_abstract = info.is_abstract;
    model.doc_comment = non_empty(info.doc_comment.as_deref());

    extract_interfaces(&mut model, info);
    extract_parent(&mut model, introspector, info);
    extract_constants(&mut model, info);
    extract_fields(&mut model, info);
    model.methods = extract_methods(info);

    model
}

fn extract_interfaces(model: &mut ClassModel, info: &TypeInfo) {
    // Interfaces extend other interfaces rather than implementing them.
    if model.kind == TypeKind::Interface {
        model.extends = info.interfaces.clone();
    } else {
        model.implements = info.interfaces.clone();
    }
}

fn extract_parent(model: &mut ClassModel, introspector: &impl TypeIntrospector, info: &TypeInfo) {
    let Some(parent) = info.parent.as_deref() else {
        return;
    };

    let parent_kind = introspector.reflect(parent).map(|p| p.kind);
    if parent_kind.is_none() {
        tracing::debug!(parent, "parent type not resolvable, treating it as a class");
    }

    let name = parent.trim_start_matches(stubble_ir::NAMESPACE_SEPARATOR).to_string();
    match parent_kind {
        Some(TypeKind::Interface) if model.kind != TypeKind::Interface => {
            model.implements.push(name)
        }
        _ => model.extends.push(name),
    }
}

fn extract_constants(model: &mut ClassModel, info: &TypeInfo) {
    model.constants = info
        .constants
        .iter()
        .map(|c| {
            member(
                &c.name,
                c.doc_comment.as_deref(),
                c.visibility,
                c.value.clone(),
            )
        })
        .collect();
}

fn extract_fields(model: &mut ClassModel, info: &TypeInfo) {
    model.instance_fields.clear();
    model.static_fields.clear();

    for prop in &info.properties {
        // Properties missing from the default table have no default at all.
        let default = info.default_properties.get(&prop.name).cloned();
        let field = member(
            &prop.name,
            prop.doc_comment.as_deref(),
            prop.visibility,
            default,
        );

        if prop.is_static {
            model.static_fields.push(field);
        } else {
            model.instance_fields.push(field);
        }
    }
}

/// Build a constant or field record.
///
/// The type comes from the value when it is conclusive; null or missing
/// values fall back to the `@var` annotation.
fn member(name: &str, doc: Option<&str>, visibility: Visibility, value: Option<Value>) -> Member {
    let doc_comment = non_empty(doc);
    let inferred_type = value
        .as_ref()
        .and_then(Value::php_type)
        .map(str::to_string)
        .or_else(|| doc_comment.as_deref().and_then(|d| docblock::var_type(d).render()));

    Member {
        name: name.trim_start_matches('$').to_string(),
        doc_comment,
        visibility,
        value,
        inferred_type,
    }
}

fn extract_methods(info: &TypeInfo) -> MethodTable {
    let mut table = MethodTable::new();

    for method in &info.methods {
        let scope = MemberScope::from_static(method.is_static);
        table.push(scope, method.visibility, method_signature(method));
    }

    table
}

fn method_signature(method: &MethodInfo) -> MethodSignature {
    let doc_comment = non_empty(method.doc_comment.as_deref());

    let return_type = match &method.return_type {
        Some(native) => Some(native_type(native)),
        None => doc_comment
            .as_deref()
            .and_then(|d| docblock::return_type(d).render()),
    };

    let parameters = method
        .parameters
        .iter()
        .map(|p| parameter(&method.name, p, doc_comment.as_deref()))
        .collect();

    MethodSignature {
        name: method.name.clone(),
        doc_comment,
        is_final: method.is_final,
        is_abstract: method.is_abstract,
        return_type,
        parameters,
    }
}

fn parameter(method: &str, param: &ParameterInfo, doc: Option<&str>) -> Parameter {
    let name = param.name.trim_start_matches('$').to_string();

    let ty = if let Some(native) = &param.native_type {
        Some(native_type(native))
    } else if param.is_array {
        Some("array".to_string())
    } else if param.is_callable {
        Some("callable".to_string())
    } else {
        doc.and_then(|d| docblock::param_type(d, &name).render())
    };

    let default = match &param.default {
        ParameterDefault::None => None,
        ParameterDefault::Literal(value) => Some(DefaultValue::Literal(value.clone())),
        ParameterDefault::Constant(constant) => Some(DefaultValue::Constant(constant.clone())),
        ParameterDefault::Unreadable(reason) => {
            tracing::warn!(
                method,
                param = %name,
                reason = %reason,
                "default value unreadable, treating parameter as having no default"
            );
            None
        }
    };

    Parameter {
        name,
        ty,
        by_reference: param.by_reference,
        variadic: param.variadic,
        default,
    }
}

fn native_type(native: &NativeType) -> String {
    with_nullable_marker(&native.name, native.allows_null)
}

fn non_empty(doc: Option<&str>) -> Option<String> {
    doc.filter(|d| !d.trim().is_empty()).map(str::to_string)
}
