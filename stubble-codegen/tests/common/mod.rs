//! Shared host fixtures.

#![allow(dead_code)]

use stubble_codegen::GenerateSignatures;
use stubble_core::{
    ConstantInfo, MemoryIntrospector, MethodInfo, NativeType, ParameterDefault, ParameterInfo,
    PropertyInfo, Reflector, TypeInfo,
};
use stubble_ir::{TypeKind, Value, Visibility};

pub const INVOICE: &str = "Acme\\Billing\\Invoice";

/// Reflect `name` and render it with the default indentation.
pub fn render(host: &MemoryIntrospector, name: &str, pretty: bool) -> String {
    let mut reflector = Reflector::new(host, name, pretty).unwrap();
    reflector.generate_php_signatures(None).unwrap()
}

pub fn constant_host() -> MemoryIntrospector {
    let mut info = TypeInfo::new("Config", TypeKind::Class);
    info.constants.push(ConstantInfo {
        name: "X".into(),
        doc_comment: None,
        visibility: Visibility::Public,
        value: Some(Value::list([Value::Int(1), Value::Int(2), Value::from("a")])),
    });
    MemoryIntrospector::new().with(info)
}

/// A class touching every section, used by the whole-document properties.
pub fn rich_host() -> MemoryIntrospector {
    let mut info = TypeInfo::new("Acme\\Billing\\Invoice", TypeKind::Class);
    info.is_abstract = true;
    info.doc_comment = Some("/**\n * An invoice.\n */".into());
    info.parent = Some("Acme\\Billing\\Document".into());
    info.interfaces = vec!["JsonSerializable".into(), "Countable".into()];
    info.constants = vec![
        ConstantInfo {
            name: "STATUS".into(),
            doc_comment: None,
            visibility: Visibility::Public,
            value: Some(Value::map([("open", Value::Int(1)), ("closed", Value::Int(2))])),
        },
        ConstantInfo {
            name: "PREFIX".into(),
            doc_comment: Some("/** @var string */".into()),
            visibility: Visibility::Protected,
            value: Some(Value::from("INV-")),
        },
    ];
    info.properties = vec![
        PropertyInfo {
            name: "lines".into(),
            doc_comment: Some("/**\n * @var array\n */".into()),
            visibility: Visibility::Protected,
            is_static: false,
        },
        PropertyInfo {
            name: "legacy".into(),
            doc_comment: None,
            visibility: Visibility::Unmarked,
            is_static: false,
        },
        PropertyInfo {
            name: "count".into(),
            doc_comment: None,
            visibility: Visibility::Private,
            is_static: true,
        },
    ];
    info.default_properties
        .insert("lines".into(), Value::list([Value::list([Value::Int(1)])]));
    info.default_properties.insert("count".into(), Value::Int(0));

    let mut total = MethodInfo::new("total");
    total.return_type = Some(NativeType::new("float"));
    let mut add = MethodInfo::new("add");
    add.doc_comment = Some("/**\n * @param string|null $label\n * @return static\n */".into());
    let mut label = ParameterInfo::new("label");
    label.default = ParameterDefault::Literal(Value::Null);
    let mut amount = ParameterInfo::new("amount");
    amount.native_type = Some(NativeType::new("float"));
    amount.default = ParameterDefault::Constant("self::ZERO".into());
    add.parameters = vec![amount, label];
    let mut validate = MethodInfo::new("validate");
    validate.visibility = Visibility::Protected;
    validate.is_abstract = true;
    validate.return_type = Some(NativeType::new("void"));
    let mut create = MethodInfo::new("create");
    create.is_static = true;
    create.is_final = true;
    let mut items = ParameterInfo::new("items");
    items.is_array = true;
    items.variadic = true;
    create.parameters = vec![items];
    info.methods = vec![total, add, validate, create];

    MemoryIntrospector::new()
        .with(info)
        .with(TypeInfo::new("Acme\\Billing\\Document", TypeKind::Class))
}
