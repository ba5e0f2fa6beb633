//! On-disk catalog schema.
//!
//! ```toml
//! [types."App\\Greeter"]
//! kind = "class"
//! parent = "App\\Base"
//! interfaces = ["Stringable"]
//!
//! [[types."App\\Greeter".constants]]
//! name = "DEFAULT"
//! value = "hello"
//!
//! [[types."App\\Greeter".methods]]
//! name = "greet"
//! returns = "string"
//! parameters = [{ name = "who", type = "?string", default = { "$null" = true } }]
//! ```
//!
//! The same structure is accepted as JSON.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use stubble_ir::{TypeKind, Value, Visibility};

/// Root of a catalog file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    /// Types keyed by fully qualified name, in file order.
    #[serde(default)]
    pub types: IndexMap<String, TypeEntry>,
}

/// One class, interface or trait.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeEntry {
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    #[serde(default, rename = "final")]
    pub is_final: bool,
    pub doc: Option<String>,
    /// Direct supertype.
    pub parent: Option<String>,
    /// Directly declared interfaces.
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub constants: Vec<ConstantEntry>,
    #[serde(default)]
    pub properties: Vec<PropertyEntry>,
    #[serde(default)]
    pub methods: Vec<MethodEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstantEntry {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    pub doc: Option<String>,
    /// Missing for constants whose value is not known statically.
    #[serde(default, deserialize_with = "present")]
    pub value: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyEntry {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    pub doc: Option<String>,
    /// Missing means the property has no default at all.
    #[serde(default, deserialize_with = "present")]
    pub default: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodEntry {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default, rename = "final")]
    pub is_final: bool,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    pub doc: Option<String>,
    /// Native return type; a leading `?` marks it nullable.
    pub returns: Option<String>,
    #[serde(default)]
    pub parameters: Vec<ParameterEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterEntry {
    pub name: String,
    /// Native type; a leading `?` marks it nullable.
    #[serde(rename = "type")]
    pub ty: Option<String>,
    #[serde(default)]
    pub by_reference: bool,
    #[serde(default)]
    pub variadic: bool,
    /// Literal default value.
    #[serde(default, deserialize_with = "present")]
    pub default: Option<Value>,
    /// Default given as a constant expression, e.g. `self::LIMIT`.
    pub default_constant: Option<String>,
}

/// A value that is present, even as JSON `null`, is `Some`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_type_defaults() {
        let file: CatalogFile = toml::from_str("[types.Foo]\n").unwrap();
        let entry = &file.types["Foo"];
        assert_eq!(entry.kind, TypeKind::Class);
        assert!(!entry.is_abstract);
        assert!(entry.methods.is_empty());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<CatalogFile, _> = toml::from_str("[types.Foo]\ncolour = \"red\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_member_fields() {
        let file: CatalogFile = toml::from_str(
            r#"
            [types."App\\Repo"]
            kind = "interface"

            [[types."App\\Repo".methods]]
            name = "find"
            static = true
            returns = "?object"
            parameters = [
                { name = "id", type = "int" },
                { name = "opts", default = [1, 2] },
                { name = "mode", default_constant = "self::ANY" },
            ]
            "#,
        )
        .unwrap();

        let entry = &file.types["App\\Repo"];
        assert_eq!(entry.kind, TypeKind::Interface);
        let find = &entry.methods[0];
        assert!(find.is_static);
        assert_eq!(find.visibility, Visibility::Public);
        assert_eq!(find.returns.as_deref(), Some("?object"));
        assert_eq!(find.parameters[0].ty.as_deref(), Some("int"));
        assert_eq!(
            find.parameters[1].default,
            Some(Value::list([Value::Int(1), Value::Int(2)]))
        );
        assert_eq!(find.parameters[2].default_constant.as_deref(), Some("self::ANY"));
    }

    #[test]
    fn test_json_null_default_is_present() {
        let file: CatalogFile = serde_json::from_str(
            r#"{"types": {"Foo": {"properties": [
                {"name": "a", "default": null},
                {"name": "b"}
            ]}}}"#,
        )
        .unwrap();

        let properties = &file.types["Foo"].properties;
        assert_eq!(properties[0].default, Some(Value::Null));
        assert_eq!(properties[1].default, None);
    }
}
