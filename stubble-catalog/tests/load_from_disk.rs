//! Loading catalogs from files and reading them through the reflector.

use std::fs;

use stubble_catalog::{Catalog, Error};
use stubble_core::Reflector;
use stubble_ir::{Value, Visibility};
use tempfile::TempDir;

const SHOP_TOML: &str = r#"
[types."Shop\\Contract"]
kind = "interface"

[types."Shop\\Base"]
abstract = true

[types."Shop\\Cart"]
parent = "Shop\\Contract"
doc = "/** A shopping cart. */"

[[types."Shop\\Cart".constants]]
name = "LIMIT"
value = 20

[[types."Shop\\Cart".properties]]
name = "items"
visibility = "protected"
default = []

[[types."Shop\\Cart".methods]]
name = "add"
returns = "?static"
parameters = [
    { name = "sku", type = "string" },
    { name = "qty", type = "int", default = 1 },
]
"#;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write catalog");
    path
}

#[test]
fn test_toml_catalog_through_reflector() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write(&temp_dir, "shop.toml", SHOP_TOML);

    let catalog = Catalog::from_file(&path).expect("Failed to load catalog");
    let names: Vec<_> = catalog.types().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Shop\\Contract", "Shop\\Base", "Shop\\Cart"]);

    let mut reflector = Reflector::new(&catalog, "\\Shop\\Cart", true).unwrap();
    let model = reflector.parse().unwrap();

    assert_eq!(model.namespace, "Shop");
    assert_eq!(model.simple_name, "Cart");
    // An interface parent is implemented, not extended.
    assert!(model.extends.is_empty());
    assert_eq!(model.implements, ["Shop\\Contract"]);
    assert_eq!(model.constants[0].value, Some(Value::Int(20)));

    let items = &model.instance_fields[0];
    assert_eq!(items.visibility, Visibility::Protected);
    assert_eq!(items.value, Some(Value::list([])));
    assert_eq!(items.inferred_type.as_deref(), Some("array"));
}

#[test]
fn test_json_catalog_by_extension() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write(
        &temp_dir,
        "shapes.json",
        r#"{
            "types": {
                "Geo\\Shape": {
                    "kind": "interface",
                    "methods": [{ "name": "area", "returns": "float" }]
                }
            }
        }"#,
    );

    let catalog = Catalog::from_file(&path).expect("Failed to load catalog");
    assert_eq!(catalog.len(), 1);

    let mut reflector = Reflector::new(&catalog, "Geo\\Shape", false).unwrap();
    let model = reflector.parse().unwrap();
    assert!(model.is_interface());
    assert_eq!(model.method_count(), 1);
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = Catalog::from_file(temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}

#[test]
fn test_validation_error_names_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write(
        &temp_dir,
        "broken.toml",
        "[types.Foo]\nabstract = true\nfinal = true\n",
    );

    let err = Catalog::from_file(&path).unwrap_err();
    match *err {
        Error::Validation { src, message, .. } => {
            assert!(message.contains("abstract and final"));
            assert!(src.name().ends_with("broken.toml"));
        }
        other => panic!("expected a validation error, got {other:?}"),
    }
}
