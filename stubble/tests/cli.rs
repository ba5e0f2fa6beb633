//! End-to-end runs of the stubble binary.

use std::{fs, path::PathBuf, process::Command};

use tempfile::TempDir;

const CATALOG: &str = r#"
[types."Demo\\Greeter"]
doc = "/** Says hello. */"

[[types."Demo\\Greeter".constants]]
name = "GREETING"
value = "hello"

[[types."Demo\\Greeter".methods]]
name = "greet"
returns = "string"
parameters = [{ name = "name", type = "?string" }]
"#;

fn stubble() -> Command {
    Command::new(env!("CARGO_BIN_EXE_stubble"))
}

fn write_catalog(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("catalog.toml");
    fs::write(&path, content).expect("Failed to write catalog");
    path
}

#[test]
fn test_render_compact_to_stdout() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let catalog = write_catalog(&temp_dir, CATALOG);

    let output = stubble()
        .arg("render")
        .arg(&catalog)
        .arg("Demo\\Greeter")
        .arg("--compact")
        .output()
        .expect("Failed to run stubble");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("namespace Demo {\n"));
    assert!(stdout.contains("public const GREETING='hello';"));
    assert!(stdout.contains("public function greet(?string $name): string {}"));
}

#[test]
fn test_render_to_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let catalog = write_catalog(&temp_dir, CATALOG);
    let target = temp_dir.path().join("Greeter.php");

    let status = stubble()
        .arg("render")
        .arg(&catalog)
        .arg("Demo\\Greeter")
        .arg("--output")
        .arg(&target)
        .status()
        .expect("Failed to run stubble");

    assert!(status.success());
    let php = fs::read_to_string(&target).unwrap();
    assert!(php.contains("#region // C L A S S   C O N S T A N T S"));
    assert_eq!(php.matches('{').count(), php.matches('}').count());
}

#[test]
fn test_inspect_prints_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let catalog = write_catalog(&temp_dir, CATALOG);

    let output = stubble()
        .arg("inspect")
        .arg(&catalog)
        .arg("Demo\\Greeter")
        .output()
        .expect("Failed to run stubble");

    assert!(output.status.success());
    let model: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(model["qualified_name"], "Demo\\Greeter");
    assert_eq!(model["namespace"], "Demo");
}

#[test]
fn test_unknown_type_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let catalog = write_catalog(&temp_dir, CATALOG);

    let output = stubble()
        .arg("render")
        .arg(&catalog)
        .arg("Demo\\Missing")
        .output()
        .expect("Failed to run stubble");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not be resolved"));
}

#[test]
fn test_invalid_catalog_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let catalog = write_catalog(&temp_dir, "[types.Function]\n");

    let output = stubble()
        .arg("list")
        .arg(&catalog)
        .output()
        .expect("Failed to run stubble");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("reserved word"));
}
