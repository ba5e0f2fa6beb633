//! Check operation - reference validation.

use std::path::Path;

use stubble_catalog::Catalog;
use stubble_core::TypeIntrospector;
use stubble_ir::TypeKind;

use crate::reports::CheckReport;

/// Look for supertypes the catalog cannot resolve or that have the wrong
/// kind.
///
/// Structural errors were already rejected while loading; everything found
/// here still renders, so it is reported as a warning.
pub fn check(catalog: &Catalog, catalog_path: &Path) -> CheckReport {
    let mut warnings = Vec::new();

    for info in catalog.types() {
        if let Some(parent) = &info.parent {
            match catalog.reflect(parent) {
                None => warnings.push(format!(
                    "'{}' extends '{}', which is not in the catalog",
                    info.name, parent
                )),
                Some(p) if p.kind == TypeKind::Trait => warnings.push(format!(
                    "'{}' extends trait '{}'",
                    info.name, parent
                )),
                Some(_) => {}
            }
        }

        for interface in &info.interfaces {
            match catalog.reflect(interface) {
                None => warnings.push(format!(
                    "'{}' implements '{}', which is not in the catalog",
                    info.name, interface
                )),
                Some(i) if i.kind != TypeKind::Interface => warnings.push(format!(
                    "'{}' implements '{}', which is a {}",
                    info.name,
                    interface,
                    i.kind.as_str()
                )),
                Some(_) => {}
            }
        }
    }

    CheckReport {
        catalog_path: catalog_path.to_path_buf(),
        types: catalog.len(),
        warnings,
    }
}
