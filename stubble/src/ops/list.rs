//! List operation - catalog contents.

use stubble_catalog::Catalog;

use crate::reports::{ListReport, TypeSummary};

/// Summarize every type in the catalog, in declaration order.
pub fn list(catalog: &Catalog) -> ListReport {
    let types = catalog
        .types()
        .map(|info| TypeSummary {
            name: info.name.clone(),
            kind: info.kind,
            constants: info.constants.len(),
            properties: info.properties.len(),
            methods: info.methods.len(),
        })
        .collect();

    ListReport { types }
}
