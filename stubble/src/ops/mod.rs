//! Core operations.
//!
//! This module contains the business logic for stubble commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod list;
pub mod render;

pub use check::check;
pub use list::list;
pub use render::{RenderRequest, inspect, render};

#[cfg(test)]
pub(crate) mod fixtures {
    use stubble_catalog::Catalog;

    pub const SHOP: &str = r#"
        [types."Shop\\Priced"]
        kind = "interface"

        [[types."Shop\\Priced".methods]]
        name = "price"
        returns = "float"

        [types."Shop\\Item"]
        parent = "Shop\\Model"
        interfaces = ["Shop\\Priced", "Shop\\Tagged"]

        [[types."Shop\\Item".constants]]
        name = "TAX"
        value = 0.2

        [[types."Shop\\Item".methods]]
        name = "price"
        returns = "float"
    "#;

    pub fn shop() -> Catalog {
        SHOP.parse().expect("fixture catalog is valid")
    }
}
