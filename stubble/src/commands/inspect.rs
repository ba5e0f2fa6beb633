use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::ops;

#[derive(Args)]
pub struct InspectCommand {
    /// Path to a .toml or .json catalog
    pub catalog: PathBuf,

    /// Fully qualified type name
    #[arg(value_name = "TYPE")]
    pub type_name: String,
}

impl InspectCommand {
    pub fn run(&self) -> Result<()> {
        let catalog = stubble_catalog::Catalog::from_file(&self.catalog).unwrap_or_exit();
        let model = ops::inspect(&catalog, &self.type_name).unwrap_or_exit();
        println!("{}", serde_json::to_string_pretty(&model)?);
        Ok(())
    }
}
