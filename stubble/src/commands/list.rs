use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Path to a .toml or .json catalog
    pub catalog: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let catalog = stubble_catalog::Catalog::from_file(&self.catalog).unwrap_or_exit();
        ops::list(&catalog).render(&mut TerminalOutput::new());
        Ok(())
    }
}
