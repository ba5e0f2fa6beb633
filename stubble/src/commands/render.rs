use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::ops::{self, RenderRequest};

#[derive(Args)]
pub struct RenderCommand {
    /// Path to a .toml or .json catalog
    pub catalog: PathBuf,

    /// Fully qualified type name, e.g. 'App\Models\User'
    #[arg(value_name = "TYPE")]
    pub type_name: String,

    /// Minimal whitespace, no region banners
    #[arg(long)]
    pub compact: bool,

    /// Indentation unit (default: four spaces)
    #[arg(long, value_name = "UNIT", conflicts_with = "tabs")]
    pub tab: Option<String>,

    /// Indent with tab characters
    #[arg(long)]
    pub tabs: bool,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl RenderCommand {
    pub fn run(&self) -> Result<()> {
        let catalog = stubble_catalog::Catalog::from_file(&self.catalog).unwrap_or_exit();
        let request = RenderRequest {
            type_name: &self.type_name,
            pretty: !self.compact,
            tab: self.indent_unit(),
        };
        let php = ops::render(&catalog, &request).unwrap_or_exit();

        match &self.output {
            Some(path) => std::fs::write(path, php)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?,
            None => print!("{}", php),
        }
        Ok(())
    }

    fn indent_unit(&self) -> Option<&str> {
        if self.tabs {
            Some("\t")
        } else {
            self.tab.as_deref()
        }
    }
}
