//! Catalog parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{
    Catalog, Error, Result,
    error::SourceContext,
    file::CatalogFile,
    validate::{ParseContext, validate_catalog},
};

/// Catalog file syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Toml,
    Json,
}

impl Format {
    /// Pick the format from a file extension; anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Toml,
        }
    }
}

impl FromStr for Catalog {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_catalog(s, "catalog.toml", Format::Toml)
    }
}

impl Catalog {
    /// Load a catalog file, choosing the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_catalog(&content, &path.display().to_string(), Format::from_path(path))
    }

    /// Parse catalog text with a custom filename for error reporting.
    pub fn from_str_with_format(content: &str, filename: &str, format: Format) -> Result<Self> {
        parse_catalog(content, filename, format)
    }
}

/// Parse and validate a catalog.
pub fn parse_catalog(content: &str, filename: &str, format: Format) -> Result<Catalog> {
    let source_ctx = SourceContext::new(content, filename);
    let file: CatalogFile = match format {
        Format::Toml => toml::from_str(content).map_err(|e| source_ctx.toml_error(e))?,
        Format::Json => serde_json::from_str(content).map_err(|e| source_ctx.json_error(e))?,
    };

    validate_catalog(&file, &ParseContext::new(content, filename))?;
    tracing::debug!(filename, types = file.types.len(), "parsed catalog");
    Ok(Catalog::from(file))
}
