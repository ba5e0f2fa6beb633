//! Render and inspect operations.

use stubble_catalog::Catalog;
use stubble_codegen::GenerateSignatures;
use stubble_core::{Reflector, Result};
use stubble_ir::ClassModel;

/// What to render and how.
#[derive(Debug, Clone)]
pub struct RenderRequest<'a> {
    pub type_name: &'a str,
    pub pretty: bool,
    /// Indentation unit; `None` keeps the default.
    pub tab: Option<&'a str>,
}

/// Render one catalog type as PHP source.
pub fn render(catalog: &Catalog, request: &RenderRequest) -> Result<String> {
    let mut reflector = Reflector::new(catalog, request.type_name, request.pretty)?;
    tracing::debug!(ty = reflector.name(), pretty = request.pretty, "rendering");
    reflector.generate_php_signatures(request.tab)
}

/// Extract the class model of one catalog type.
pub fn inspect(catalog: &Catalog, type_name: &str) -> Result<ClassModel> {
    let mut reflector = Reflector::new(catalog, type_name, true)?;
    reflector.parse()?;
    Ok(reflector.into_model())
}
