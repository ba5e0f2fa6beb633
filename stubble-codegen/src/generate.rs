//! One-call skeleton generation from a [`Reflector`].

use stubble_core::{Reflector, Result, TypeIntrospector};

use crate::{
    builder::Indent,
    renderer::{PhpRenderer, RenderOptions},
};

/// Render the reflected type as PHP source.
pub trait GenerateSignatures {
    /// Parse the type if needed and render it.
    ///
    /// `tab` overrides the indentation unit; `None` or an empty string keeps
    /// the four-space default. The output mode follows the reflector's
    /// `pretty_print` flag.
    fn generate_php_signatures(&mut self, tab: Option<&str>) -> Result<String>;
}

impl<I: TypeIntrospector> GenerateSignatures for Reflector<I> {
    fn generate_php_signatures(&mut self, tab: Option<&str>) -> Result<String> {
        let options = RenderOptions {
            pretty: self.pretty_print(),
            indent: Indent::or_default(tab),
        };
        let model = self.ensure_parsed()?;
        Ok(PhpRenderer::new(options).render(model))
    }
}
