//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from catalog validation.
#[derive(Debug)]
pub struct CheckReport {
    pub catalog_path: PathBuf,
    /// Number of types loaded.
    pub types: usize,
    pub warnings: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        if !self.warnings.is_empty() {
            out.newline();
        }

        out.preformatted(&format!(
            "✓ {} is valid ({} type{})",
            self.catalog_path.display(),
            self.types,
            if self.types == 1 { "" } else { "s" }
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_with_warnings() {
        let report = CheckReport {
            catalog_path: PathBuf::from("shop.toml"),
            types: 1,
            warnings: vec!["'A' extends 'B', which is not in the catalog".into()],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            [
                "warning: 'A' extends 'B', which is not in the catalog",
                "",
                "✓ shop.toml is valid (1 type)",
            ]
        );
    }
}
