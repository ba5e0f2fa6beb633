//! List command report data structures.

use stubble_ir::TypeKind;

use super::output::{Output, Report};

/// Types found in a catalog.
#[derive(Debug)]
pub struct ListReport {
    pub types: Vec<TypeSummary>,
}

/// One catalog type with its member counts.
#[derive(Debug)]
pub struct TypeSummary {
    pub name: String,
    pub kind: TypeKind,
    pub constants: usize,
    pub properties: usize,
    pub methods: usize,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.types.is_empty() {
            out.preformatted("No types defined");
            return;
        }

        out.section("Types");
        for ty in &self.types {
            out.list_item(&format!(
                "{} {} ({} constants, {} properties, {} methods)",
                ty.kind.as_str(),
                ty.name,
                ty.constants,
                ty.properties,
                ty.methods
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_empty() {
        let mut out = RecordingOutput::default();
        ListReport { types: Vec::new() }.render(&mut out);
        assert_eq!(out.lines, ["No types defined"]);
    }

    #[test]
    fn test_render_types() {
        let report = ListReport {
            types: vec![TypeSummary {
                name: "App\\Clock".into(),
                kind: TypeKind::Interface,
                constants: 0,
                properties: 0,
                methods: 2,
            }],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            [
                "Types:",
                "  - interface App\\Clock (0 constants, 0 properties, 2 methods)"
            ]
        );
    }
}
