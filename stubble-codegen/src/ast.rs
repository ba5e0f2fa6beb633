//! Declaration nodes of a PHP type skeleton.

use crate::builder::{CodeFragment, Renderable};

/// One member declaration with its optional doc comment.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    doc: Option<String>,
    line: String,
    keep_blank_doc_lines: bool,
}

impl Declaration {
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            doc: None,
            line: line.into(),
            keep_blank_doc_lines: true,
        }
    }

    pub fn doc(mut self, doc: Option<&str>) -> Self {
        self.doc = doc.map(str::to_string);
        self
    }

    /// Drop lone ` *` lines from the doc comment.
    pub fn compact_doc(mut self) -> Self {
        self.keep_blank_doc_lines = false;
        self
    }
}

impl Renderable for Declaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::with_capacity(2);
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::doc_comment(doc, self.keep_blank_doc_lines));
        }
        fragments.push(CodeFragment::line(&self.line));
        fragments
    }
}

/// A group of declarations, optionally wrapped in a `#region` banner.
///
/// With a banner every declaration is preceded by a blank line:
///
/// ```text
///
/// #region // C L A S S   C O N S T A N T S
///
/// const A = 1;
///
/// #endregion
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    banner: Option<String>,
    items: Vec<Declaration>,
}

impl Region {
    /// A region with a banner built from `title`.
    pub fn titled(title: &str, items: Vec<Declaration>) -> Self {
        Self {
            banner: Some(format!("#region // {}", spaced(title))),
            items,
        }
    }

    /// A bare run of declarations.
    pub fn plain(items: Vec<Declaration>) -> Self {
        Self {
            banner: None,
            items,
        }
    }
}

impl Renderable for Region {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let Some(banner) = &self.banner else {
            return self.items.iter().flat_map(|d| d.to_fragments()).collect();
        };

        let mut fragments = vec![CodeFragment::blank(), CodeFragment::line(banner)];
        for item in &self.items {
            fragments.push(CodeFragment::blank());
            fragments.extend(item.to_fragments());
        }
        fragments.push(CodeFragment::blank());
        fragments.push(CodeFragment::line("#endregion"));
        fragments
    }
}

/// Letter-space a banner title: `PUBLIC METHODS` becomes
/// `P U B L I C   M E T H O D S`.
pub fn spaced(title: &str) -> String {
    title
        .split_whitespace()
        .map(|word| {
            word.chars()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("   ")
}
