//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Declarations are turned into fragments first and written by a
//! [`CodeBuilder`](super::CodeBuilder) afterwards, so they never need to know
//! the current indentation.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A `/** ... */` comment, re-indented line by line.
    DocComment { text: String, keep_blank: bool },
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    /// A doc comment; blank ` *` lines are dropped unless `keep_blank`.
    pub fn doc_comment(text: impl Into<String>, keep_blank: bool) -> Self {
        Self::DocComment {
            text: text.into(),
            keep_blank,
        }
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}
