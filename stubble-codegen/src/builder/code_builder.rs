//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Line-oriented writer that tracks the current indentation level.
///
/// ```
/// use stubble_codegen::builder::{CodeBuilder, Indent};
///
/// let mut builder = CodeBuilder::new(Indent::TAB);
/// builder
///     .push_line("interface Foo {")
///     .push_indent()
///     .push_line("function bar();")
///     .push_dedent()
///     .push_line("}");
/// assert_eq!(builder.build(), "interface Foo {\n\tfunction bar();\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a `/** ... */` comment at the current indentation.
    ///
    /// Every line is trimmed and continuation lines starting with `*` are
    /// aligned one space in, so the stars form a column whatever the original
    /// indentation was. Lines consisting of a lone `*` are dropped unless
    /// `keep_blank` is set.
    pub fn push_doc_comment(&mut self, text: &str, keep_blank: bool) -> &mut Self {
        for (i, raw) in text.trim().lines().enumerate() {
            let line = raw.trim();
            if i == 0 {
                self.push_line(line);
            } else if line.starts_with('*') {
                if keep_blank || line != "*" {
                    self.push_line(&format!(" {}", line));
                }
            } else if line.is_empty() {
                if keep_blank {
                    self.push_blank();
                }
            } else {
                self.push_line(line);
            }
        }
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::DocComment { text, keep_blank } => {
                self.push_doc_comment(&text, keep_blank);
            }
        }
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}
