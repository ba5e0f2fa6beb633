//! PHP skeleton renderer.

use stubble_ir::{
    ClassModel, DefaultValue, FIELD_GROUPS, Member, MemberScope, MethodGroup, MethodSignature,
    Parameter, TypeKind, Value, Visibility,
};

use crate::{
    ast::{Declaration, Region},
    builder::{CodeBuilder, Indent},
    encode::ValueEncoder,
};

/// Output formatting policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Banners, blank separator lines and padded signatures.
    pub pretty: bool,
    /// Unit written once per nesting level.
    pub indent: Indent,
}

impl RenderOptions {
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            indent: Indent::default(),
        }
    }

    pub fn compact() -> Self {
        Self {
            pretty: false,
            indent: Indent::default(),
        }
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::pretty()
    }
}

/// Renders a [`ClassModel`] as a PHP source skeleton.
///
/// All state of a render pass lives in a [`CodeBuilder`] created per call,
/// so one renderer can be shared freely.
///
/// # Example
///
/// ```
/// use stubble_codegen::{PhpRenderer, RenderOptions};
/// use stubble_ir::{ClassModel, Member, Value};
///
/// let mut model = ClassModel::new("Limits");
/// model.constants.push(Member::new("MAX").value(Value::Int(3)));
///
/// let php = PhpRenderer::new(RenderOptions::compact()).render(&model);
/// assert_eq!(php, "class Limits {\n    public const MAX=3;\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PhpRenderer {
    options: RenderOptions,
}

impl PhpRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render the complete document.
    pub fn render(&self, model: &ClassModel) -> String {
        let mut builder = CodeBuilder::new(self.options.indent.clone());
        let pretty = self.options.pretty;

        if model.has_namespace() {
            if pretty {
                builder
                    .push_line(&format!("namespace {}", model.namespace))
                    .push_line("{")
                    .push_blank();
            } else {
                builder.push_line(&format!("namespace {} {{", model.namespace));
            }
            builder.push_indent();
        }

        self.render_type(&mut builder, model);

        if model.has_namespace() {
            builder.push_dedent();
            if pretty {
                builder.push_blank();
            }
            builder.push_line("}");
        }

        tracing::debug!(
            ty = %model.qualified_name,
            pretty,
            bytes = builder.as_str().len(),
            "rendered skeleton"
        );
        builder.build()
    }

    fn render_type(&self, builder: &mut CodeBuilder, model: &ClassModel) {
        let pretty = self.options.pretty;

        if let Some(doc) = &model.doc_comment {
            builder.push_doc_comment(doc, pretty);
        }
        self.render_signature(builder, model);

        builder.push_indent();
        let level = builder.current_indent();

        let constants = model
            .constants
            .iter()
            .map(|c| self.constant(c, level))
            .collect();
        builder.emit(&self.region("CLASS CONSTANTS", constants));

        for scope in [MemberScope::Instance, MemberScope::Static] {
            for visibility in FIELD_GROUPS {
                let fields = model
                    .fields(scope)
                    .iter()
                    .filter(|f| f.visibility == visibility)
                    .map(|f| self.field(f, scope, level))
                    .collect();
                let title = group_title(visibility, scope, "CLASS FIELDS");
                builder.emit(&self.region(&title, fields));
            }
        }

        for group in model.methods.groups() {
            builder.emit(&self.method_region(model, group, level));
        }

        builder.push_dedent();
        if pretty {
            builder.push_blank();
        }
        builder.push_line("}");
    }

    fn render_signature(&self, builder: &mut CodeBuilder, model: &ClassModel) {
        let head = format!("{} {}", type_keyword(model), model.simple_name);

        let mut clauses = Vec::new();
        if !model.extends.is_empty() {
            clauses.push(format!("extends {}", model.extends.join(", ")));
        }
        if !model.implements.is_empty() {
            clauses.push(format!("implements {}", model.implements.join(", ")));
        }

        if self.options.pretty {
            builder.push_line(&head).push_indent();
            for clause in &clauses {
                builder.push_line(clause);
            }
            builder.push_dedent().push_line("{");
        } else {
            let mut line = head;
            for clause in &clauses {
                line.push(' ');
                line.push_str(clause);
            }
            line.push_str(" {");
            builder.push_line(&line);
        }
    }

    fn region(&self, title: &str, items: Vec<Declaration>) -> Region {
        if items.is_empty() || !self.options.pretty {
            Region::plain(items)
        } else {
            Region::titled(title, items)
        }
    }

    fn method_region(&self, model: &ClassModel, group: &MethodGroup, level: usize) -> Region {
        let methods = group
            .methods
            .iter()
            .map(|m| self.method(model, m, group.scope, group.visibility, level))
            .collect();
        let title = group_title(group.visibility, group.scope, "METHODS");
        self.region(&title, methods)
    }

    fn declaration(&self, line: String, doc: Option<&str>) -> Declaration {
        let decl = Declaration::new(line).doc(doc);
        if self.options.pretty {
            decl
        } else {
            decl.compact_doc()
        }
    }

    fn assign(&self) -> &'static str {
        if self.options.pretty { " = " } else { "=" }
    }

    fn literal(&self, value: &Value, level: usize) -> String {
        ValueEncoder::new(self.options.pretty, &self.options.indent).encode(value, level)
    }

    fn constant(&self, constant: &Member, level: usize) -> Declaration {
        let mut line = modifier(constant.visibility);
        line.push_str("const ");
        line.push_str(&constant.name);
        line.push_str(self.assign());
        line.push_str(&self.literal(constant.value.as_ref().unwrap_or(&Value::Null), level));
        line.push(';');

        self.declaration(line, constant.doc_comment.as_deref())
    }

    fn field(&self, field: &Member, scope: MemberScope, level: usize) -> Declaration {
        let mut line = match field.visibility.keyword() {
            Some(keyword) => format!("{} ", keyword),
            // a bare `$name;` is not a valid declaration
            None if !scope.is_static() => "var ".to_string(),
            None => String::new(),
        };
        if scope.is_static() {
            line.push_str("static ");
        }
        line.push('$');
        line.push_str(&field.name);
        if let Some(value) = &field.value {
            line.push_str(self.assign());
            line.push_str(&self.literal(value, level));
        }
        line.push(';');

        self.declaration(line, field.doc_comment.as_deref())
    }

    fn method(
        &self,
        model: &ClassModel,
        method: &MethodSignature,
        scope: MemberScope,
        visibility: Visibility,
        level: usize,
    ) -> Declaration {
        let pretty = self.options.pretty;
        let in_interface = model.is_interface();

        let mut line = modifier(visibility);
        if !in_interface {
            if method.is_final {
                line.push_str("final ");
            } else if method.is_abstract {
                line.push_str("abstract ");
            }
        }
        if scope.is_static() {
            line.push_str("static ");
        }
        line.push_str("function ");
        line.push_str(&method.name);

        let params: Vec<String> = method
            .parameters
            .iter()
            .map(|p| self.parameter(p, level))
            .collect();
        if pretty && !params.is_empty() {
            line.push_str(&format!("( {} )", params.join(", ")));
        } else {
            line.push_str(&format!("({})", params.join(", ")));
        }

        if let Some(ty) = &method.return_type {
            line.push_str(if pretty { " : " } else { ": " });
            line.push_str(ty);
        }

        if method.is_abstract || in_interface {
            line.push(';');
        } else {
            line.push_str(" {}");
        }

        self.declaration(line, method.doc_comment.as_deref())
    }

    fn parameter(&self, param: &Parameter, level: usize) -> String {
        let mut out = String::new();
        if let Some(ty) = &param.ty {
            out.push_str(ty);
            out.push(' ');
        }
        if param.by_reference {
            out.push('&');
        }
        if param.variadic {
            out.push_str("...");
        }
        out.push('$');
        out.push_str(&param.name);

        match &param.default {
            Some(DefaultValue::Literal(value)) => {
                out.push_str(self.assign());
                out.push_str(&self.literal(value, level));
            }
            Some(DefaultValue::Constant(name)) => {
                out.push_str(self.assign());
                out.push_str(name);
            }
            None => {}
        }
        out
    }
}

fn type_keyword(model: &ClassModel) -> String {
    match model.kind {
        TypeKind::Interface => "interface".to_string(),
        TypeKind::Trait => "trait".to_string(),
        TypeKind::Class => {
            let mut keyword = String::new();
            if model.is_abstract {
                keyword.push_str("abstract ");
            }
            if model.is_final {
                keyword.push_str("final ");
            }
            keyword.push_str("class");
            keyword
        }
    }
}

/// Visibility keyword followed by a space, or nothing when unmarked.
fn modifier(visibility: Visibility) -> String {
    visibility
        .keyword()
        .map(|k| format!("{} ", k))
        .unwrap_or_default()
}

fn group_title(visibility: Visibility, scope: MemberScope, what: &str) -> String {
    let mut title = String::new();
    if let Some(keyword) = visibility.keyword() {
        title.push_str(&keyword.to_uppercase());
        title.push(' ');
    }
    if scope.is_static() {
        title.push_str("STATIC ");
    }
    title.push_str(what);
    title
}
