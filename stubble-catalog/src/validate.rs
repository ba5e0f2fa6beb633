//! Validation context and rules for catalog files.

use std::{collections::HashSet, sync::Arc};

use stubble_ir::{NAMESPACE_SEPARATOR, TypeKind, Visibility};

use crate::{
    Result,
    error::SourceContext,
    file::{CatalogFile, MethodEntry, ParameterEntry, TypeEntry},
};

/// Validation context that carries source information.
///
/// Holds the shared source plus the path of the declaration being checked,
/// so nested errors read like `method in 'App\Repo'`.
///
/// ```ignore
/// let ctx = ParseContext::new(src, "catalog.toml");
/// ctx.validate_type_name("App\\Repo")?;
///
/// let nested = ctx.push("App\\Repo");
/// nested.validate_name("find", "method")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Describe `kind` at the current path, e.g. `method in 'App\Repo'`.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Validate a member or parameter name.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        match validate_identifier(name) {
            Some(reason) => Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
            )),
            None => Ok(()),
        }
    }

    /// Validate a possibly qualified type name.
    ///
    /// Every namespace segment must be an identifier and the simple name must
    /// not be a reserved word.
    pub fn validate_type_name(&self, name: &str) -> Result<()> {
        let trimmed = name.strip_prefix(NAMESPACE_SEPARATOR).unwrap_or(name);
        for segment in trimmed.split(NAMESPACE_SEPARATOR) {
            if let Some(reason) = validate_identifier(segment) {
                return Err(self.source.invalid_identifier_error(
                    name,
                    self.context_for("type"),
                    reason,
                ));
            }
        }

        let simple = trimmed.rsplit(NAMESPACE_SEPARATOR).next().unwrap_or(trimmed);
        if is_reserved_word(simple) {
            return Err(self
                .source
                .reserved_word_error(simple, self.context_for("type")));
        }
        Ok(())
    }

    pub fn error(&self, message: impl Into<String>, name: Option<&str>) -> Result<()> {
        Err(self.source.validation_error(message, name))
    }

    /// Reject a repeated name among `names`.
    fn check_unique<'n>(
        &self,
        names: impl IntoIterator<Item = &'n str>,
        kind: &str,
        ignore_case: bool,
    ) -> Result<()> {
        let mut seen = HashSet::new();
        for name in names {
            let key = if ignore_case {
                name.to_ascii_lowercase()
            } else {
                name.to_string()
            };
            if !seen.insert(key) {
                return Err(self.source.duplicate_error(name, self.context_for(kind)));
            }
        }
        Ok(())
    }
}

/// Words that cannot name a class, interface or trait.
///
/// Context-sensitive keywords such as `enum` and `readonly` are left out.
pub(crate) const PHP_RESERVED_WORDS: &[&str] = &[
    // Keywords
    "abstract", "and", "array", "as", "break", "callable", "case", "catch", "class", "clone",
    "const", "continue", "declare", "default", "do", "echo", "else", "elseif", "empty",
    "enddeclare", "endfor", "endforeach", "endif", "endswitch", "endwhile", "eval", "exit",
    "extends", "final", "finally", "fn", "for", "foreach", "function", "global", "goto", "if",
    "implements", "include", "include_once", "instanceof", "insteadof", "interface", "isset",
    "list", "match", "namespace", "new", "or", "print", "private", "protected", "public",
    "require", "require_once", "return", "static", "switch", "throw", "trait", "try",
    "unset", "use", "var", "while", "xor", "yield",
    // Reserved type names
    "bool", "false", "float", "int", "iterable", "mixed", "never", "null", "object", "parent",
    "self", "string", "true", "void",
];

/// Check if a name is reserved. PHP keywords are case-insensitive.
pub(crate) fn is_reserved_word(name: &str) -> bool {
    PHP_RESERVED_WORDS
        .iter()
        .any(|word| word.eq_ignore_ascii_case(name))
}

/// Validate a PHP identifier.
/// Returns None if valid, Some(reason) if invalid.
///
/// Bytes above ASCII are accepted as PHP does.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || !c.is_ascii() => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| c.is_ascii() && !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}

/// Validate a whole catalog.
pub(crate) fn validate_catalog(file: &CatalogFile, ctx: &ParseContext) -> Result<()> {
    ctx.check_unique(
        file.types
            .keys()
            .map(|k| k.trim_start_matches(NAMESPACE_SEPARATOR)),
        "type",
        true,
    )?;

    for (name, entry) in &file.types {
        ctx.validate_type_name(name)?;
        validate_type(entry, &ctx.push(name))?;
    }
    Ok(())
}

fn validate_type(entry: &TypeEntry, ctx: &ParseContext) -> Result<()> {
    if let Some(parent) = &entry.parent {
        ctx.validate_type_name(parent)?;
    }
    for interface in &entry.interfaces {
        ctx.validate_type_name(interface)?;
    }

    if entry.is_abstract && entry.is_final {
        return ctx.error(
            format!("{} cannot be both abstract and final", ctx.context_for("type")),
            None,
        );
    }

    if entry.kind == TypeKind::Interface {
        if entry.is_abstract || entry.is_final {
            return ctx.error("an interface cannot be marked abstract or final", None);
        }
        if let Some(property) = entry.properties.first() {
            return ctx.error(
                "an interface cannot declare properties",
                Some(&property.name),
            );
        }
    }

    for constant in &entry.constants {
        ctx.validate_name(&constant.name, "constant")?;
        if constant.name.eq_ignore_ascii_case("class") {
            return Err(ctx
                .source_context()
                .reserved_word_error(&constant.name, ctx.context_for("constant")));
        }
    }
    ctx.check_unique(entry.constants.iter().map(|c| c.name.as_str()), "constant", false)?;

    for property in &entry.properties {
        ctx.validate_name(property.name.trim_start_matches('$'), "property")?;
    }
    ctx.check_unique(
        entry
            .properties
            .iter()
            .map(|p| p.name.trim_start_matches('$')),
        "property",
        false,
    )?;

    for method in &entry.methods {
        validate_method(method, entry, ctx)?;
    }
    ctx.check_unique(entry.methods.iter().map(|m| m.name.as_str()), "method", true)
}

fn validate_method(method: &MethodEntry, owner: &TypeEntry, ctx: &ParseContext) -> Result<()> {
    ctx.validate_name(&method.name, "method")?;

    if method.is_abstract && method.is_final {
        return ctx.error(
            format!("method '{}' cannot be both abstract and final", method.name),
            Some(&method.name),
        );
    }

    match owner.kind {
        TypeKind::Interface if method.visibility != Visibility::Public => {
            return ctx.error(
                format!("interface method '{}' must be public", method.name),
                Some(&method.name),
            );
        }
        TypeKind::Class if method.is_abstract && !owner.is_abstract => {
            return ctx.error(
                format!(
                    "abstract method '{}' requires the class to be abstract",
                    method.name
                ),
                Some(&method.name),
            );
        }
        _ => {}
    }

    let ctx = ctx.push(&method.name);
    for (position, parameter) in method.parameters.iter().enumerate() {
        let is_last = position + 1 == method.parameters.len();
        validate_parameter(parameter, is_last, &ctx)?;
    }
    ctx.check_unique(
        method
            .parameters
            .iter()
            .map(|p| p.name.trim_start_matches('$')),
        "parameter",
        false,
    )
}

fn validate_parameter(parameter: &ParameterEntry, is_last: bool, ctx: &ParseContext) -> Result<()> {
    let name = parameter.name.trim_start_matches('$');
    ctx.validate_name(name, "parameter")?;
    if name == "this" {
        return Err(ctx
            .source_context()
            .reserved_word_error(name, ctx.context_for("parameter")));
    }

    if parameter.default.is_some() && parameter.default_constant.is_some() {
        return ctx.error(
            format!("parameter '{name}' sets both 'default' and 'default_constant'"),
            Some(name),
        );
    }

    if parameter.variadic {
        if parameter.default.is_some() || parameter.default_constant.is_some() {
            return ctx.error(
                format!("variadic parameter '{name}' cannot have a default"),
                Some(name),
            );
        }
        if !is_last {
            return ctx.error(
                format!("variadic parameter '{name}' must be the last parameter"),
                Some(name),
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("hello").is_none());
        assert!(validate_identifier("HelloWorld").is_none());
        assert!(validate_identifier("_private").is_none());
        assert!(validate_identifier("arg1").is_none());
        assert!(validate_identifier("größe").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("1st").is_some());
        assert!(validate_identifier("hello-world").is_some());
        assert!(validate_identifier("hello world").is_some());
        assert!(validate_identifier("$name").is_some());
    }

    #[test]
    fn test_is_reserved_word() {
        assert!(is_reserved_word("class"));
        assert!(is_reserved_word("Function"));
        assert!(is_reserved_word("STRING"));
        assert!(!is_reserved_word("Invoice"));
        assert!(!is_reserved_word("enum"));
        assert!(!is_reserved_word("Readonly"));
    }

    #[test]
    fn test_parse_context_context_for() {
        let ctx = ParseContext::new("", "catalog.toml");
        assert_eq!(ctx.context_for("type"), "type");

        let nested = ctx.push("App\\Repo");
        assert_eq!(nested.context_for("method"), "method in 'App\\Repo'");

        let deep = nested.push("find");
        assert_eq!(deep.context_for("parameter"), "parameter in 'App\\Repo.find'");
    }

    #[test]
    fn test_validate_type_name() {
        let ctx = ParseContext::new("", "catalog.toml");
        assert!(ctx.validate_type_name("App\\Billing\\Invoice").is_ok());
        assert!(ctx.validate_type_name("\\Countable").is_ok());
        assert!(ctx.validate_type_name("App\\\\Invoice").is_err());
        assert!(ctx.validate_type_name("App\\9Lives").is_err());
        assert!(ctx.validate_type_name("App\\Enum").is_ok());
        assert!(ctx.validate_type_name("Readonly").is_ok());

        let err = ctx.validate_type_name("App\\List").unwrap_err();
        assert!(err.to_string().contains("reserved word"));
    }

    #[test]
    fn test_check_unique_ignore_case() {
        let ctx = ParseContext::new("", "catalog.toml");
        assert!(ctx.check_unique(["run", "Run"], "method", false).is_ok());

        let err = ctx.check_unique(["run", "Run"], "method", true).unwrap_err();
        assert_eq!(err.to_string(), "'Run' is declared more than once as a method");
    }
}
