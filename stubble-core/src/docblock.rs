//! Doc-comment type annotations.
//!
//! Fallback source of type information for members without a native
//! declaration. Handles `@param`, `@return` and `@var` tags, including
//! `Type|null` unions. Anything wider than "one type, optionally or-null" is
//! treated as ambiguous and dropped rather than narrowed.

use std::sync::LazyLock;

use regex::Regex;

static RETURN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@return\s+(\S+)").expect("valid @return pattern"));

static VAR_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@var\s+(\S+)").expect("valid @var pattern"));

/// `@param Type $name`
static PARAM_TYPE_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@param\s+([^\s$&.]\S*)\s+&?(?:\.\.\.)?\$(\w+)").expect("valid @param pattern")
});

/// `@param $name Type`
static PARAM_NAME_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@param\s+&?(?:\.\.\.)?\$(\w+)\s+([^\s$*]\S*)").expect("valid @param pattern")
});

/// A type name usable in a declaration: `int`, `?Foo`, `\\App\\Bar`.
static TYPE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\??\\?[A-Za-z_][A-Za-z0-9_]*(?:\\[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("valid type name pattern")
});

/// Type names that never take a `?` prefix.
const NEVER_NULLABLE: [&str; 3] = ["mixed", "null", "void"];

/// Result of resolving a doc-comment type annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocType {
    /// No matching annotation, or a `void` type.
    Missing,
    /// A single type, nullable when written as `Type|null`.
    Resolved { ty: String, nullable: bool },
    /// A union the resolver refuses to narrow.
    Ambiguous(Vec<String>),
}

impl DocType {
    /// The resolved type name, without nullability marker.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            DocType::Resolved { ty, .. } => Some(ty),
            _ => None,
        }
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, DocType::Resolved { nullable: true, .. })
    }

    /// Render as a type declaration (`?Type` or `Type`).
    pub fn render(&self) -> Option<String> {
        match self {
            DocType::Resolved { ty, nullable } => Some(with_nullable_marker(ty, *nullable)),
            DocType::Missing | DocType::Ambiguous(_) => None,
        }
    }
}

/// Prefix `?` to a type name when nullable, except for pseudo-types and
/// unions where the marker is meaningless or invalid.
pub fn with_nullable_marker(ty: &str, nullable: bool) -> String {
    let never = NEVER_NULLABLE.iter().any(|n| n.eq_ignore_ascii_case(ty));
    if nullable && !never && !ty.starts_with('?') && !ty.contains('|') {
        format!("?{}", ty)
    } else {
        ty.to_string()
    }
}

/// Trim a union member and lower-case the `null` keyword.
pub fn normalize_union_member(member: &str) -> String {
    let trimmed = member.trim();
    if trimmed.eq_ignore_ascii_case("null") {
        "null".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Resolve a raw type token such as `string`, `int|null` or `A|B|C`.
///
/// Members that are not plain type names (`int[]`, `array<K, V>`, `$this`)
/// cannot appear in a declaration, so the whole annotation is dropped.
pub fn resolve_union(token: &str) -> DocType {
    let members: Vec<String> = token.split('|').map(normalize_union_member).collect();

    if let Some(bad) = members.iter().find(|m| !TYPE_NAME.is_match(m)) {
        tracing::debug!(token, member = %bad, "doc-comment type is not a declarable type");
        return DocType::Missing;
    }

    let resolved = match members.as_slice() {
        [single] => DocType::Resolved {
            ty: single.clone(),
            nullable: false,
        },
        [a, b] if a == "null" => DocType::Resolved {
            ty: b.clone(),
            nullable: true,
        },
        [a, b] if b == "null" => DocType::Resolved {
            ty: a.clone(),
            nullable: true,
        },
        _ => {
            tracing::debug!(token, "ambiguous doc-comment union type dropped");
            return DocType::Ambiguous(members);
        }
    };

    match resolved.type_name() {
        Some(ty) if ty.is_empty() || ty.eq_ignore_ascii_case("void") => DocType::Missing,
        _ => resolved,
    }
}

/// Type declared by the `@return` tag.
pub fn return_type(doc: &str) -> DocType {
    first_token(&RETURN_TAG, doc).map_or(DocType::Missing, resolve_union)
}

/// Type declared by the `@var` tag.
pub fn var_type(doc: &str) -> DocType {
    first_token(&VAR_TAG, doc).map_or(DocType::Missing, resolve_union)
}

/// Type declared for parameter `name` by a `@param` tag.
///
/// Accepts both `@param Type $name` and `@param $name Type`. The name may be
/// given with or without the leading `$`.
pub fn param_type(doc: &str, name: &str) -> DocType {
    let name = name.trim_start_matches('$');

    let type_first = PARAM_TYPE_FIRST
        .captures_iter(doc)
        .find(|caps| &caps[2] == name)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()).to_string());

    let token = type_first.or_else(|| {
        PARAM_NAME_FIRST
            .captures_iter(doc)
            .find(|caps| &caps[1] == name)
            .map(|caps| caps.get(2).map_or("", |m| m.as_str()).to_string())
    });

    token.map_or(DocType::Missing, |t| resolve_union(clean_token(&t)))
}

fn first_token<'a>(tag: &Regex, doc: &'a str) -> Option<&'a str> {
    tag.captures(doc)
        .and_then(|caps| caps.get(1))
        .map(|m| clean_token(m.as_str()))
}

/// Strip a comment terminator glued to the token (`@var int*/`).
fn clean_token(token: &str) -> &str {
    token.trim_end_matches("*/")
}
