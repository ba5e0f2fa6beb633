//! Core classification types.

use serde::{Deserialize, Serialize};

/// What kind of type declaration is being described.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Class,
    Interface,
    Trait,
}

impl TypeKind {
    /// Get the declaration keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
            TypeKind::Trait => "trait",
        }
    }
}

/// Member visibility.
///
/// `Unmarked` is a member declared without any access modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
    #[serde(alias = "none")]
    Unmarked,
}

impl Visibility {
    /// Get the modifier keyword, or `None` for unmarked members.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Visibility::Public => Some("public"),
            Visibility::Protected => Some("protected"),
            Visibility::Private => Some("private"),
            Visibility::Unmarked => None,
        }
    }

    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        self.keyword().unwrap_or("none")
    }
}

/// Whether a member belongs to instances or to the type itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberScope {
    Instance,
    Static,
}

impl MemberScope {
    pub fn from_static(is_static: bool) -> Self {
        if is_static {
            MemberScope::Static
        } else {
            MemberScope::Instance
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self, MemberScope::Static)
    }
}

/// Visibility groups in output order.
pub const FIELD_GROUPS: [Visibility; 4] = [
    Visibility::Public,
    Visibility::Protected,
    Visibility::Private,
    Visibility::Unmarked,
];

/// Method buckets in output order: instance methods before static ones,
/// each split by visibility.
pub const METHOD_GROUPS: [(MemberScope, Visibility); 8] = [
    (MemberScope::Instance, Visibility::Public),
    (MemberScope::Instance, Visibility::Protected),
    (MemberScope::Instance, Visibility::Private),
    (MemberScope::Instance, Visibility::Unmarked),
    (MemberScope::Static, Visibility::Public),
    (MemberScope::Static, Visibility::Protected),
    (MemberScope::Static, Visibility::Private),
    (MemberScope::Static, Visibility::Unmarked),
];
