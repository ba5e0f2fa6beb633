//! Indentation unit for generated code.

use std::borrow::Cow;

/// The string written once per indentation level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indent(Cow<'static, str>);

impl Indent {
    /// Four spaces, the default unit.
    pub const SPACES: Self = Self(Cow::Borrowed("    "));

    /// A single tab character.
    pub const TAB: Self = Self(Cow::Borrowed("\t"));

    /// Use a custom unit.
    pub fn new(unit: impl Into<Cow<'static, str>>) -> Self {
        Self(unit.into())
    }

    /// Resolve an optional override, ignoring empty strings.
    pub fn or_default(unit: Option<&str>) -> Self {
        match unit {
            Some(unit) if !unit.is_empty() => Self::new(unit.to_string()),
            _ => Self::default(),
        }
    }

    /// The string for one indent level.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The string for `level` indent levels.
    pub fn repeat(&self, level: usize) -> String {
        self.0.repeat(level)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::SPACES
    }
}
