use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use thiserror::Error;

/// Result type for catalog operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Carries the catalog text and its filename so validation code can build
/// diagnostics without threading both through every call.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Toml {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a parse error from a JSON error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        // serde_json reports 1-based positions and line 0 when it has none
        let span = (source.line() > 0).then(|| {
            let offset = SourceOffset::from_location(&self.src, source.line(), source.column());
            SourceSpan::new(offset, 0)
        });
        Box::new(Error::Json {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, pointing at `name` when it can be found.
    pub fn validation_error(&self, message: impl Into<String>, name: Option<&str>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: name.and_then(|n| find_name_span(&self.src, n)),
            message: message.into(),
        })
    }

    /// Create a reserved word error.
    pub fn reserved_word_error(&self, name: &str, context: impl Into<String>) -> Box<Error> {
        Box::new(Error::ReservedWord {
            src: self.named_source(),
            span: find_name_span(&self.src, name),
            name: name.to_string(),
            context: context.into(),
        })
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier_error(
        &self,
        name: &str,
        context: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span: find_name_span(&self.src, name),
            name: name.to_string(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    /// Create a duplicate member error.
    pub fn duplicate_error(&self, name: &str, context: impl Into<String>) -> Box<Error> {
        Box::new(Error::Duplicate {
            src: self.named_source(),
            span: find_last_name_span(&self.src, name),
            name: name.to_string(),
            context: context.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(stubble::io),
        help("pass the path of an existing .toml or .json catalog")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog")]
    #[diagnostic(code(stubble::parse_error))]
    Toml {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse catalog")]
    #[diagnostic(code(stubble::parse_error))]
    Json {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(stubble::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is a reserved word and cannot name a {context}")]
    #[diagnostic(
        code(stubble::reserved_word),
        help("rename '{name}', e.g. to '{name}Type'")
    )]
    ReservedWord {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved word used here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(stubble::invalid_identifier),
        help("{reason}. Use only letters, numbers, and underscores, starting with a letter or underscore.")
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("'{name}' is declared more than once as a {context}")]
    #[diagnostic(code(stubble::duplicate))]
    Duplicate {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared again here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },
}

/// Find the span of a name in the catalog source.
///
/// Looks for the quoted form first (`"name"`), as used for table keys and
/// `name = "..."` entries, then for the bare text.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", name);
    if let Some(pos) = src.find(&quoted) {
        return Some(SourceSpan::from((pos + 1, name.len())));
    }
    src.find(name)
        .map(|pos| SourceSpan::from((pos, name.len())))
}

/// Like [`find_name_span`], but for the last occurrence.
pub(crate) fn find_last_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", name);
    if let Some(pos) = src.rfind(&quoted) {
        return Some(SourceSpan::from((pos + 1, name.len())));
    }
    src.rfind(name)
        .map(|pos| SourceSpan::from((pos, name.len())))
}
