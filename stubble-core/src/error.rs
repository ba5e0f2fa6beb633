use miette::Diagnostic;
use thiserror::Error;

/// Result type for extraction.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal extraction errors.
///
/// Everything else that can go wrong while reading a type (unreadable
/// defaults, ambiguous doc-comment unions) degrades to "no information" for
/// that member and is only logged.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("type '{name}' could not be resolved")]
    #[diagnostic(
        code(stubble::type_not_found),
        help("check the fully qualified name, including its namespace")
    )]
    TypeNotFound { name: String },
}

impl Error {
    pub fn type_not_found(name: impl Into<String>) -> Self {
        Error::TypeNotFound { name: name.into() }
    }
}
