//! Formula parse error types

use thiserror::Error;

/// Result type for formula parsing
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while parsing a formula
#[derive(Debug, Error)]
pub enum ParseError {
    /// Lexical or syntactic failure
    #[error("Syntax error: {0}")]
    Syntax(String),

    /// A cell token that does not name a position inside the sheet
    #[error("Invalid cell reference '{0}'")]
    InvalidReference(String),

    /// A numeric literal that does not fit a finite double
    #[error("Number out of range: '{0}'")]
    NumberOutOfRange(String),
}

impl From<ParseError> for slate_core::Error {
    fn from(err: ParseError) -> Self {
        slate_core::Error::Parsing(err.to_string())
    }
}
