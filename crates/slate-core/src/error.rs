//! Edit-time error types
//!
//! These errors are raised by the sheet's editing API and never mutate the
//! sheet. They are distinct from [`crate::CellError`], which is a value a
//! formula evaluates to.

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by sheet edits
#[derive(Debug, Error)]
pub enum Error {
    /// An API received a position outside the sheet bounds
    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    /// Malformed formula source
    #[error("Formula parse error: {0}")]
    Parsing(String),

    /// The edit would close a reference cycle
    #[error("Circular dependency detected")]
    CircularDependency,
}
