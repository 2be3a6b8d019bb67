//! Cell value and evaluation error types

use std::fmt;

/// Typed errors produced while evaluating a formula
///
/// These are values, not control flow: a formula whose evaluation fails
/// yields an error as its result, and the surrounding sheet stays intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellError {
    /// `#REF!` - reference to a position outside the sheet
    Ref,
    /// `#VALUE!` - referenced cell holds text that is not a number
    Value,
    /// `#ARITHM!` - division by zero or a non-finite result
    Arithm,
}

impl CellError {
    /// Get the display string for this error
    pub fn as_str(&self) -> &'static str {
        match self {
            CellError::Ref => "#REF!",
            CellError::Value => "#VALUE!",
            CellError::Arithm => "#ARITHM!",
        }
    }
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The visible value of a cell
///
/// Empty cells surface as empty text. Formula cells surface the number or
/// error their evaluation produced.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Literal text (escape marker already stripped)
    Text(String),
    /// Numeric result
    Number(f64),
    /// Evaluation error
    Error(CellError),
}

impl CellValue {
    /// Check whether this is an error value
    pub fn is_error(&self) -> bool {
        matches!(self, CellValue::Error(_))
    }

    /// Get the numeric value, if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the text, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Text(String::new())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Error(e) => write!(f, "{}", e),
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<CellError> for CellValue {
    fn from(e: CellError) -> Self {
        CellValue::Error(e)
    }
}
