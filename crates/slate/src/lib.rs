//! # slate
//!
//! An in-memory spreadsheet engine.
//!
//! Slate provides a sparse two-dimensional [`Sheet`] of cells holding plain
//! text or arithmetic formulas. Formulas reference other cells; the sheet
//! maintains the dependency graph between them, rejecting edits that would
//! close a reference cycle, memoizing computed values, and invalidating
//! them transitively when an upstream cell changes.
//!
//! ## Example
//!
//! ```rust
//! use slate::prelude::*;
//!
//! let mut sheet = Sheet::new();
//! let a1: Position = "A1".parse().unwrap();
//! let b1: Position = "B1".parse().unwrap();
//!
//! sheet.set_cell(a1, "2").unwrap();
//! sheet.set_cell(b1, "=A1*21").unwrap();
//!
//! assert_eq!(sheet.get_value(b1).unwrap(), CellValue::Number(42.0));
//!
//! // Editing A1 invalidates everything downstream of it.
//! sheet.set_cell(a1, "3").unwrap();
//! assert_eq!(sheet.get_value(b1).unwrap(), CellValue::Number(63.0));
//! ```

pub mod cell;
pub mod prelude;
pub mod sheet;

pub use cell::Cell;
pub use sheet::Sheet;

// Re-export core types
pub use slate_core::{
    CellError, CellValue, Error, Position, Result, Size, ESCAPE_SIGN, FORMULA_SIGN, MAX_COLS,
    MAX_ROWS,
};

// Re-export formula types
pub use slate_formula::{CellSource, Formula, ParseError};
