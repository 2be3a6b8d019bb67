//! # slate-core
//!
//! Core data types for the slate spreadsheet engine.
//!
//! This crate provides the fundamental types used throughout slate:
//! - [`Position`] and [`Size`] - Cell coordinates and grid geometry
//! - [`CellValue`] - The visible value of a cell (number, text, or error)
//! - [`CellError`] - Typed evaluation errors (`#REF!`, `#VALUE!`, `#ARITHM!`)
//! - [`Error`] - Edit-time errors raised by the sheet API
//!
//! ## Example
//!
//! ```rust
//! use slate_core::Position;
//!
//! let pos: Position = "B2".parse().unwrap();
//! assert_eq!(pos, Position::new(1, 1));
//! assert_eq!(pos.to_string(), "B2");
//! ```

pub mod error;
pub mod position;
pub mod value;

// Re-exports for convenience
pub use error::{Error, Result};
pub use position::{Position, Size};
pub use value::{CellError, CellValue};

/// Maximum number of rows in a sheet
pub const MAX_ROWS: u32 = 16_384;

/// Maximum number of columns in a sheet
pub const MAX_COLS: u32 = 16_384;

/// Leading character designating a formula cell
pub const FORMULA_SIGN: char = '=';

/// Leading character that escapes a literal text value
pub const ESCAPE_SIGN: char = '\'';
