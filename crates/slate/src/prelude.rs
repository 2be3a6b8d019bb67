//! Convenience re-exports for the common case
//!
//! ```rust
//! use slate::prelude::*;
//!
//! let mut sheet = Sheet::new();
//! sheet.set_cell(Position::new(0, 0), "hello").unwrap();
//! ```

pub use crate::cell::Cell;
pub use crate::sheet::Sheet;
pub use slate_core::{CellError, CellValue, Error, Position, Result, Size};
