//! # slate-formula
//!
//! Formula parsing and evaluation for slate.
//!
//! This crate provides:
//! - Formula parsing (text → AST), including the raw reference list
//! - Canonical re-serialization with minimal parentheses
//! - Formula evaluation (AST → value) with typed error propagation
//!
//! ## Example
//!
//! ```rust
//! use slate_formula::Formula;
//!
//! let formula = Formula::parse("2*(1+3)").unwrap();
//! assert_eq!(formula.expression(), "2*(1+3)");
//! ```

pub mod ast;
pub mod error;
pub mod formula;
pub mod parser;

pub use ast::{BinaryOperator, CellLookup, Expr, UnaryOperator};
pub use error::{ParseError, ParseResult};
pub use formula::{CellSource, Formula};
pub use parser::parse_formula_ast;
