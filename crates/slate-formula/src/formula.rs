//! Parsed formula façade
//!
//! [`Formula`] wraps a parsed expression tree together with its canonical
//! re-serialization and the deduplicated list of cells it reads from, and
//! binds evaluation to a cell source.

use crate::ast::Expr;
use crate::error::ParseResult;
use crate::parser::parse_formula_ast;
use slate_core::{CellError, CellValue, Position};

/// Read-only view of cell values, implemented by the sheet
///
/// `None` means no cell is materialized at the position; formulas treat such
/// cells as `0.0`.
pub trait CellSource {
    /// The current value of the cell at `pos`, if one exists
    fn value(&self, pos: Position) -> Option<CellValue>;
}

/// A parsed cell formula
///
/// Holds the expression tree, the canonical minimally-parenthesized source
/// (a fixpoint: reparsing it prints identically), and the referenced cells
/// in ascending order without duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    ast: Expr,
    expression: String,
    referenced_cells: Vec<Position>,
}

impl Formula {
    /// Parse a formula body (leading `=` already stripped)
    ///
    /// # Example
    /// ```rust
    /// use slate_formula::Formula;
    ///
    /// let formula = Formula::parse("(1+2)*3").unwrap();
    /// assert_eq!(formula.expression(), "(1+2)*3");
    ///
    /// let formula = Formula::parse("(1+2*3)").unwrap();
    /// assert_eq!(formula.expression(), "1+2*3");
    /// ```
    pub fn parse(source: &str) -> ParseResult<Self> {
        let (ast, raw_references) = parse_formula_ast(source)?;
        let expression = ast.to_string();

        let mut referenced_cells = raw_references;
        referenced_cells.sort_unstable();
        referenced_cells.dedup();

        Ok(Self {
            ast,
            expression,
            referenced_cells,
        })
    }

    /// The canonical expression text
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Referenced cells, ascending and deduplicated
    pub fn referenced_cells(&self) -> &[Position] {
        &self.referenced_cells
    }

    /// Evaluate against the given cell source
    ///
    /// Referenced cells resolve as: missing cell → `0.0`; numeric value →
    /// the number; error value → that error; text → `0.0` when empty, the
    /// parsed number when the whole text is a finite numeric literal, and
    /// [`CellError::Value`] otherwise.
    pub fn evaluate(&self, source: &dyn CellSource) -> Result<f64, CellError> {
        self.ast.evaluate(&|pos| {
            if !pos.is_valid() {
                return Err(CellError::Ref);
            }
            match source.value(pos) {
                None => Ok(0.0),
                Some(CellValue::Number(n)) => Ok(n),
                Some(CellValue::Error(e)) => Err(e),
                Some(CellValue::Text(text)) => {
                    if text.is_empty() {
                        return Ok(0.0);
                    }
                    match text.parse::<f64>() {
                        Ok(n) if n.is_finite() => Ok(n),
                        _ => Err(CellError::Value),
                    }
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    /// Fixed set of cell values standing in for a sheet
    #[derive(Default)]
    struct StubSource {
        cells: HashMap<Position, CellValue>,
    }

    impl StubSource {
        fn with(mut self, a1: &str, value: CellValue) -> Self {
            self.cells.insert(Position::from_a1(a1).unwrap(), value);
            self
        }
    }

    impl CellSource for StubSource {
        fn value(&self, pos: Position) -> Option<CellValue> {
            self.cells.get(&pos).cloned()
        }
    }

    #[test]
    fn test_expression_is_canonical() {
        let formula = Formula::parse("(1+2)*3").unwrap();
        assert_eq!(formula.expression(), "(1+2)*3");

        let formula = Formula::parse("((1+2))*((3))").unwrap();
        assert_eq!(formula.expression(), "(1+2)*3");

        let formula = Formula::parse("1 + 2 * 3").unwrap();
        assert_eq!(formula.expression(), "1+2*3");
    }

    #[test]
    fn test_expression_round_trip_fixpoint() {
        for source in [
            "1+2*3",
            "(1+2)*3",
            "1-(2+3)",
            "1/(2/3)",
            "-(1+2)",
            "--1",
            "2--3",
            "A1+B2/(C3-1)",
        ] {
            let printed = Formula::parse(source).unwrap().expression().to_string();
            let reprinted = Formula::parse(&printed).unwrap().expression().to_string();
            assert_eq!(printed, reprinted);
        }
    }

    #[test]
    fn test_referenced_cells_sorted_and_deduplicated() {
        let formula = Formula::parse("B2+A1*B2+A1").unwrap();
        assert_eq!(
            formula.referenced_cells(),
            &[Position::new(0, 0), Position::new(1, 1)]
        );

        let formula = Formula::parse("1+2").unwrap();
        assert!(formula.referenced_cells().is_empty());
    }

    #[test]
    fn test_evaluate_without_references() {
        let formula = Formula::parse("1+2*3").unwrap();
        assert_eq!(formula.evaluate(&StubSource::default()), Ok(7.0));
    }

    #[test]
    fn test_evaluate_missing_cell_is_zero() {
        let formula = Formula::parse("A1+5").unwrap();
        assert_eq!(formula.evaluate(&StubSource::default()), Ok(5.0));
    }

    #[test]
    fn test_evaluate_numeric_and_text_cells() {
        let source = StubSource::default()
            .with("A1", CellValue::Number(2.0))
            .with("B1", CellValue::Text("40".to_string()))
            .with("C1", CellValue::Text(String::new()));

        let formula = Formula::parse("A1+B1+C1").unwrap();
        assert_eq!(formula.evaluate(&source), Ok(42.0));
    }

    #[test]
    fn test_evaluate_non_numeric_text() {
        let source = StubSource::default().with("A1", CellValue::Text("hello".to_string()));

        let formula = Formula::parse("A1+1").unwrap();
        assert_eq!(formula.evaluate(&source), Err(CellError::Value));

        // Text that parses to a non-finite double is not a numeric literal.
        let source = StubSource::default().with("A1", CellValue::Text("inf".to_string()));
        let formula = Formula::parse("A1").unwrap();
        assert_eq!(formula.evaluate(&source), Err(CellError::Value));
    }

    #[test]
    fn test_evaluate_propagates_cell_errors() {
        let source = StubSource::default().with("A1", CellValue::Error(CellError::Arithm));

        let formula = Formula::parse("A1*0").unwrap();
        assert_eq!(formula.evaluate(&source), Err(CellError::Arithm));
    }

    #[test]
    fn test_evaluate_division_by_referenced_zero() {
        let source = StubSource::default().with("A1", CellValue::Number(0.0));

        let formula = Formula::parse("1/A1").unwrap();
        assert_eq!(formula.evaluate(&source), Err(CellError::Arithm));
    }
}
