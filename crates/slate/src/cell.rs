//! Cell type: content, memoized value, dependency edges

use ahash::AHashSet;
use slate_core::{CellValue, Position, ESCAPE_SIGN, FORMULA_SIGN};
use slate_formula::Formula;
use std::cell::RefCell;

use crate::sheet::Sheet;

/// The stored content of a cell
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CellContent {
    Empty,
    Text(String),
    Formula(Formula),
}

/// A single cell of a sheet
///
/// Cells are created and destroyed by the [`Sheet`] only. Besides its
/// content, a cell carries its memoized value and both directions of the
/// dependency graph: `referenced` are the cells its formula reads from,
/// `dependents` the cells whose formulas read from it. Back edges keep a
/// cell alive after it is cleared, so that live formulas referring to an
/// empty position stay wired up.
#[derive(Debug)]
pub struct Cell {
    pub(crate) content: CellContent,
    /// Memoized result of the most recent evaluation
    cache: RefCell<Option<CellValue>>,
    /// Forward edges, ascending and deduplicated; empty for non-formulas
    pub(crate) referenced: Vec<Position>,
    /// Back edges
    pub(crate) dependents: AHashSet<Position>,
}

impl Cell {
    pub(crate) fn empty() -> Self {
        Self {
            content: CellContent::Empty,
            cache: RefCell::new(None),
            referenced: Vec::new(),
            dependents: AHashSet::new(),
        }
    }

    /// The cell's text as entered, with formulas in canonical form
    ///
    /// Empty cells yield `""`, text cells their verbatim text (escape marker
    /// included), formula cells `=` followed by the canonical expression.
    pub fn text(&self) -> String {
        match &self.content {
            CellContent::Empty => String::new(),
            CellContent::Text(text) => text.clone(),
            CellContent::Formula(formula) => {
                format!("{}{}", FORMULA_SIGN, formula.expression())
            }
        }
    }

    /// The cell's value, computed on demand and memoized
    ///
    /// Text cells strip a leading escape marker; formula cells evaluate
    /// against the sheet, which may recurse into other cells' values. The
    /// absence of cycles bounds that recursion.
    pub fn value(&self, sheet: &Sheet) -> CellValue {
        {
            let cached = self.cache.borrow();
            if let Some(value) = cached.as_ref() {
                return value.clone();
            }
        }

        let value = match &self.content {
            CellContent::Empty => CellValue::default(),
            CellContent::Text(text) => {
                let visible = text.strip_prefix(ESCAPE_SIGN).unwrap_or(text);
                CellValue::Text(visible.to_string())
            }
            CellContent::Formula(formula) => match formula.evaluate(sheet) {
                Ok(number) => CellValue::Number(number),
                Err(error) => CellValue::Error(error),
            },
        };

        *self.cache.borrow_mut() = Some(value.clone());
        value
    }

    /// Positions this cell's formula reads from, ascending and deduplicated
    pub fn referenced_cells(&self) -> &[Position] {
        &self.referenced
    }

    /// Whether the cell holds no content
    ///
    /// An empty cell with dependents is the shell the sheet keeps alive to
    /// host their back edges.
    pub fn is_empty(&self) -> bool {
        matches!(self.content, CellContent::Empty)
    }

    /// Whether any formula reads from this cell
    pub fn has_dependents(&self) -> bool {
        !self.dependents.is_empty()
    }

    pub(crate) fn invalidate(&self) {
        self.cache.borrow_mut().take();
    }

    #[cfg(test)]
    pub(crate) fn is_cached(&self) -> bool {
        self.cache.borrow().is_some()
    }
}
