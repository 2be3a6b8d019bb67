//! Sheet type: cell storage, edit API, dependency graph maintenance

use ahash::{AHashMap, AHashSet};
use slate_core::{CellValue, Error, Position, Result, Size, FORMULA_SIGN};
use slate_formula::{CellSource, Formula};
use std::fmt;

use crate::cell::{Cell, CellContent};

/// A sparse two-dimensional sheet of cells
///
/// The sheet owns every cell and is the only place cells are created or
/// destroyed. Edits keep the dependency graph consistent: setting a formula
/// is rejected if it would close a reference cycle, and every edit drops the
/// memoized values of all cells downstream of the change.
#[derive(Debug, Default)]
pub struct Sheet {
    cells: AHashMap<Position, Cell>,
}

impl Sheet {
    /// Create an empty sheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content of a cell from its text form
    ///
    /// Empty text resets the cell to empty; a leading `=` followed by more
    /// text parses the remainder as a formula; anything else is literal
    /// text. Setting a cell to its current text is a no-op that preserves
    /// all caches.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if `pos` is outside the sheet,
    /// [`Error::Parsing`] if a formula fails to parse, and
    /// [`Error::CircularDependency`] if the new references would close a
    /// cycle. On error the sheet is left exactly as it was.
    ///
    /// # Example
    /// ```
    /// use slate::prelude::*;
    ///
    /// let mut sheet = Sheet::new();
    /// sheet.set_cell("A1".parse().unwrap(), "=1+2*3").unwrap();
    /// assert_eq!(
    ///     sheet.get_value("A1".parse().unwrap()).unwrap(),
    ///     CellValue::Number(7.0)
    /// );
    /// ```
    pub fn set_cell(&mut self, pos: Position, text: &str) -> Result<()> {
        check_position(pos)?;

        // Redundant edits must not touch the graph or any cache.
        match self.cells.get(&pos) {
            Some(cell) => {
                if cell.text() == text {
                    return Ok(());
                }
            }
            None => {
                if text.is_empty() {
                    return Ok(());
                }
            }
        }

        let candidate = if text.is_empty() {
            CellContent::Empty
        } else if let Some(body) = text.strip_prefix(FORMULA_SIGN) {
            if body.is_empty() {
                // A bare "=" is literal text.
                CellContent::Text(text.to_string())
            } else {
                CellContent::Formula(Formula::parse(body)?)
            }
        } else {
            CellContent::Text(text.to_string())
        };

        let references: Vec<Position> = match &candidate {
            CellContent::Formula(formula) => formula.referenced_cells().to_vec(),
            _ => Vec::new(),
        };

        if self.would_cycle(pos, &references) {
            return Err(Error::CircularDependency);
        }

        // Referenced cells materialize as empty shells to host back edges.
        for &target in &references {
            self.get_or_create_cell(target);
        }

        let old_references = match self.cells.get(&pos) {
            Some(cell) => cell.referenced.clone(),
            None => Vec::new(),
        };
        for target in old_references {
            if let Some(cell) = self.cells.get_mut(&target) {
                cell.dependents.remove(&pos);
            }
        }
        for &target in &references {
            if let Some(cell) = self.cells.get_mut(&target) {
                cell.dependents.insert(pos);
            }
        }

        self.invalidate_from(pos);

        let cell = self.get_or_create_cell(pos);
        cell.referenced = references;
        cell.content = candidate;
        Ok(())
    }

    /// Reset a cell to empty
    ///
    /// The cell is physically removed unless other formulas still reference
    /// it, in which case it stays as an empty shell hosting their back
    /// edges. Clearing an absent cell is a no-op.
    pub fn clear_cell(&mut self, pos: Position) -> Result<()> {
        check_position(pos)?;

        let references = match self.cells.get(&pos) {
            Some(cell) => cell.referenced.clone(),
            None => return Ok(()),
        };
        for target in references {
            if let Some(cell) = self.cells.get_mut(&target) {
                cell.dependents.remove(&pos);
            }
        }

        self.invalidate_from(pos);

        let now_unused = match self.cells.get_mut(&pos) {
            Some(cell) => {
                cell.content = CellContent::Empty;
                cell.referenced.clear();
                cell.dependents.is_empty()
            }
            None => false,
        };
        if now_unused {
            self.cells.remove(&pos);
        }
        Ok(())
    }

    /// Return the cell at `pos`, inserting a fresh empty one if needed
    ///
    /// The only place cells come into existence.
    fn get_or_create_cell(&mut self, pos: Position) -> &mut Cell {
        self.cells.entry(pos).or_insert_with(Cell::empty)
    }

    /// Get a read handle to the cell at `pos`, if one exists
    pub fn cell(&self, pos: Position) -> Result<Option<&Cell>> {
        check_position(pos)?;
        Ok(self.cells.get(&pos))
    }

    /// The value of the cell at `pos`; absent cells are empty text
    pub fn get_value(&self, pos: Position) -> Result<CellValue> {
        check_position(pos)?;
        Ok(self
            .cells
            .get(&pos)
            .map(|cell| cell.value(self))
            .unwrap_or_default())
    }

    /// The text of the cell at `pos`; absent cells are empty
    pub fn get_text(&self, pos: Position) -> Result<String> {
        check_position(pos)?;
        Ok(self
            .cells
            .get(&pos)
            .map(|cell| cell.text())
            .unwrap_or_default())
    }

    /// The tightest origin-anchored rectangle covering every cell with
    /// non-empty text; zero when the sheet prints nothing
    pub fn printable_size(&self) -> Size {
        let mut size = Size::default();
        for (pos, cell) in &self.cells {
            if cell.is_empty() {
                continue;
            }
            size.rows = size.rows.max(pos.row + 1);
            size.cols = size.cols.max(pos.col + 1);
        }
        size
    }

    /// Render every cell's value over the printable area
    ///
    /// Fields are tab-separated, rows newline-terminated; empty cells render
    /// as empty fields. Errors render as their fixed display strings.
    pub fn print_values<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        self.print_with(out, |cell| cell.value(self).to_string())
    }

    /// Render every cell's text over the printable area
    pub fn print_texts<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        self.print_with(out, |cell| cell.text())
    }

    fn print_with<W, F>(&self, out: &mut W, render: F) -> fmt::Result
    where
        W: fmt::Write,
        F: Fn(&Cell) -> String,
    {
        let size = self.printable_size();
        for row in 0..size.rows {
            for col in 0..size.cols {
                if col > 0 {
                    out.write_char('\t')?;
                }
                if let Some(cell) = self.cells.get(&Position::new(row, col)) {
                    out.write_str(&render(cell))?;
                }
            }
            out.write_char('\n')?;
        }
        Ok(())
    }

    /// Check whether wiring `candidates` as the forward edges of `target`
    /// would close a cycle
    ///
    /// Walks the current forward edges starting from the candidate
    /// referents; referents that are not materialized yet have no outgoing
    /// edges. `target`'s own current edges are irrelevant: any walk that
    /// reaches `target` already proves the cycle.
    fn would_cycle(&self, target: Position, candidates: &[Position]) -> bool {
        let mut visited: AHashSet<Position> = AHashSet::new();
        let mut stack: Vec<Position> = candidates.to_vec();

        while let Some(pos) = stack.pop() {
            if pos == target {
                return true;
            }
            if !visited.insert(pos) {
                continue;
            }
            if let Some(cell) = self.cells.get(&pos) {
                stack.extend_from_slice(&cell.referenced);
            }
        }
        false
    }

    /// Drop the memoized values of `start` and everything downstream of it
    ///
    /// Follows back edges; the visited set guards against diamonds in the
    /// dependency graph.
    fn invalidate_from(&self, start: Position) {
        let mut visited: AHashSet<Position> = AHashSet::new();
        let mut stack = vec![start];

        while let Some(pos) = stack.pop() {
            if !visited.insert(pos) {
                continue;
            }
            if let Some(cell) = self.cells.get(&pos) {
                cell.invalidate();
                stack.extend(cell.dependents.iter().copied());
            }
        }
    }
}

impl CellSource for Sheet {
    fn value(&self, pos: Position) -> Option<CellValue> {
        self.cells.get(&pos).map(|cell| cell.value(self))
    }
}

fn check_position(pos: Position) -> Result<()> {
    if pos.is_valid() {
        Ok(())
    } else {
        Err(Error::InvalidPosition(pos.to_string()))
    }
}
