//! Formula expression tree
//!
//! A strict tree of arithmetic expressions. Evaluation is a bottom-up fold
//! where the first [`CellError`] aborts the fold and becomes the result.
//! Display emits the canonical form with minimal parentheses.

use slate_core::{CellError, Position};
use std::fmt;

/// Cell lookup used during evaluation
///
/// Maps a position to its numeric value or the error it evaluates to.
pub type CellLookup<'a> = dyn Fn(Position) -> Result<f64, CellError> + 'a;

/// Formula expression AST
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal
    Number(f64),
    /// Unary sign
    UnaryOp {
        op: UnaryOperator,
        operand: Box<Expr>,
    },
    /// Binary arithmetic operation
    BinaryOp {
        op: BinaryOperator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Cell reference, keeping the source text for re-serialization
    CellRef { pos: Position, text: String },
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Plus,
    Minus,
}

impl UnaryOperator {
    /// The operator's source character
    pub fn symbol(self) -> char {
        match self {
            UnaryOperator::Plus => '+',
            UnaryOperator::Minus => '-',
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    /// The operator's source character
    pub fn symbol(self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
        }
    }
}

/// Precedence classes, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Precedence {
    Add,
    Sub,
    Mul,
    Div,
    Unary,
    Atom,
}

const PR_NONE: u8 = 0b00;
const PR_LEFT: u8 = 0b01;
const PR_RIGHT: u8 = 0b10;
const PR_BOTH: u8 = PR_LEFT | PR_RIGHT;

/// Parenthesization rules, indexed `[parent][child]`
///
/// The entry says in which operand positions a child of the given class
/// must be wrapped to reparse into the same shape. Anything not listed here
/// (atoms, operands of higher-precedence parents) never needs parentheses.
const PRECEDENCE_RULES: [[u8; 6]; 6] = [
    // child:  ADD     SUB       MUL       DIV       UNARY    ATOM
    [PR_NONE, PR_NONE, PR_NONE, PR_NONE, PR_NONE, PR_NONE], // ADD
    [PR_RIGHT, PR_RIGHT, PR_NONE, PR_NONE, PR_NONE, PR_NONE], // SUB
    [PR_BOTH, PR_BOTH, PR_NONE, PR_NONE, PR_NONE, PR_NONE], // MUL
    [PR_BOTH, PR_BOTH, PR_RIGHT, PR_RIGHT, PR_NONE, PR_NONE], // DIV
    [PR_BOTH, PR_BOTH, PR_NONE, PR_NONE, PR_NONE, PR_NONE], // UNARY
    [PR_NONE, PR_NONE, PR_NONE, PR_NONE, PR_NONE, PR_NONE], // ATOM
];

impl Expr {
    /// Evaluate the expression against a cell lookup
    ///
    /// Operands evaluate left to right; the first error wins. Division by
    /// exact zero and any non-finite intermediate or final result fail with
    /// [`CellError::Arithm`]. A reference to a position outside the sheet
    /// fails with [`CellError::Ref`] without consulting the lookup.
    pub fn evaluate(&self, lookup: &CellLookup) -> Result<f64, CellError> {
        match self {
            Expr::Number(value) => Ok(*value),

            Expr::CellRef { pos, .. } => {
                if !pos.is_valid() {
                    return Err(CellError::Ref);
                }
                lookup(*pos)
            }

            Expr::UnaryOp { op, operand } => {
                let value = operand.evaluate(lookup)?;
                let result = match op {
                    UnaryOperator::Plus => value,
                    UnaryOperator::Minus => -value,
                };
                if !result.is_finite() {
                    return Err(CellError::Arithm);
                }
                Ok(result)
            }

            Expr::BinaryOp { op, left, right } => {
                let lhs = left.evaluate(lookup)?;
                let rhs = right.evaluate(lookup)?;
                let result = match op {
                    BinaryOperator::Add => lhs + rhs,
                    BinaryOperator::Subtract => lhs - rhs,
                    BinaryOperator::Multiply => lhs * rhs,
                    BinaryOperator::Divide => {
                        if rhs == 0.0 {
                            return Err(CellError::Arithm);
                        }
                        lhs / rhs
                    }
                };
                if !result.is_finite() {
                    return Err(CellError::Arithm);
                }
                Ok(result)
            }
        }
    }

    fn precedence(&self) -> Precedence {
        match self {
            Expr::Number(_) | Expr::CellRef { .. } => Precedence::Atom,
            Expr::UnaryOp { .. } => Precedence::Unary,
            Expr::BinaryOp { op, .. } => match op {
                BinaryOperator::Add => Precedence::Add,
                BinaryOperator::Subtract => Precedence::Sub,
                BinaryOperator::Multiply => Precedence::Mul,
                BinaryOperator::Divide => Precedence::Div,
            },
        }
    }

    fn write_canonical(
        &self,
        out: &mut fmt::Formatter<'_>,
        parent: Precedence,
        right_child: bool,
    ) -> fmt::Result {
        let precedence = self.precedence();
        let mask = if right_child { PR_RIGHT } else { PR_LEFT };
        let parens_needed =
            PRECEDENCE_RULES[parent as usize][precedence as usize] & mask != 0;

        if parens_needed {
            out.write_str("(")?;
        }

        match self {
            Expr::Number(value) => write!(out, "{}", value)?,
            Expr::CellRef { text, .. } => out.write_str(text)?,
            Expr::UnaryOp { op, operand } => {
                write!(out, "{}", op.symbol())?;
                operand.write_canonical(out, precedence, false)?;
            }
            Expr::BinaryOp { op, left, right } => {
                left.write_canonical(out, precedence, false)?;
                write!(out, "{}", op.symbol())?;
                right.write_canonical(out, precedence, true)?;
            }
        }

        if parens_needed {
            out.write_str(")")?;
        }

        Ok(())
    }

    /// Render the prefix form `(op operands…)`, for diagnostics only
    pub fn prefix_form(&self) -> String {
        let mut out = String::new();
        self.write_prefix(&mut out);
        out
    }

    fn write_prefix(&self, out: &mut String) {
        match self {
            Expr::Number(value) => out.push_str(&value.to_string()),
            Expr::CellRef { text, .. } => out.push_str(text),
            Expr::UnaryOp { op, operand } => {
                out.push('(');
                out.push(op.symbol());
                out.push(' ');
                operand.write_prefix(out);
                out.push(')');
            }
            Expr::BinaryOp { op, left, right } => {
                out.push('(');
                out.push(op.symbol());
                out.push(' ');
                left.write_prefix(out);
                out.push(' ');
                right.write_prefix(out);
                out.push(')');
            }
        }
    }
}

/// Canonical, minimally-parenthesized rendering
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_canonical(f, Precedence::Atom, false)
    }
}
