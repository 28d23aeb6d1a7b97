//! Expression Types
//!
//! Expression nodes evaluate to a number and never mutate state.
//!
//! Children are boxed and owned exclusively by their parent, so the derived
//! equality and hashing are structural over the whole subtree. Float
//! literals are stored as `u64` bits for Hash compatibility.

use std::fmt;

use super::operators::BinaryOp;

/// Expression node: computes an `f64` against an evaluation context.
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum Expr {
    /// Numeric literal (value stored as bits for Hash).
    Literal(u64),

    /// Variable reference by name.
    Variable(String),

    /// Two operands joined by an arithmetic operator.
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// Literal expression holding a fixed value.
    pub fn literal(value: f64) -> Self {
        Expr::Literal(value.to_bits())
    }

    /// Reference to a named variable.
    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    /// Binary expression `lhs op rhs`.
    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(bits) => write!(f, "Literal({})", f64::from_bits(*bits)),
            Expr::Variable(name) => write!(f, "Variable({name:?})"),
            Expr::Binary { op, lhs, rhs } => write!(f, "Binary({op:?}, {lhs:?}, {rhs:?})"),
        }
    }
}
