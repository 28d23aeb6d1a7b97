//! Statement Types
//!
//! Statement nodes act on a mutable evaluation context and produce no
//! value. `ExitLoop` is the only statement that transfers control.

use std::fmt;

use super::expr::Expr;
use super::operators::ComparisonOp;

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum Stmt {
    /// Bind or rebind a variable to the value of an expression.
    ///
    /// The target is a plain name, never a sub-expression.
    Assign { target: String, value: Box<Expr> },

    /// Two-way branch on a numeric comparison.
    ///
    /// Both operands are evaluated exactly once, `lhs` first. Each branch
    /// is a single statement; the parser composes multi-statement branches
    /// as a `Block`.
    Conditional {
        op: ComparisonOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
        if_true: Box<Stmt>,
        if_false: Box<Stmt>,
    },

    /// Unconditional loop over `body`.
    ///
    /// Carries no condition of its own; the only normal exit is an
    /// `ExitLoop` raised somewhere inside `body`.
    Loop { body: Box<Stmt> },

    /// Unwind control to the nearest enclosing loop.
    ExitLoop,

    /// Statement sequence, run in order.
    ///
    /// An empty block is the canonical no-op statement.
    Block(Vec<Stmt>),
}

impl Stmt {
    /// Assignment statement `target = value`.
    pub fn assign(target: impl Into<String>, value: Expr) -> Self {
        Stmt::Assign {
            target: target.into(),
            value: Box::new(value),
        }
    }

    /// Conditional statement `if lhs op rhs then if_true else if_false`.
    pub fn conditional(
        op: ComparisonOp,
        lhs: Expr,
        rhs: Expr,
        if_true: Stmt,
        if_false: Stmt,
    ) -> Self {
        Stmt::Conditional {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            if_true: Box::new(if_true),
            if_false: Box::new(if_false),
        }
    }

    /// Loop statement repeating `body` until an `ExitLoop` fires inside it.
    pub fn repeat(body: Stmt) -> Self {
        Stmt::Loop {
            body: Box::new(body),
        }
    }

    /// Statement sequence.
    pub fn block(stmts: Vec<Stmt>) -> Self {
        Stmt::Block(stmts)
    }

    /// The no-op statement: an empty block.
    pub fn empty() -> Self {
        Stmt::Block(Vec::new())
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Assign { target, value } => write!(f, "Assign({target:?}, {value:?})"),
            Stmt::Conditional {
                op,
                lhs,
                rhs,
                if_true,
                if_false,
            } => {
                write!(
                    f,
                    "Conditional({op:?}, {lhs:?}, {rhs:?}, {if_true:?}, {if_false:?})"
                )
            }
            Stmt::Loop { body } => write!(f, "Loop({body:?})"),
            Stmt::ExitLoop => write!(f, "ExitLoop"),
            Stmt::Block(stmts) => write!(f, "Block({stmts:?})"),
        }
    }
}
