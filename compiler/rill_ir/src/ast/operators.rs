//! Arithmetic and Comparison Operators
//!
//! All operator tags used by expression and conditional nodes.

/// Arithmetic operators for binary expressions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used in debug output; the C backend reuses the four infix spellings.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }
}

/// Comparison operators for conditional statements.
///
/// Conditionals compare two numeric expressions directly; the language has
/// no boolean values and no compound boolean expressions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ComparisonOp {
    Eq,
    Lt,
    Gt,
}

impl ComparisonOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Lt => "<",
            Self::Gt => ">",
        }
    }
}
