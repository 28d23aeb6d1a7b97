//! Expression evaluation.
//!
//! Pure: reads the context, never writes it. Arithmetic is plain IEEE 754
//! `f64` — division by zero and invalid powers produce infinities or NaN
//! and propagate silently, never errors.

use rill_ir::{BinaryOp, Expr};

use crate::context::EvaluationContext;
use crate::errors::{undefined_variable, EvalResult};

/// Evaluate an expression against a context.
///
/// Operands evaluate left to right for every operator; the order is part
/// of the contract even though expressions have no side effects.
pub fn eval_expr(expr: &Expr, ctx: &EvaluationContext) -> EvalResult<f64> {
    match expr {
        Expr::Literal(bits) => Ok(f64::from_bits(*bits)),
        Expr::Variable(name) => ctx
            .get(name)
            .ok_or_else(|| undefined_variable(name.clone())),
        Expr::Binary { op, lhs, rhs } => {
            let left = eval_expr(lhs, ctx)?;
            let right = eval_expr(rhs, ctx)?;
            Ok(apply(*op, left, right))
        }
    }
}

/// Combine two operands. No domain validation beyond IEEE 754 behavior.
fn apply(op: BinaryOp, lhs: f64, rhs: f64) -> f64 {
    match op {
        BinaryOp::Add => lhs + rhs,
        BinaryOp::Sub => lhs - rhs,
        BinaryOp::Mul => lhs * rhs,
        BinaryOp::Div => lhs / rhs,
        BinaryOp::Pow => lhs.powf(rhs),
    }
}
