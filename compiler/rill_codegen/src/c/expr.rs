//! Expression code generation.

use rill_ir::{BinaryOp, Expr};

/// Render an expression as C source text.
///
/// Infix operands are always parenthesized so the printed shape mirrors
/// the tree shape; exponentiation becomes a `pow` call since C has no
/// power operator.
pub fn expr_to_c(expr: &Expr) -> String {
    match expr {
        Expr::Literal(bits) => double_literal(f64::from_bits(*bits)),
        Expr::Variable(name) => name.clone(),
        Expr::Binary { op, lhs, rhs } => {
            let left = expr_to_c(lhs);
            let right = expr_to_c(rhs);
            match op {
                BinaryOp::Pow => format!("pow({left}, {right})"),
                // The four infix operators spell the same in C.
                BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
                    format!("({left} {} {right})", op.as_symbol())
                }
            }
        }
    }
}

/// Render an `f64` as a C double literal.
///
/// Integral values keep one fractional digit so the literal stays a
/// double; degenerate values map to the math.h macros.
#[allow(
    clippy::float_cmp,
    reason = "integral check is exact, fract() of an integral value is 0.0"
)]
fn double_literal(value: f64) -> String {
    if value.is_nan() {
        "NAN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "INFINITY".to_string()
        } else {
            "-INFINITY".to_string()
        }
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
