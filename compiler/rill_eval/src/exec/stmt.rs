//! Statement execution.
//!
//! Every runner returns a `Flow`: either the statement completed, or an
//! exit-loop signal is unwinding toward its enclosing loop. Only a `Loop`
//! consumes the unwinding flow; `run` reports one that escapes the
//! outermost statement as a malformed tree.

use rill_ir::{ComparisonOp, Stmt};
use tracing::trace;

use crate::context::EvaluationContext;
use crate::errors::{loop_exit_outside_loop, step_budget_exceeded, EvalResult};
use crate::exec::expr::eval_expr;

/// Outcome of running one statement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Flow {
    /// The statement finished; execution continues with the next one.
    Completed,
    /// An `ExitLoop` is unwinding to the nearest enclosing loop.
    ExitLoop,
}

/// Per-run step accounting. `None` means unbounded.
struct StepBudget {
    limit: Option<u64>,
    spent: u64,
}

impl StepBudget {
    fn unbounded() -> Self {
        StepBudget {
            limit: None,
            spent: 0,
        }
    }

    fn bounded(limit: u64) -> Self {
        StepBudget {
            limit: Some(limit),
            spent: 0,
        }
    }

    /// Spend one step; fails once a bounded budget is exhausted.
    fn spend(&mut self) -> EvalResult<()> {
        self.spent += 1;
        match self.limit {
            Some(limit) if self.spent > limit => {
                trace!(limit, "step budget exhausted");
                Err(step_budget_exceeded(limit))
            }
            _ => Ok(()),
        }
    }
}

/// Run a statement tree to completion, mutating `ctx` in place.
///
/// Fails fast with `LoopExitOutsideLoop` if an `ExitLoop` unwinds past the
/// outermost statement. A loop whose body never raises the signal does not
/// return; callers that need a bound use [`run_with_budget`].
pub fn run(stmt: &Stmt, ctx: &mut EvaluationContext) -> EvalResult<()> {
    finish(exec_stmt(stmt, ctx, &mut StepBudget::unbounded())?)
}

/// Like [`run`], but each statement execution spends one step and the run
/// fails with `StepBudgetExceeded` once `limit` is spent.
///
/// This is the bounded harness for observing non-termination in tests
/// without waiting on it.
pub fn run_with_budget(stmt: &Stmt, ctx: &mut EvaluationContext, limit: u64) -> EvalResult<()> {
    finish(exec_stmt(stmt, ctx, &mut StepBudget::bounded(limit))?)
}

fn finish(flow: Flow) -> EvalResult<()> {
    match flow {
        Flow::Completed => Ok(()),
        Flow::ExitLoop => Err(loop_exit_outside_loop()),
    }
}

/// Exact IEEE comparison. NaN operands compare false under all three
/// operators, selecting the false branch.
#[expect(
    clippy::float_cmp,
    reason = "equality on values is exact by contract, no tolerance"
)]
fn compare(op: ComparisonOp, lhs: f64, rhs: f64) -> bool {
    match op {
        ComparisonOp::Eq => lhs == rhs,
        ComparisonOp::Lt => lhs < rhs,
        ComparisonOp::Gt => lhs > rhs,
    }
}

fn exec_stmt(stmt: &Stmt, ctx: &mut EvaluationContext, budget: &mut StepBudget) -> EvalResult<Flow> {
    budget.spend()?;
    match stmt {
        Stmt::Assign { target, value } => {
            let value = eval_expr(value, ctx)?;
            trace!(name = %target, value, "assign");
            ctx.set(target.clone(), value);
            Ok(Flow::Completed)
        }

        Stmt::Conditional {
            op,
            lhs,
            rhs,
            if_true,
            if_false,
        } => {
            let left = eval_expr(lhs, ctx)?;
            let right = eval_expr(rhs, ctx)?;
            if compare(*op, left, right) {
                exec_stmt(if_true, ctx, budget)
            } else {
                exec_stmt(if_false, ctx, budget)
            }
        }

        Stmt::Loop { body } => loop {
            match exec_stmt(body, ctx, budget)? {
                Flow::Completed => {}
                Flow::ExitLoop => {
                    trace!("loop exited");
                    return Ok(Flow::Completed);
                }
            }
        },

        Stmt::ExitLoop => Ok(Flow::ExitLoop),

        Stmt::Block(stmts) => {
            for stmt in stmts {
                match exec_stmt(stmt, ctx, budget)? {
                    Flow::Completed => {}
                    // Skip the rest of the block; the signal keeps
                    // unwinding toward the enclosing loop.
                    Flow::ExitLoop => return Ok(Flow::ExitLoop),
                }
            }
            Ok(Flow::Completed)
        }
    }
}
