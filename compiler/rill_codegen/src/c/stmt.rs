//! Statement code generation.

use rill_ir::Stmt;

use super::expr::expr_to_c;
use crate::context::CodegenContext;
use crate::emitter::{Emitter, StringEmitter};

/// Compile a statement tree into C source appended to `emitter`.
pub fn compile(stmt: &Stmt, emitter: &mut dyn Emitter) {
    let mut ctx = CodegenContext::new(emitter);
    emit_stmt(&mut ctx, stmt);
}

/// Compile a statement tree and return the C source as a string.
pub fn compile_to_string(stmt: &Stmt) -> String {
    let mut emitter = StringEmitter::new();
    compile(stmt, &mut emitter);
    emitter.output()
}

fn emit_stmt(ctx: &mut CodegenContext<'_>, stmt: &Stmt) {
    match stmt {
        Stmt::Assign { target, value } => {
            ctx.line(&format!("{target} = {};", expr_to_c(value)));
        }

        Stmt::Conditional {
            op,
            lhs,
            rhs,
            if_true,
            if_false,
        } => {
            ctx.line(&format!(
                "if ({} {} {}) {{",
                expr_to_c(lhs),
                op.as_symbol(),
                expr_to_c(rhs)
            ));
            ctx.indented(|ctx| emit_stmt(ctx, if_true));
            ctx.line("} else {");
            ctx.indented(|ctx| emit_stmt(ctx, if_false));
            ctx.line("}");
        }

        Stmt::Loop { body } => {
            // The loop carries no condition; termination is the break
            // emitted for an exit-loop node inside the body.
            ctx.line("while (true) {");
            ctx.indented(|ctx| emit_stmt(ctx, body));
            ctx.line("}");
        }

        Stmt::ExitLoop => ctx.line("break;"),

        Stmt::Block(stmts) => {
            for stmt in stmts {
                emit_stmt(ctx, stmt);
            }
        }
    }
}
