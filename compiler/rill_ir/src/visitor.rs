//! AST Visitor
//!
//! Generic read-only traversal over statement and expression trees.
//!
//! Default `visit_*` implementations call the `walk_*` functions, which
//! descend into children in source order. Override `visit_*` to add
//! behavior at specific nodes; the visitor may mutate its own state, the
//! tree stays immutable.
//!
//! # Example
//!
//! ```
//! use rill_ir::{walk_expr, BinaryOp, Expr, Visitor};
//!
//! struct CountLiterals {
//!     count: usize,
//! }
//!
//! impl<'ast> Visitor<'ast> for CountLiterals {
//!     fn visit_expr(&mut self, expr: &'ast Expr) {
//!         if let Expr::Literal(_) = expr {
//!             self.count += 1;
//!         }
//!         walk_expr(self, expr);
//!     }
//! }
//!
//! let expr = Expr::binary(BinaryOp::Add, Expr::literal(1.0), Expr::literal(2.0));
//! let mut counter = CountLiterals { count: 0 };
//! counter.visit_expr(&expr);
//! assert_eq!(counter.count, 2);
//! ```

use crate::ast::{Expr, Stmt};

/// AST visitor trait.
pub trait Visitor<'ast> {
    /// Visit an expression.
    fn visit_expr(&mut self, expr: &'ast Expr) {
        walk_expr(self, expr);
    }

    /// Visit a statement.
    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        walk_stmt(self, stmt);
    }
}

/// Traverse the children of an expression in source order.
pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, expr: &'ast Expr) {
    match expr {
        Expr::Literal(_) | Expr::Variable(_) => {}
        Expr::Binary { lhs, rhs, .. } => {
            visitor.visit_expr(lhs);
            visitor.visit_expr(rhs);
        }
    }
}

/// Traverse the children of a statement in source order.
pub fn walk_stmt<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, stmt: &'ast Stmt) {
    match stmt {
        Stmt::Assign { value, .. } => visitor.visit_expr(value),
        Stmt::Conditional {
            lhs,
            rhs,
            if_true,
            if_false,
            ..
        } => {
            visitor.visit_expr(lhs);
            visitor.visit_expr(rhs);
            visitor.visit_stmt(if_true);
            visitor.visit_stmt(if_false);
        }
        Stmt::Loop { body } => visitor.visit_stmt(body),
        Stmt::ExitLoop => {}
        Stmt::Block(stmts) => {
            for stmt in stmts {
                visitor.visit_stmt(stmt);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{walk_expr, walk_stmt, Visitor};
    use crate::ast::{BinaryOp, ComparisonOp, Expr, Stmt};

    /// Collects the names of every variable reference, in visit order.
    struct CollectVariables {
        seen: Vec<String>,
    }

    impl<'ast> Visitor<'ast> for CollectVariables {
        fn visit_expr(&mut self, expr: &'ast Expr) {
            if let Expr::Variable(name) = expr {
                self.seen.push(name.clone());
            }
            walk_expr(self, expr);
        }
    }

    #[test]
    fn visits_expression_children_left_to_right() {
        let expr = Expr::binary(
            BinaryOp::Sub,
            Expr::variable("a"),
            Expr::binary(BinaryOp::Mul, Expr::variable("b"), Expr::variable("c")),
        );
        let mut collector = CollectVariables { seen: Vec::new() };
        collector.visit_expr(&expr);
        assert_eq!(collector.seen, vec!["a", "b", "c"]);
    }

    #[test]
    fn visits_statement_subtrees_in_source_order() {
        let stmt = Stmt::repeat(Stmt::block(vec![
            Stmt::assign(
                "x",
                Expr::binary(BinaryOp::Add, Expr::variable("x"), Expr::literal(1.0)),
            ),
            Stmt::conditional(
                ComparisonOp::Eq,
                Expr::variable("x"),
                Expr::variable("limit"),
                Stmt::ExitLoop,
                Stmt::empty(),
            ),
        ]));
        let mut collector = CollectVariables { seen: Vec::new() };
        collector.visit_stmt(&stmt);
        assert_eq!(collector.seen, vec!["x", "x", "limit"]);
    }

    /// Counts every node, expression and statement alike.
    struct CountNodes {
        count: usize,
    }

    impl<'ast> Visitor<'ast> for CountNodes {
        fn visit_expr(&mut self, expr: &'ast Expr) {
            self.count += 1;
            walk_expr(self, expr);
        }

        fn visit_stmt(&mut self, stmt: &'ast Stmt) {
            self.count += 1;
            walk_stmt(self, stmt);
        }
    }

    #[test]
    fn walk_reaches_every_node_exactly_once() {
        // Assign + Binary + Variable + Literal = 4 nodes.
        let stmt = Stmt::assign(
            "x",
            Expr::binary(BinaryOp::Add, Expr::variable("x"), Expr::literal(1.0)),
        );
        let mut counter = CountNodes { count: 0 };
        counter.visit_stmt(&stmt);
        assert_eq!(counter.count, 4);
    }
}
