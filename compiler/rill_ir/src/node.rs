//! Uniform Node Contract
//!
//! `NodeRef` is a variant-agnostic handle over both node categories.
//! Generic algorithms — the tree dump here, diffing or rewriting passes
//! elsewhere — work entirely through `children()` and `describe()` with no
//! per-variant code of their own.

use std::borrow::Cow;
use std::fmt::Write as _;

use crate::ast::{Expr, Stmt};

/// Name of a child slot.
///
/// Fixed names for fixed-arity variants (`lhs` before `rhs`, reflecting
/// source order); the element index for block children.
pub type ChildName = Cow<'static, str>;

/// Borrowed handle over any node in a tree.
#[derive(Copy, Clone, Debug)]
pub enum NodeRef<'a> {
    Expr(&'a Expr),
    Stmt(&'a Stmt),
}

impl<'a> NodeRef<'a> {
    /// Ordered `(name, child)` pairs in source order.
    pub fn children(&self) -> Vec<(ChildName, NodeRef<'a>)> {
        match self {
            NodeRef::Expr(expr) => expr_children(expr),
            NodeRef::Stmt(stmt) => stmt_children(stmt),
        }
    }

    /// Short description naming the variant and its scalar attributes.
    ///
    /// Children are never included; pair with `children()` to render a
    /// subtree.
    pub fn describe(&self) -> String {
        match self {
            NodeRef::Expr(Expr::Literal(bits)) => format!("Literal({})", f64::from_bits(*bits)),
            NodeRef::Expr(Expr::Variable(name)) => format!("Variable({name})"),
            NodeRef::Expr(Expr::Binary { op, .. }) => format!("Binary(op={op:?})"),
            NodeRef::Stmt(Stmt::Assign { target, .. }) => format!("Assign(target={target})"),
            NodeRef::Stmt(Stmt::Conditional { op, .. }) => format!("Conditional(op={op:?})"),
            NodeRef::Stmt(Stmt::Loop { .. }) => "Loop".to_string(),
            NodeRef::Stmt(Stmt::ExitLoop) => "ExitLoop".to_string(),
            NodeRef::Stmt(Stmt::Block(stmts)) => format!("Block(len={})", stmts.len()),
        }
    }

    /// Indented multi-line rendering of the whole subtree.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        dump_into(*self, None, 0, &mut out);
        out
    }
}

impl Expr {
    /// This expression as a uniform node handle.
    pub fn as_node(&self) -> NodeRef<'_> {
        NodeRef::Expr(self)
    }
}

impl Stmt {
    /// This statement as a uniform node handle.
    pub fn as_node(&self) -> NodeRef<'_> {
        NodeRef::Stmt(self)
    }
}

fn expr_children(expr: &Expr) -> Vec<(ChildName, NodeRef<'_>)> {
    match expr {
        Expr::Literal(_) | Expr::Variable(_) => Vec::new(),
        Expr::Binary { lhs, rhs, .. } => vec![
            (Cow::Borrowed("lhs"), NodeRef::Expr(lhs)),
            (Cow::Borrowed("rhs"), NodeRef::Expr(rhs)),
        ],
    }
}

fn stmt_children(stmt: &Stmt) -> Vec<(ChildName, NodeRef<'_>)> {
    match stmt {
        Stmt::Assign { value, .. } => vec![(Cow::Borrowed("value"), NodeRef::Expr(value))],
        Stmt::Conditional {
            lhs,
            rhs,
            if_true,
            if_false,
            ..
        } => vec![
            (Cow::Borrowed("lhs"), NodeRef::Expr(lhs)),
            (Cow::Borrowed("rhs"), NodeRef::Expr(rhs)),
            (Cow::Borrowed("if_true"), NodeRef::Stmt(if_true)),
            (Cow::Borrowed("if_false"), NodeRef::Stmt(if_false)),
        ],
        Stmt::Loop { body } => vec![(Cow::Borrowed("body"), NodeRef::Stmt(body))],
        Stmt::ExitLoop => Vec::new(),
        Stmt::Block(stmts) => stmts
            .iter()
            .enumerate()
            .map(|(i, stmt)| (Cow::Owned(i.to_string()), NodeRef::Stmt(stmt)))
            .collect(),
    }
}

fn dump_into(node: NodeRef<'_>, slot: Option<&str>, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("    ");
    }
    if let Some(slot) = slot {
        let _ = write!(out, "{slot}: ");
    }
    out.push_str(&node.describe());
    out.push('\n');
    for (name, child) in node.children() {
        dump_into(child, Some(&name), depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::ast::{BinaryOp, ComparisonOp, Expr, Stmt};

    fn names(node: &crate::NodeRef<'_>) -> Vec<String> {
        node.children()
            .into_iter()
            .map(|(name, _)| name.into_owned())
            .collect()
    }

    #[test]
    fn leaves_have_no_children() {
        assert_eq!(Expr::literal(1.0).as_node().children().len(), 0);
        assert_eq!(Expr::variable("x").as_node().children().len(), 0);
        assert_eq!(Stmt::ExitLoop.as_node().children().len(), 0);
    }

    #[test]
    fn binary_children_are_lhs_then_rhs() {
        let expr = Expr::binary(BinaryOp::Add, Expr::variable("x"), Expr::literal(1.0));
        assert_eq!(names(&expr.as_node()), vec!["lhs", "rhs"]);
    }

    #[test]
    fn conditional_children_follow_source_order() {
        let stmt = Stmt::conditional(
            ComparisonOp::Lt,
            Expr::variable("x"),
            Expr::literal(12.0),
            Stmt::assign("a", Expr::variable("x")),
            Stmt::empty(),
        );
        assert_eq!(names(&stmt.as_node()), vec!["lhs", "rhs", "if_true", "if_false"]);
    }

    #[test]
    fn block_children_are_named_by_index() {
        let stmt = Stmt::block(vec![
            Stmt::assign("x", Expr::literal(1.0)),
            Stmt::ExitLoop,
        ]);
        assert_eq!(names(&stmt.as_node()), vec!["0", "1"]);
    }

    #[test]
    fn describe_names_variant_and_attributes() {
        assert_eq!(Expr::literal(7.0).as_node().describe(), "Literal(7)");
        assert_eq!(Expr::variable("x").as_node().describe(), "Variable(x)");
        let binary = Expr::binary(BinaryOp::Mul, Expr::literal(2.0), Expr::literal(3.0));
        assert_eq!(binary.as_node().describe(), "Binary(op=Mul)");
        assert_eq!(
            Stmt::assign("x", Expr::literal(1.0)).as_node().describe(),
            "Assign(target=x)"
        );
        assert_eq!(Stmt::ExitLoop.as_node().describe(), "ExitLoop");
        assert_eq!(Stmt::empty().as_node().describe(), "Block(len=0)");
    }

    #[test]
    fn dump_renders_indented_subtree() {
        let stmt = Stmt::assign(
            "x",
            Expr::binary(BinaryOp::Add, Expr::variable("x"), Expr::literal(1.0)),
        );
        let expected = "\
Assign(target=x)
    value: Binary(op=Add)
        lhs: Variable(x)
        rhs: Literal(1)
";
        assert_eq!(stmt.as_node().dump(), expected);
    }
}
