//! Rill IR - AST Node Types
//!
//! This crate contains the core data structures for the Rill language:
//! - Expression and statement nodes (`Expr`, `Stmt`)
//! - Operator tags (`BinaryOp`, `ComparisonOp`)
//! - The uniform node contract (`NodeRef`: child enumeration, describe, dump)
//! - A generic read-only `Visitor`
//!
//! Trees arrive fully built from an external parser through the per-variant
//! constructors and are immutable afterwards. Every node owns its children
//! exclusively, so a tree can be shared read-only across threads while each
//! evaluation run holds its own context.
//!
//! Equality and hashing are structural over whole subtrees; node identity
//! never participates. Float literals are stored as `u64` bits so `Eq` and
//! `Hash` derive structurally.

pub mod ast;
mod node;
pub mod visitor;

pub use ast::{BinaryOp, ComparisonOp, Expr, Stmt};
pub use node::{ChildName, NodeRef};
pub use visitor::{walk_expr, walk_stmt, Visitor};
