//! Rill Code Generator
//!
//! The text-emission execution strategy: renders statement trees as C
//! source through an append-only [`Emitter`] sink.
//!
//! Generation never touches an evaluation context and is a function of
//! tree structure alone, semantically equivalent to direct evaluation of
//! the same tree. The emitted text mirrors the tree exactly — one C
//! statement per statement node, same nesting — which makes golden-text
//! comparison a faithful test strategy.

mod c;
mod context;
mod emitter;

pub use c::{compile, compile_to_string, expr_to_c};
pub use emitter::{Emitter, FileEmitter, StringEmitter};
