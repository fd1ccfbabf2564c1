//! Tree evaluator for the Arith expression language.
//!
//! Reduces a parsed [`arith_ast::ExpressionNode`] tree to a single `i64` by
//! post-order traversal, with checked arithmetic throughout.

pub mod evaluator;

pub use evaluator::{evaluate, EvalError, Evaluator};
