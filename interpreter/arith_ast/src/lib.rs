//! Expression tree (AST) for the Arith expression language.
//!
//! This crate defines the tree nodes built by the parser, along with a
//! visitor for traversing them and optional JSON serialization.

pub mod ast;
pub mod visit;

pub use ast::{BinaryExpressionNode, BinaryOperator, ExpressionNode, UnaryExpressionNode, UnaryOperator};
pub use visit::Visitor;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use std::error::Error;

/// A result type for AST serialization operations.
#[cfg(feature = "serde")]
pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

/// Serializes a tree to a pretty-printed JSON string.
///
/// # Example
///
/// ```
/// use arith_ast::ast::{BinaryOperator, ExpressionNode};
///
/// let expr = ExpressionNode::binary(
///     ExpressionNode::literal(1),
///     BinaryOperator::Add,
///     ExpressionNode::literal(2),
/// );
/// let json = arith_ast::to_json(&expr).unwrap();
/// assert!(json.contains("Binary"));
/// assert!(json.contains("Add"));
/// ```
#[cfg(feature = "serde")]
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Deserializes a tree from a JSON string.
#[cfg(feature = "serde")]
pub fn from_json<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}
