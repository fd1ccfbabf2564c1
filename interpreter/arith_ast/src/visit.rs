//! Visitor pattern implementation for traversing expression trees.
//!
//! A pass over the tree (evaluation, pretty-printing, statistics) implements
//! [`Visitor`] and drives it through [`ExpressionNode::accept`]. The
//! associated `Error` type lets each pass fail with its own error enum.

use crate::ast::{BinaryExpressionNode, ExpressionNode, UnaryExpressionNode};

/// A visitor over expression trees.
pub trait Visitor {
    /// The value produced for each node.
    type Output;
    /// The error a visit can fail with.
    type Error;

    /// Visits a literal node.
    fn visit_literal(&mut self, value: i64) -> Result<Self::Output, Self::Error>;

    /// Visits a unary negation node.
    fn visit_unary(&mut self, node: &UnaryExpressionNode) -> Result<Self::Output, Self::Error>;

    /// Visits a binary operator node.
    fn visit_binary(&mut self, node: &BinaryExpressionNode) -> Result<Self::Output, Self::Error>;
}

impl ExpressionNode {
    /// Accepts a visitor and dispatches to the visit method for this node's
    /// shape.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<V::Output, V::Error> {
        match self {
            ExpressionNode::Literal(value) => visitor.visit_literal(*value),
            ExpressionNode::Unary(node) => visitor.visit_unary(node),
            ExpressionNode::Binary(node) => visitor.visit_binary(node),
        }
    }
}
