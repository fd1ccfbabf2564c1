// Expression-tree definitions for the Arith language.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One node of a parsed expression.
///
/// A node is exactly one of: an integer literal with no children, a unary
/// negation with one operand, or a binary operator with two operands. Each
/// child is uniquely owned by its parent, so the whole tree is freed when
/// the root goes out of scope.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExpressionNode {
    /// An integer literal.
    Literal(i64),
    /// Unary negation applied to a factor.
    Unary(Box<UnaryExpressionNode>),
    /// A binary operator applied to two sub-expressions.
    Binary(Box<BinaryExpressionNode>),
}

/// A binary operator together with both operands.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinaryExpressionNode {
    pub left: ExpressionNode,
    pub operator: BinaryOperator,
    pub right: ExpressionNode,
}

/// A unary operator together with its operand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnaryExpressionNode {
    pub operator: UnaryOperator,
    pub operand: ExpressionNode,
}

/// The binary operators of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

/// The unary operators of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOperator {
    Neg,
}

impl ExpressionNode {
    /// A literal node holding `value`.
    pub fn literal(value: i64) -> Self {
        ExpressionNode::Literal(value)
    }

    /// A binary node combining two finished sub-trees.
    pub fn binary(left: ExpressionNode, operator: BinaryOperator, right: ExpressionNode) -> Self {
        ExpressionNode::Binary(Box::new(BinaryExpressionNode {
            left,
            operator,
            right,
        }))
    }

    /// A unary negation node wrapping a finished sub-tree.
    pub fn negate(operand: ExpressionNode) -> Self {
        ExpressionNode::Unary(Box::new(UnaryExpressionNode {
            operator: UnaryOperator::Neg,
            operand,
        }))
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOperator::Add => write!(f, "+"),
            BinaryOperator::Sub => write!(f, "-"),
            BinaryOperator::Mul => write!(f, "*"),
            BinaryOperator::Div => write!(f, "/"),
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOperator::Neg => write!(f, "-"),
        }
    }
}

/// Renders the tree fully parenthesized, making the parsed grouping visible:
/// `1-2-3` prints as `((1 - 2) - 3)`.
impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionNode::Literal(value) => write!(f, "{value}"),
            ExpressionNode::Unary(node) => write!(f, "(-{})", node.operand),
            ExpressionNode::Binary(node) => {
                write!(f, "({} {} {})", node.left, node.operator, node.right)
            }
        }
    }
}
