//! Post-order evaluation of expression trees.

use arith_ast::ast::{BinaryExpressionNode, BinaryOperator, ExpressionNode, UnaryExpressionNode, UnaryOperator};
use arith_ast::visit::Visitor;
use log::trace;
use thiserror::Error;

/// Errors produced while evaluating a tree.
///
/// Evaluation aborts at the first fault; no partial or sentinel result is
/// ever produced.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// The right operand of `/` evaluated to zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An operation left the `i64` range (for example `i64::MAX + 1`, or the
    /// negation of `i64::MIN`).
    #[error("arithmetic overflow")]
    Overflow,
}

/// Evaluates a tree to its integer value.
///
/// Division truncates toward zero, matching Rust's native `/` on integers:
/// `7/2 == 3` and `-7/2 == -3`.
///
/// # Example
///
/// ```
/// use arith_ast::ast::{BinaryOperator, ExpressionNode};
///
/// let tree = ExpressionNode::binary(
///     ExpressionNode::literal(2),
///     BinaryOperator::Add,
///     ExpressionNode::literal(3),
/// );
/// assert_eq!(arith_eval::evaluate(&tree), Ok(5));
/// ```
pub fn evaluate(tree: &ExpressionNode) -> Result<i64, EvalError> {
    tree.accept(&mut Evaluator)
}

/// The evaluation pass over the tree.
pub struct Evaluator;

impl Visitor for Evaluator {
    type Output = i64;
    type Error = EvalError;

    fn visit_literal(&mut self, value: i64) -> Result<i64, EvalError> {
        Ok(value)
    }

    fn visit_unary(&mut self, node: &UnaryExpressionNode) -> Result<i64, EvalError> {
        let value = node.operand.accept(self)?;
        match node.operator {
            UnaryOperator::Neg => value.checked_neg().ok_or(EvalError::Overflow),
        }
    }

    fn visit_binary(&mut self, node: &BinaryExpressionNode) -> Result<i64, EvalError> {
        let left = node.left.accept(self)?;
        let right = node.right.accept(self)?;
        let result = match node.operator {
            BinaryOperator::Add => left.checked_add(right).ok_or(EvalError::Overflow),
            BinaryOperator::Sub => left.checked_sub(right).ok_or(EvalError::Overflow),
            BinaryOperator::Mul => left.checked_mul(right).ok_or(EvalError::Overflow),
            BinaryOperator::Div => {
                if right == 0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    // Still checked: i64::MIN / -1 overflows.
                    left.checked_div(right).ok_or(EvalError::Overflow)
                }
            }
        };
        trace!("{} {} {} -> {:?}", left, node.operator, right, result);
        result
    }
}
