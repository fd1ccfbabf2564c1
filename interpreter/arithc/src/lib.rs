//! Library facade over the Arith pipeline: one line of text in, one `i64`
//! out. The binary in this crate is a thin wrapper around these functions,
//! which also give tests and embedders a single entry point.

use arith_ast::ast::ExpressionNode;
use arith_eval::EvalError;
use arith_parser::ParseError;
use thiserror::Error;

/// Any failure from the line-to-value pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArithError {
    /// The line did not lex or parse as a single well-formed expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression parsed but could not be evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Parses one line of input into its expression tree.
pub fn parse_line(source: &str) -> Result<ExpressionNode, ArithError> {
    Ok(arith_parser::parse_expression(source)?)
}

/// Parses and evaluates one line of input.
///
/// The newline is the evaluation boundary: only the first line of `source`
/// is read, and it must hold exactly one well-formed expression.
///
/// # Example
///
/// ```
/// assert_eq!(arithc::evaluate_line("2+3*4\n"), Ok(14));
/// ```
pub fn evaluate_line(source: &str) -> Result<i64, ArithError> {
    let tree = arith_parser::parse_expression(source)?;
    log::debug!("parsed tree: {tree}");
    Ok(arith_eval::evaluate(&tree)?)
}
