//! Recursive-descent parser for the Arith expression language.
//!
//! Turns one line of input into an [`arith_ast::ExpressionNode`] tree, with
//! conventional precedence (`*` `/` over `+` `-`), left-associativity, and
//! tightly-binding unary minus.

pub mod parser;

pub use parser::{parse_expression, ParseError, Parser};
