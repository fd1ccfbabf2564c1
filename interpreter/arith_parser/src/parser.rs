//! Parser implementation for the Arith expression grammar:
//!
//! ```text
//! expression -> term   { ("+" | "-") term }*
//! term       -> factor { ("*" | "/") factor }*
//! factor     -> "(" expression ")" | "-" factor | INTEGER
//! ```
//!
//! The repetition braces are the left-recursion-eliminated form of
//! `E -> E+T | T`: each rule parses one operand and then folds further
//! operands into the accumulated tree, which is what makes `+ - * /`
//! left-associative. `term` is invoked from within a single `expression`
//! step, so `*` and `/` bind tighter than `+` and `-`.

use arith_ast::ast::{BinaryOperator, ExpressionNode};
use arith_lexer::{Lexer, Location, Token, TokenType};
use log::debug;
use thiserror::Error;

/// Errors produced while parsing a single expression.
///
/// Every variant is unrecoverable for the current evaluation: the parser
/// stops at the first error and produces no partial tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A character outside the language surfaced as the lookahead.
    #[error("invalid character {found:?} at {location}")]
    InvalidCharacter {
        /// The offending character.
        found: char,
        /// Where it was read.
        location: Location,
    },

    /// The lookahead did not match what the grammar requires here: either
    /// `match_token` was called against a different token, or `factor` saw a
    /// lookahead none of its productions can start with.
    #[error("expected {expected}, found {found} at {location}")]
    UnexpectedToken {
        /// Description of the acceptable token(s).
        expected: String,
        /// The token actually in the lookahead slot.
        found: TokenType,
        /// Where it was read.
        location: Location,
    },

    /// The expression ended but unconsumed tokens remain on the line.
    #[error("trailing input after expression: found {found} at {location}")]
    TrailingInput {
        /// The first leftover token.
        found: TokenType,
        /// Where it was read.
        location: Location,
    },
}

/// Parses one line of input into an expression tree.
///
/// The whole line must be a single well-formed expression followed by a
/// newline or the end of the input; anything else is a [`ParseError`].
///
/// # Example
///
/// ```
/// let tree = arith_parser::parse_expression("2 + 3 * 4").unwrap();
/// assert_eq!(tree.to_string(), "(2 + (3 * 4))");
/// ```
pub fn parse_expression(source: &str) -> Result<ExpressionNode, ParseError> {
    Parser::new(source).parse()
}

/// The recursive-descent parser.
///
/// Owns the lexer and the single token of lookahead the grammar rules
/// inspect. Rules never pull from the lexer themselves; only
/// [`Parser::match_token`] advances the lookahead.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    lookahead: Token,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `source` and primes the lookahead with the
    /// first token.
    pub fn new(source: &'a str) -> Self {
        let mut lexer = Lexer::new(source);
        let lookahead = lexer.next_token();
        Self { lexer, lookahead }
    }

    /// Runs the start rule and checks that the whole line was consumed.
    pub fn parse(mut self) -> Result<ExpressionNode, ParseError> {
        let tree = self.expression()?;
        match self.lookahead.token_type {
            TokenType::EndOfInput => Ok(tree),
            TokenType::Invalid(found) => Err(ParseError::InvalidCharacter {
                found,
                location: self.lookahead.location,
            }),
            found => Err(ParseError::TrailingInput {
                found,
                location: self.lookahead.location,
            }),
        }
    }

    /// `expression -> term { ("+" | "-") term }*`
    fn expression(&mut self) -> Result<ExpressionNode, ParseError> {
        debug!("expression: lookahead {}", self.lookahead.token_type);
        let mut tree = self.term()?;
        while matches!(
            self.lookahead.token_type,
            TokenType::Plus | TokenType::Minus
        ) {
            let operator = if self.lookahead.token_type == TokenType::Plus {
                BinaryOperator::Add
            } else {
                BinaryOperator::Sub
            };
            self.match_token(self.lookahead.token_type)?;
            let right = self.term()?;
            // The accumulated tree becomes the left child: left-associativity.
            tree = ExpressionNode::binary(tree, operator, right);
        }
        Ok(tree)
    }

    /// `term -> factor { ("*" | "/") factor }*`
    fn term(&mut self) -> Result<ExpressionNode, ParseError> {
        debug!("term: lookahead {}", self.lookahead.token_type);
        let mut tree = self.factor()?;
        while matches!(
            self.lookahead.token_type,
            TokenType::Star | TokenType::Slash
        ) {
            let operator = if self.lookahead.token_type == TokenType::Star {
                BinaryOperator::Mul
            } else {
                BinaryOperator::Div
            };
            self.match_token(self.lookahead.token_type)?;
            let right = self.factor()?;
            tree = ExpressionNode::binary(tree, operator, right);
        }
        Ok(tree)
    }

    /// `factor -> "(" expression ")" | "-" factor | INTEGER`
    ///
    /// Unary minus recurses into `factor`, not `term` or `expression`, so it
    /// binds tighter than every binary operator and chains (`--5`).
    fn factor(&mut self) -> Result<ExpressionNode, ParseError> {
        debug!("factor: lookahead {}", self.lookahead.token_type);
        match self.lookahead.token_type {
            TokenType::LeftParen => {
                self.match_token(TokenType::LeftParen)?;
                let tree = self.expression()?;
                self.match_token(TokenType::RightParen)?;
                Ok(tree)
            }
            TokenType::Minus => {
                self.match_token(TokenType::Minus)?;
                let operand = self.factor()?;
                Ok(ExpressionNode::negate(operand))
            }
            TokenType::Integer(value) => {
                self.match_token(TokenType::Integer(value))?;
                Ok(ExpressionNode::literal(value))
            }
            TokenType::Invalid(found) => Err(ParseError::InvalidCharacter {
                found,
                location: self.lookahead.location,
            }),
            found => Err(ParseError::UnexpectedToken {
                expected: "'(', '-', or a number".to_string(),
                found,
                location: self.lookahead.location,
            }),
        }
    }

    /// Consumes the lookahead if it equals `expected` and pulls the next
    /// token from the lexer. This is the only place the lookahead advances.
    fn match_token(&mut self, expected: TokenType) -> Result<(), ParseError> {
        match self.lookahead.token_type {
            found if found == expected => {
                self.lookahead = self.lexer.next_token();
                Ok(())
            }
            TokenType::Invalid(found) => Err(ParseError::InvalidCharacter {
                found,
                location: self.lookahead.location,
            }),
            found => Err(ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found,
                location: self.lookahead.location,
            }),
        }
    }
}
