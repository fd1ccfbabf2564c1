//! Arith lexical analyzer module
//!
//! This module provides lexical analysis for the Arith expression language,
//! converting a single line of text into a stream of tokens for the parser.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod lexer;
pub mod logos_token;
pub mod token;

// Re-export the main types for convenience
pub use lexer::Lexer;
pub use logos_token::LogosToken;
pub use token::{Location, Token, TokenType};
