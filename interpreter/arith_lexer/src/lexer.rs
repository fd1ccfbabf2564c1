//! Lexer implementation for the Arith expression language
//! Converts a line of input into a stream of tokens for the parser

use logos::Logos;

use log::trace;

use crate::token::{Location, Token, TokenType};
use crate::LogosToken;

/// The main lexer struct that holds the state of the lexing process.
///
/// The lexer is a pull-style producer: each call to [`Lexer::next_token`]
/// yields exactly one classified token. Once the end-of-input sentinel has
/// been produced (at the first newline or at the physical end of the input),
/// every further call yields the sentinel again; input after the first
/// newline is never scanned.
pub struct Lexer<'a> {
    /// The input being lexed
    source: &'a str,
    /// The current line number (1-based)
    line: usize,
    /// The current column number (1-based)
    column: usize,
    /// The current byte offset in the input
    offset: usize,
    /// The inner logos lexer
    inner: logos::Lexer<'a, LogosToken>,
    /// Latched once the end-of-input sentinel has been produced
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            line: 1,
            column: 1,
            offset: 0,
            inner: LogosToken::lexer(source),
            done: false,
        }
    }

    /// The current position of the lexer in the input.
    fn location(&self) -> Location {
        Location {
            line: self.line,
            column: self.column,
            offset: self.offset,
        }
    }

    /// Advance the position tracking to the given byte offset.
    ///
    /// Counts characters, not bytes, so multi-byte input between tokens is
    /// handled correctly.
    fn advance_to(&mut self, target: usize) {
        let text = &self.source[self.offset..target];
        for c in text.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset = target;
    }

    /// Convert a raw scanner token to its semantic kind.
    fn convert(raw: LogosToken) -> TokenType {
        match raw {
            LogosToken::Plus => TokenType::Plus,
            LogosToken::Minus => TokenType::Minus,
            LogosToken::Star => TokenType::Star,
            LogosToken::Slash => TokenType::Slash,
            LogosToken::LeftParen => TokenType::LeftParen,
            LogosToken::RightParen => TokenType::RightParen,
            LogosToken::Integer(value) => TokenType::Integer(value),
            // `Newline` is handled before conversion and `Whitespace` is
            // skipped inside the scanner; neither reaches this point.
            LogosToken::Newline | LogosToken::Whitespace => TokenType::EndOfInput,
        }
    }

    /// Get the next token from the input.
    ///
    /// Space and tab are skipped silently. A newline (or the physical end of
    /// the input) produces the [`TokenType::EndOfInput`] sentinel; any
    /// character outside the language produces [`TokenType::Invalid`].
    pub fn next_token(&mut self) -> Token {
        if self.done {
            return Token::new(TokenType::EndOfInput, "", self.location());
        }

        let raw = match self.inner.next() {
            Some(raw) => raw,
            None => {
                self.done = true;
                self.advance_to(self.source.len());
                trace!("scanned end of input at {}", self.location());
                return Token::new(TokenType::EndOfInput, "", self.location());
            }
        };

        let span = self.inner.span();
        let lexeme = &self.source[span.clone()];

        // Position of the token start, captured before we walk through the
        // lexeme itself.
        self.advance_to(span.start);
        let location = self.location();
        self.advance_to(span.end);

        let token_type = match raw {
            Ok(LogosToken::Newline) => {
                self.done = true;
                TokenType::EndOfInput
            }
            Ok(raw) => Self::convert(raw),
            Err(()) => {
                let found = lexeme.chars().next().unwrap_or('\u{fffd}');
                TokenType::Invalid(found)
            }
        };

        trace!("scanned {token_type} at {location}");
        Token::new(token_type, lexeme, location)
    }
}

/// Iterates over the tokens of the input, stopping before the end-of-input
/// sentinel. Handy for tests and benchmarks; the parser pulls tokens with
/// [`Lexer::next_token`] directly.
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.token_type == TokenType::EndOfInput {
            None
        } else {
            Some(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(source: &str) -> Vec<TokenType> {
        Lexer::new(source).map(|t| t.token_type).collect()
    }

    #[test]
    fn scans_operators_and_parens() {
        assert_eq!(
            kinds("+-*/()"),
            vec![
                TokenType::Plus,
                TokenType::Minus,
                TokenType::Star,
                TokenType::Slash,
                TokenType::LeftParen,
                TokenType::RightParen,
            ]
        );
    }

    #[test]
    fn scans_integer_with_maximal_munch() {
        assert_eq!(kinds("123+4"), vec![
            TokenType::Integer(123),
            TokenType::Plus,
            TokenType::Integer(4),
        ]);
    }

    #[test]
    fn skips_spaces_and_tabs() {
        assert_eq!(kinds(" \t 1 \t+ 2 "), vec![
            TokenType::Integer(1),
            TokenType::Plus,
            TokenType::Integer(2),
        ]);
    }

    #[test]
    fn newline_ends_the_token_stream() {
        assert_eq!(kinds("1+2\n3*4"), vec![
            TokenType::Integer(1),
            TokenType::Plus,
            TokenType::Integer(2),
        ]);
    }

    #[test]
    fn end_of_input_latches() {
        let mut lexer = Lexer::new("7\n");
        assert_eq!(lexer.next_token().token_type, TokenType::Integer(7));
        assert_eq!(lexer.next_token().token_type, TokenType::EndOfInput);
        assert_eq!(lexer.next_token().token_type, TokenType::EndOfInput);
    }

    #[test]
    fn classifies_foreign_characters_as_invalid() {
        assert_eq!(kinds("2+a"), vec![
            TokenType::Integer(2),
            TokenType::Plus,
            TokenType::Invalid('a'),
        ]);
    }

    #[test]
    fn oversized_literal_is_a_lexing_error() {
        // One digit past i64::MAX
        let tokens = kinds("9223372036854775808");
        assert_eq!(tokens, vec![TokenType::Invalid('9')]);
    }

    #[test]
    fn tracks_column_positions() {
        let mut lexer = Lexer::new("12 + 3");
        let first = lexer.next_token();
        assert_eq!(first.location.column, 1);
        let plus = lexer.next_token();
        assert_eq!(plus.location.column, 4);
        let second = lexer.next_token();
        assert_eq!(second.location.column, 6);
        assert_eq!(second.location.offset, 5);
    }
}
