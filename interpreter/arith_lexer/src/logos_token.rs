//! Raw token definitions for the generated scanner.

use logos::Logos;

/// Raw tokens produced by the logos-generated scanner.
///
/// Space and tab are skipped here. A newline is a real token, not whitespace:
/// it marks the end of the expression being read, so the wrapping [`Lexer`]
/// turns it into the end-of-input sentinel.
///
/// [`Lexer`]: crate::lexer::Lexer
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,

    /// A non-negative integer literal. The longest run of digits forms one
    /// literal; a run that does not fit in an `i64` is a lexing error.
    #[regex(r"[0-9]+", |lex| lex.slice().parse().ok())]
    Integer(i64),

    /// End-of-expression sentinel. `\r\n` counts as a single newline.
    #[regex(r"\r?\n")]
    Newline,

    /// Space and tab, skipped silently.
    #[regex(r"[ \t]+", logos::skip)]
    Whitespace,
}
