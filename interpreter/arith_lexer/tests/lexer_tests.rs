use arith_lexer::{Lexer, TokenType};
use proptest::prelude::*;

#[allow(dead_code)]
fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
}

#[test]
fn test_full_expression_scan() {
    init_test_logger();
    let tokens: Vec<_> = Lexer::new("(2+3) * -41 / 5\n")
        .map(|t| t.token_type)
        .collect();
    assert_eq!(
        tokens,
        vec![
            TokenType::LeftParen,
            TokenType::Integer(2),
            TokenType::Plus,
            TokenType::Integer(3),
            TokenType::RightParen,
            TokenType::Star,
            TokenType::Minus,
            TokenType::Integer(41),
            TokenType::Slash,
            TokenType::Integer(5),
        ]
    );
}

#[test]
fn test_lexemes_and_locations() {
    let mut lexer = Lexer::new("10 + 200");
    let ten = lexer.next_token();
    assert_eq!(ten.lexeme, "10");
    assert_eq!(ten.location.offset, 0);

    let plus = lexer.next_token();
    assert_eq!(plus.lexeme, "+");
    assert_eq!(plus.location.offset, 3);

    let two_hundred = lexer.next_token();
    assert_eq!(two_hundred.lexeme, "200");
    assert_eq!(two_hundred.location.offset, 5);

    let end = lexer.next_token();
    assert_eq!(end.token_type, TokenType::EndOfInput);
}

#[test]
fn test_missing_trailing_newline() {
    // A line without a newline still ends in the sentinel.
    let mut lexer = Lexer::new("1+1");
    assert_eq!(lexer.next_token().token_type, TokenType::Integer(1));
    assert_eq!(lexer.next_token().token_type, TokenType::Plus);
    assert_eq!(lexer.next_token().token_type, TokenType::Integer(1));
    assert_eq!(lexer.next_token().token_type, TokenType::EndOfInput);
    assert_eq!(lexer.next_token().token_type, TokenType::EndOfInput);
}

#[test]
fn test_crlf_line_ending() {
    let tokens: Vec<_> = Lexer::new("8/2\r\n9").map(|t| t.token_type).collect();
    assert_eq!(
        tokens,
        vec![TokenType::Integer(8), TokenType::Slash, TokenType::Integer(2)]
    );
}

#[test]
fn test_invalid_characters() {
    for (input, expected) in [("2+a", 'a'), ("1;2", ';'), ("x", 'x'), ("3 . 4", '.')] {
        let invalid = Lexer::new(input)
            .map(|t| t.token_type)
            .find(|t| matches!(t, TokenType::Invalid(_)));
        assert_eq!(invalid, Some(TokenType::Invalid(expected)), "input: {input}");
    }
}

proptest! {
    #[test]
    fn any_decimal_literal_scans_to_its_value(n in 0i64..=i64::MAX) {
        let source = format!("{n}\n");
        let mut lexer = Lexer::new(&source);
        prop_assert_eq!(lexer.next_token().token_type, TokenType::Integer(n));
        prop_assert_eq!(lexer.next_token().token_type, TokenType::EndOfInput);
    }

    #[test]
    fn surrounding_blanks_never_change_the_tokens(n in 0i64..1_000_000i64) {
        let bare: Vec<_> = Lexer::new(&format!("{n}+{n}")).map(|t| t.token_type).collect();
        let padded: Vec<_> = Lexer::new(&format!(" \t{n} + {n}\t \n"))
            .map(|t| t.token_type)
            .collect();
        prop_assert_eq!(bare, padded);
    }
}
