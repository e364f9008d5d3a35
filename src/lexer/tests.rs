//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Operators and punctuation
//! - Numeric literals (integer and fractional)
//! - Symbols and reserved keywords
//! - The scan_until raw-capture primitives
//! - Line counting and end-of-stream behavior

use std::rc::Rc;

use super::{
    tokenizer::Tokenizer,
    tokens::{Token, TokenKind},
};

fn tokenizer(source: &str) -> Tokenizer {
    Tokenizer::new(source.to_string(), Rc::new("test.shl".to_string()))
}

fn kinds(source: &str) -> Vec<TokenKind> {
    let mut t = tokenizer(source);
    let mut result = vec![];
    loop {
        let token = t.next().unwrap();
        let kind = token.kind;
        result.push(kind);
        if kind == TokenKind::EOS {
            break;
        }
    }
    result
}

#[test]
fn test_tokenize_expression() {
    assert_eq!(
        kinds("a+b*c"),
        vec![
            TokenKind::Symbol,
            TokenKind::Plus,
            TokenKind::Symbol,
            TokenKind::Star,
            TokenKind::Symbol,
            TokenKind::EOS,
        ]
    );
}

#[test]
fn test_tokenize_keywords() {
    let mut t = tokenizer("if def ifdef");
    assert_eq!(t.next().unwrap().kind, TokenKind::If);
    assert_eq!(t.next().unwrap().kind, TokenKind::Def);

    // A keyword prefix does not make a symbol reserved.
    let token = t.next().unwrap();
    assert_eq!(token.kind, TokenKind::Symbol);
    assert_eq!(token.value, "ifdef");
}

#[test]
fn test_tokenize_numbers() {
    let mut t = tokenizer("42 3.14 0");

    let token = t.next().unwrap();
    assert_eq!(token.kind, TokenKind::Integer);
    assert_eq!(token.value, "42");

    let token = t.next().unwrap();
    assert_eq!(token.kind, TokenKind::Fractional);
    assert_eq!(token.value, "3.14");

    let token = t.next().unwrap();
    assert_eq!(token.kind, TokenKind::Integer);
    assert_eq!(token.value, "0");

    assert_eq!(t.next().unwrap().kind, TokenKind::EOS);
}

#[test]
fn test_tokenize_trailing_point_is_not_fractional() {
    let mut t = tokenizer("1.");
    let token = t.next().unwrap();
    assert_eq!(token.kind, TokenKind::Integer);
    assert_eq!(token.value, "1");

    // The dangling point is not part of any token.
    assert!(t.next().is_err());
}

#[test]
fn test_tokenize_single_characters() {
    assert_eq!(
        kinds("( ) { } @ $ # ; , \""),
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::At,
            TokenKind::Dollar,
            TokenKind::Sharp,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::Quote,
            TokenKind::EOS,
        ]
    );
}

#[test]
fn test_tokenize_equals_vs_assignment() {
    assert_eq!(
        kinds("= == ="),
        vec![
            TokenKind::Assignment,
            TokenKind::Equals,
            TokenKind::Assignment,
            TokenKind::EOS,
        ]
    );
}

#[test]
fn test_peek_does_not_consume() {
    let mut t = tokenizer("a b");
    assert_eq!(t.peek().unwrap().value, "a");
    assert_eq!(t.peek().unwrap().value, "a");
    assert_eq!(t.next().unwrap().value, "a");
    assert_eq!(t.next().unwrap().value, "b");
}

#[test]
fn test_eos_is_idempotent() {
    let mut t = tokenizer("");
    assert_eq!(t.peek().unwrap(), Token::eos());
    assert_eq!(t.next().unwrap(), Token::eos());
    assert_eq!(t.next().unwrap(), Token::eos());
    assert_eq!(t.peek().unwrap(), Token::eos());
}

#[test]
fn test_unrecognised_character() {
    let mut t = tokenizer("%");
    let error = t.next().unwrap_err();
    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
}

#[test]
fn test_line_counting() {
    let mut t = tokenizer("a\nb\n\nc");
    t.next().unwrap();
    assert_eq!(t.position().0, 1);
    t.next().unwrap();
    assert_eq!(t.position().0, 2);
    t.next().unwrap();
    assert_eq!(t.position().0, 4);
}

#[test]
fn test_scan_until_char() {
    let mut t = tokenizer("hello world\nrest");
    assert_eq!(t.scan_until_char('\n'), "hello world");
}

#[test]
fn test_scan_until_char_bounded_at_end_of_input() {
    let mut t = tokenizer("no newline here");
    assert_eq!(t.scan_until_char('\n'), "no newline here");
    assert_eq!(t.next().unwrap().kind, TokenKind::EOS);
}

#[test]
fn test_scan_until_token() {
    let mut t = tokenizer("abc def\"tail");
    assert_eq!(t.scan_until(TokenKind::Quote), "abc def");
    assert_eq!(t.next().unwrap().kind, TokenKind::Quote);
}

#[test]
fn test_scan_until_keeps_interior_whitespace() {
    let mut t = tokenizer(" padded \"x");
    assert_eq!(t.scan_until(TokenKind::Quote), " padded ");
}

#[test]
fn test_scan_until_either() {
    let mut t = tokenizer("echo $x");
    assert_eq!(
        t.scan_until_either(TokenKind::Dollar, TokenKind::RParen),
        "echo "
    );
    assert_eq!(t.next().unwrap().kind, TokenKind::Dollar);
}

#[test]
fn test_scan_until_captures_untokenizable_text() {
    // Raw bodies may contain characters that are not tokens.
    let mut t = tokenizer("ls -l | grep x$v");
    assert_eq!(
        t.scan_until_either(TokenKind::Dollar, TokenKind::RParen),
        "ls -l | grep x"
    );
}

#[test]
fn test_scan_until_bounded_at_end_of_input() {
    let mut t = tokenizer("never closed");
    assert_eq!(t.scan_until(TokenKind::Quote), "never closed");
    assert_eq!(t.next().unwrap().kind, TokenKind::EOS);
}
