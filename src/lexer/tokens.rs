use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("def", TokenKind::Def);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOS,
    Integer,
    Fractional,
    Symbol,

    LParen,
    RParen,
    LBrace,
    RBrace,

    At,     // @
    Dollar, // $
    Sharp,  // #
    Semicolon,
    Comma,
    Quote, // " delimiter only; string bodies are scanned separately

    Assignment, // =
    Equals,     // ==

    Plus,
    Minus,
    Star,
    Slash,

    // Reserved
    If,
    Def,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A single token. Tokens are plain values produced on demand by the
/// tokenizer and never mutated; `value` holds the lexeme (the literal
/// text for numbers and symbols, the punctuation itself otherwise).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Token {
        Token {
            kind,
            value: value.into(),
        }
    }

    /// The distinguished end-of-stream token.
    pub fn eos() -> Token {
        Token::new(TokenKind::EOS, "<eos>")
    }

    pub fn isa(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Integer | TokenKind::Fractional | TokenKind::Symbol => {
                write!(f, "{} ({})", self.kind, self.value)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}
