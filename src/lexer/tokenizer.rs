use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    static ref NUMBER_RE: Regex = Regex::new("^[0-9]+(\\.[0-9]+)?").unwrap();
    static ref SYMBOL_RE: Regex = Regex::new("^[a-zA-Z0-9]+").unwrap();
}

/// The Shale tokenizer. Given the source text, use the `peek()` and
/// `next()` methods to produce a stream of tokens.
///
/// Tokens are formed on demand; nothing is buffered beyond the current
/// index, which is what lets the `scan_until` family capture raw
/// substrings from contexts that are not uniformly tokenizable
/// (comments, string bodies, embedded-command bodies).
pub struct Tokenizer {
    text: String,
    idx: usize,
    lineno: u32,
    file: Rc<String>,
}

impl Tokenizer {
    pub fn new(text: String, file: Rc<String>) -> Tokenizer {
        Tokenizer {
            text,
            idx: 0,
            lineno: 1,
            file,
        }
    }

    /// Return the token at the head of the stream, but do not skip it.
    ///
    /// Leading whitespace is consumed (and newlines counted) even on a
    /// peek; the token itself stays at the head of the stream.
    pub fn peek(&mut self) -> Result<Token, Error> {
        let (token, _) = self.get_token()?;
        Ok(token)
    }

    /// Consume and return the token at the head of the stream. At end of
    /// input this keeps returning the end-of-stream token.
    pub fn next(&mut self) -> Result<Token, Error> {
        let (token, end) = self.get_token()?;
        self.idx = end;
        Ok(token)
    }

    /// Return the raw substring beginning at the current index and
    /// continuing until the first occurrence of a token of kind `kind`,
    /// or end of input.
    pub fn scan_until(&mut self, kind: TokenKind) -> String {
        self.scan_until_kinds(&[kind])
    }

    /// Return the raw substring beginning at the current index and
    /// continuing until the first occurrence of a token of kind `a` or
    /// kind `b`, or end of input.
    pub fn scan_until_either(&mut self, a: TokenKind, b: TokenKind) -> String {
        self.scan_until_kinds(&[a, b])
    }

    /// Return the raw substring beginning at the current index and
    /// continuing until the first occurrence of the given character,
    /// bounded at end of input. An unterminated construct therefore runs
    /// to the end of the text and the caller's next `expect` reports it.
    pub fn scan_until_char(&mut self, c: char) -> String {
        let start = self.idx;
        while !self.eos() && self.curchar() != c {
            self.bump_char();
        }
        self.text[start..self.idx].to_string()
    }

    /// The current position in the source, for diagnostics.
    pub fn position(&self) -> Position {
        Position(self.lineno, Rc::clone(&self.file))
    }

    fn scan_until_kinds(&mut self, kinds: &[TokenKind]) -> String {
        let start = self.idx;
        loop {
            match self.get_token() {
                Ok((token, end)) => {
                    if token.isa(TokenKind::EOS) || kinds.contains(&token.kind) {
                        break;
                    }
                    self.idx = end;
                }
                // Not a token: raw text inside the scanned body. Capture
                // the character verbatim and keep going.
                Err(_) => self.bump_char(),
            }
        }
        self.text[start..self.idx].to_string()
    }

    // Return the current character, or NUL at end of input.
    fn curchar(&self) -> char {
        self.text[self.idx..].chars().next().unwrap_or('\0')
    }

    fn nextchar(&self) -> char {
        self.text[self.idx..].chars().nth(1).unwrap_or('\0')
    }

    // Return true if the tokenizer is at end of input.
    fn eos(&self) -> bool {
        self.idx >= self.text.len()
    }

    // Advance past a single character, counting newlines.
    fn bump_char(&mut self) {
        if let Some(c) = self.text[self.idx..].chars().next() {
            if c == '\n' {
                self.lineno += 1;
            }
            self.idx += c.len_utf8();
        }
    }

    // Skip ahead until the next non-whitespace character.
    fn skip_whitespace(&mut self) {
        while !self.eos() {
            match self.curchar() {
                '\n' => {
                    self.lineno += 1;
                    self.idx += 1;
                }
                ' ' | '\t' => self.idx += 1,
                _ => break,
            }
        }
    }

    // Form the next token. The result is `(token, end)` where `end` is
    // the index just past the token; the stream head is left in place so
    // `peek` and `next` share one implementation.
    fn get_token(&mut self) -> Result<(Token, usize), Error> {
        self.skip_whitespace();
        if self.eos() {
            return Ok((Token::eos(), self.idx));
        }

        let c = self.curchar();
        match c {
            '(' => Ok(self.single(TokenKind::LParen, c)),
            ')' => Ok(self.single(TokenKind::RParen, c)),
            '{' => Ok(self.single(TokenKind::LBrace, c)),
            '}' => Ok(self.single(TokenKind::RBrace, c)),
            '@' => Ok(self.single(TokenKind::At, c)),
            '$' => Ok(self.single(TokenKind::Dollar, c)),
            '#' => Ok(self.single(TokenKind::Sharp, c)),
            ';' => Ok(self.single(TokenKind::Semicolon, c)),
            ',' => Ok(self.single(TokenKind::Comma, c)),
            '"' => Ok(self.single(TokenKind::Quote, c)),
            '=' => {
                if self.nextchar() == '=' {
                    Ok((Token::new(TokenKind::Equals, "=="), self.idx + 2))
                } else {
                    Ok(self.single(TokenKind::Assignment, c))
                }
            }
            '+' => Ok(self.single(TokenKind::Plus, c)),
            '-' => Ok(self.single(TokenKind::Minus, c)),
            '*' => Ok(self.single(TokenKind::Star, c)),
            '/' => Ok(self.single(TokenKind::Slash, c)),
            _ if c.is_ascii_digit() => Ok(self.read_number()),
            _ if c.is_ascii_alphanumeric() => Ok(self.read_symbol()),
            _ => Err(Error::new(
                ErrorImpl::UnrecognisedCharacter { character: c },
                self.position(),
            )),
        }
    }

    fn single(&self, kind: TokenKind, c: char) -> (Token, usize) {
        (Token::new(kind, c.to_string()), self.idx + 1)
    }

    // Read a multi-digit (and possibly fractional) number token. The
    // fractional form requires digits on both sides of the point; a
    // trailing bare `.` is left for the next call to reject.
    fn read_number(&self) -> (Token, usize) {
        let lexeme = NUMBER_RE
            .find(&self.text[self.idx..])
            .map(|m| m.as_str())
            .unwrap_or("");
        let kind = if lexeme.contains('.') {
            TokenKind::Fractional
        } else {
            TokenKind::Integer
        };
        (Token::new(kind, lexeme), self.idx + lexeme.len())
    }

    // Read a run of alphanumeric characters, checking for reserved
    // keywords.
    fn read_symbol(&self) -> (Token, usize) {
        let lexeme = SYMBOL_RE
            .find(&self.text[self.idx..])
            .map(|m| m.as_str())
            .unwrap_or("");
        let token = match RESERVED_LOOKUP.get(lexeme) {
            Some(kind) => Token::new(*kind, lexeme),
            None => Token::new(TokenKind::Symbol, lexeme),
        };
        (token, self.idx + lexeme.len())
    }
}
