//! Lexical analysis module for the front end.
//!
//! This module contains the tokenizer that converts source text into a
//! stream of tokens for parsing. It handles:
//!
//! - On-demand tokenization with one-token lookahead (`peek`/`next`)
//! - Recognition of keywords, symbols, literals, and operators
//! - Raw substring scanning for comments, string bodies, and
//!   embedded-command bodies (`scan_until` and friends)
//! - Line tracking for error reporting

pub mod tokenizer;
pub mod tokens;

#[cfg(test)]
mod tests;
