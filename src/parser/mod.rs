//! Parser module for building the IR tree.
//!
//! This module contains the recursive-descent parser that transforms
//! the token stream into IR. It handles:
//!
//! - Statement parsing (assignments, calls, if statements, blocks,
//!   extern calls, function definitions)
//! - Expression parsing with left-associative operator precedence
//! - Lexical scoping and variable-identity resolution through a stack
//!   of symbol tables
//! - Function hoisting onto the enclosing module

pub mod parser;
pub mod symbol_table;
