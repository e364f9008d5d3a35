//! IR (intermediate representation) module.
//!
//! Contains the syntax-tree node model the parser builds and later
//! compilation stages consume.
//!
//! Submodules:
//! - nodes: module/function/block/statement/expression variants and
//!   the variable arena
//! - types: literal type hints

pub mod nodes;
pub mod types;
