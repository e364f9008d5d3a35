//! Type hints for variables.
//!
//! This is not a type system: a hint is attached to a variable only
//! when it is the direct target of an assignment whose right-hand side
//! is a literal. Everything else stays [`Type::Undefined`] and later
//! passes are free to refine it.

use std::fmt::Display;

use super::nodes::Expr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Undefined,
    Integer,
    Fractional,
    String,
    Boolean,
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Undefined => write!(f, "undefined"),
            Type::Integer => write!(f, "integer"),
            Type::Fractional => write!(f, "fractional"),
            Type::String => write!(f, "string"),
            Type::Boolean => write!(f, "boolean"),
        }
    }
}

/// The type for a literal expression, or [`Type::Undefined`] for any
/// non-literal (including whole literal-only arithmetic, which is left
/// to later passes).
pub fn infer_literal_type(expr: &Expr) -> Type {
    match expr {
        Expr::Integer(_) => Type::Integer,
        Expr::Fractional(_) => Type::Fractional,
        Expr::String(_) => Type::String,
        Expr::Var(_)
        | Expr::BinOp { .. }
        | Expr::UnaryOp { .. }
        | Expr::Comparison { .. }
        | Expr::Call { .. } => Type::Undefined,
    }
}
