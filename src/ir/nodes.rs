//! The node variants that make up the syntax tree.
//!
//! These are plain data containers; the parser enforces every shape
//! invariant before a node is built, and downstream passes traverse the
//! tree by matching on the closed [`Stmt`]/[`Expr`] enums.
//!
//! Variable identity is carried by [`VarId`] indices into the owning
//! [`Module`]'s variable arena: two references to one binding hold the
//! same index, so identity is an integer comparison and the tree stays
//! uniquely owned.

use std::fmt::Display;

use super::types::Type;

/// Stable index of a [`Variable`] in its [`Module`]'s arena.
pub type VarId = usize;

/// A named variable, plus the type hint opportunistically attached when
/// the variable is assigned a literal. Stored once per binding in the
/// module arena; reference sites carry the [`VarId`].
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub ty: Type,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Variable {
        Variable {
            name: name.into(),
            ty: Type::Undefined,
        }
    }
}

/// The root of a parsed source file: the implicit `main` function
/// holding all top-level statements, the user-defined functions in
/// declaration order, and the variable arena every [`VarId`] in the
/// tree points into.
///
/// Function definitions are hoisted here; they never appear in any
/// block's own statement list.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub main: Function,
    pub functions: Vec<Function>,
    pub variables: Vec<Variable>,
}

impl Module {
    /// The variable behind a reference site.
    pub fn variable(&self, id: VarId) -> &Variable {
        &self.variables[id]
    }

    /// Look up a user-defined function by name.
    pub fn get_function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|f| f.name == name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub args: Vec<VarId>,
    pub body: Block,
}

/// An ordered sequence of statements; order is execution order.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assignment { variable: VarId, value: Expr },
    If { condition: Expr, body: Block },
    ExternCall { body: InterpolatedString },
    Block(Block),
    Expr(Expr),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOpKind {
    Negate,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Integer(i64),
    Fractional(f64),
    String(String),
    Var(VarId),
    BinOp {
        op: BinOpKind,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    UnaryOp {
        op: UnaryOpKind,
        operand: Box<Expr>,
    },
    /// Equality test; the grammar permits at most one per expression.
    Comparison {
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// The callee is resolved by name only; calls are not bound to a
    /// [`Function`] node at parse time.
    Call { name: String, args: Vec<Expr> },
}

/// The body of an embedded shell command: an ordered alternation of
/// literal text runs and variable interpolations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InterpolatedString {
    fragments: Vec<Fragment>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Str(String),
    Var(VarId),
}

impl InterpolatedString {
    pub fn new() -> InterpolatedString {
        InterpolatedString::default()
    }

    /// Append a literal text run. Empty runs (a `$var` abutting the
    /// closing delimiter or another interpolation) are dropped.
    pub fn push_str(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.is_empty() {
            self.fragments.push(Fragment::Str(s));
        }
    }

    pub fn push_var(&mut self, var: VarId) {
        self.fragments.push(Fragment::Var(var));
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }
}

impl Display for BinOpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinOpKind::Add => write!(f, "+"),
            BinOpKind::Sub => write!(f, "-"),
            BinOpKind::Mul => write!(f, "*"),
            BinOpKind::Div => write!(f, "/"),
        }
    }
}
