//! Recursive-descent parser building the IR tree.
//!
//! The parser pulls tokens from the tokenizer one at a time and has
//! one method per grammar production. Beside the token stream it
//! maintains two stacks:
//!
//! - a module stack for the module currently being built (function
//!   definitions are hoisted onto it from any nesting depth)
//! - a scope stack with one symbol table per open block or function
//!   body, driving variable-identity resolution
//!
//! Every failure is fatal to the parse: the first error is returned as
//! a value and no partial module is ever produced.

use std::{fs, path::Path, rc::Rc};

use crate::{
    errors::errors::{Error, ErrorImpl},
    ir::{
        nodes::{
            BinOpKind, Block, Expr, Function, InterpolatedString, Module, Stmt, UnaryOpKind,
            VarId, Variable,
        },
        types::{infer_literal_type, Type},
    },
    lexer::{
        tokenizer::Tokenizer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::symbol_table::{lookup_chain, SymbolTable};

/// Parse the file at the given path into IR.
///
/// Fails with an I/O error if the path cannot be read, or with a syntax
/// error on any grammar violation.
pub fn parse(path: impl AsRef<Path>) -> Result<Module, Error> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        Error::new(
            ErrorImpl::FileRead {
                path: path.display().to_string(),
                message: e.to_string(),
            },
            Position::null(),
        )
    })?;
    let file = match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    };
    parse_source(&text, Rc::new(file))
}

/// Parse raw source text into IR.
pub fn parse_string(text: &str) -> Result<Module, Error> {
    parse_source(text, Rc::new(String::from("<string>")))
}

fn parse_source(text: &str, file: Rc<String>) -> Result<Module, Error> {
    // Insert a dummy block so the document root behaves as one implicit
    // top-level block scope. The closing brace goes on its own line so a
    // comment on the last input line cannot swallow it.
    let wrapped = format!("{{{}\n}}", text);
    let mut parser = Parser::new(Tokenizer::new(wrapped, file));
    let module = parser.module()?;
    parser.expect(TokenKind::EOS, "Expected end of input")?;
    Ok(module)
}

/// The in-progress image of a module: its hoisted functions and the
/// variable arena its scopes allocate from. Finalized into a [`Module`]
/// when the root block closes.
#[derive(Default)]
struct ModuleBuilder {
    functions: Vec<Function>,
    variables: Vec<Variable>,
}

struct Parser {
    tokenizer: Tokenizer,
    module_stack: Vec<ModuleBuilder>,
    scope_stack: Vec<SymbolTable>,
}

impl Parser {
    fn new(tokenizer: Tokenizer) -> Parser {
        Parser {
            tokenizer,
            module_stack: vec![],
            scope_stack: vec![],
        }
    }

    // The module currently being built. module() pushes before any
    // statement parsing starts, so the stack is never empty here.
    fn current_module(&mut self) -> &mut ModuleBuilder {
        self.module_stack.last_mut().expect("module stack is empty")
    }

    // The innermost open scope. block() and functiondef() push before
    // anything that resolves names.
    fn current_scope(&mut self) -> &mut SymbolTable {
        self.scope_stack.last_mut().expect("scope stack is empty")
    }

    fn syntax_error(&self, token: &Token, message: &str) -> Error {
        Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
                message: message.to_string(),
            },
            self.tokenizer.position(),
        )
    }

    /// Assert that the next token is of the given kind and consume it;
    /// otherwise fail with the given message at the current position.
    fn expect(&mut self, kind: TokenKind, message: &str) -> Result<Token, Error> {
        let t = self.tokenizer.peek()?;
        if !t.isa(kind) {
            return Err(self.syntax_error(&t, message));
        }
        self.tokenizer.next()
    }

    fn module(&mut self) -> Result<Module, Error> {
        self.module_stack.push(ModuleBuilder::default());
        // The implicit main function holds all top-level statements.
        let body = self.block()?;
        let builder = self.module_stack.pop().expect("module stack is empty");
        Ok(Module {
            main: Function {
                name: String::from("main"),
                args: vec![],
                body,
            },
            functions: builder.functions,
            variables: builder.variables,
        })
    }

    /// block := '{' stmt* '}' — opens its own scope, discarded when the
    /// block finishes parsing.
    fn block(&mut self) -> Result<Block, Error> {
        self.scope_stack.push(SymbolTable::new());
        self.expect(TokenKind::LBrace, "Expected block to begin with '{'")?;
        let mut statements = vec![];
        loop {
            let t = self.tokenizer.peek()?;
            match t.kind {
                TokenKind::RBrace | TokenKind::EOS => break,
                // '#' comments run to end of line.
                TokenKind::Sharp => {
                    self.tokenizer.scan_until_char('\n');
                }
                _ => {
                    // Function definitions are hoisted and yield no
                    // statement here.
                    if let Some(stmt) = self.stmt()? {
                        statements.push(stmt);
                    }
                }
            }
        }
        self.expect(TokenKind::RBrace, "Expected block to end with '}'")?;
        self.scope_stack.pop();
        Ok(Block { statements })
    }

    fn stmt(&mut self) -> Result<Option<Stmt>, Error> {
        let t = self.tokenizer.peek()?;
        match t.kind {
            TokenKind::LBrace => Ok(Some(Stmt::Block(self.block()?))),
            TokenKind::At => Ok(Some(self.externcall()?)),
            TokenKind::If => Ok(Some(self.ifstmt()?)),
            TokenKind::Def => {
                let function = self.functiondef()?;
                self.current_module().functions.push(function);
                Ok(None)
            }
            _ => Ok(Some(self.otherstmt()?)),
        }
    }

    // An assignment, a function call, or a bare variable reference,
    // terminated by ';'.
    fn otherstmt(&mut self) -> Result<Stmt, Error> {
        let name = self.symbol()?;
        let t = self.tokenizer.peek()?;
        let stmt = match t.kind {
            TokenKind::Assignment => self.assignment(name)?,
            TokenKind::LParen => self.funcall(name)?,
            TokenKind::Semicolon => Stmt::Expr(Expr::Var(self.lookup_or_new_var(&name))),
            _ => return Err(self.syntax_error(&t, "Unexpected token in statement")),
        };
        self.expect(TokenKind::Semicolon, "Expected statement to end with ';'")?;
        Ok(stmt)
    }

    /// externcall := '@' '(' body ')' ';' — the body alternates literal
    /// text runs (captured verbatim) and `$`-prefixed interpolations.
    fn externcall(&mut self) -> Result<Stmt, Error> {
        self.expect(TokenKind::At, "Expected '@' to begin extern call")?;
        self.expect(TokenKind::LParen, "Expected opening '('")?;
        let mut body = InterpolatedString::new();
        loop {
            let text = self
                .tokenizer
                .scan_until_either(TokenKind::Dollar, TokenKind::RParen);
            body.push_str(text);
            if self.tokenizer.peek()?.isa(TokenKind::Dollar) {
                self.tokenizer.next()?;
                let var = self.var()?;
                body.push_var(var);
            } else {
                break;
            }
        }
        self.expect(TokenKind::RParen, "Expected closing ')'")?;
        self.expect(TokenKind::Semicolon, "Expected statement to end with ';'")?;
        Ok(Stmt::ExternCall { body })
    }

    /// ifstmt := 'if' '(' expr ')' block — single-arm, no else.
    fn ifstmt(&mut self) -> Result<Stmt, Error> {
        self.expect(TokenKind::If, "Expected if statement")?;
        self.expect(TokenKind::LParen, "Expected opening '('")?;
        let condition = self.expr()?;
        self.expect(TokenKind::RParen, "Expected closing ')'")?;
        let body = self.block()?;
        Ok(Stmt::If { condition, body })
    }

    /// functiondef := 'def' symbol '(' params? ')' block — registered on
    /// the enclosing module, never inlined into the surrounding block.
    fn functiondef(&mut self) -> Result<Function, Error> {
        self.expect(TokenKind::Def, "Expected def statement")?;
        let name = self.symbol()?;
        self.expect(TokenKind::LParen, "Expected opening '('")?;
        self.scope_stack.push(SymbolTable::new());
        let mut args = vec![];
        if !self.tokenizer.peek()?.isa(TokenKind::RParen) {
            args.push(self.arg()?);
            while self.tokenizer.peek()?.isa(TokenKind::Comma) {
                self.tokenizer.next()?;
                args.push(self.arg()?);
            }
        }
        self.expect(TokenKind::RParen, "Expected closing ')'")?;
        let body = self.block()?;
        self.scope_stack.pop();
        Ok(Function { name, args, body })
    }

    // Call arguments are restricted to atoms, not full expressions.
    fn funcall(&mut self, name: String) -> Result<Stmt, Error> {
        self.expect(TokenKind::LParen, "Expected opening '('")?;
        let mut args = vec![];
        if !self.tokenizer.peek()?.isa(TokenKind::RParen) {
            args.push(self.atom()?);
            while self.tokenizer.peek()?.isa(TokenKind::Comma) {
                self.tokenizer.next()?;
                args.push(self.atom()?);
            }
        }
        self.expect(TokenKind::RParen, "Expected closing ')'")?;
        Ok(Stmt::Expr(Expr::Call { name, args }))
    }

    fn assignment(&mut self, name: String) -> Result<Stmt, Error> {
        self.expect(TokenKind::Assignment, "Expected assignment operator")?;
        // Resolve the target before the right-hand side so `a = a + 1`
        // sees one binding for both occurrences.
        let variable = self.lookup_or_new_var(&name);
        let value = self.expr()?;
        let ty = infer_literal_type(&value);
        if ty != Type::Undefined {
            self.current_module().variables[variable].ty = ty;
            self.current_scope().insert(name, variable, ty);
        }
        Ok(Stmt::Assignment { variable, value })
    }

    fn var(&mut self) -> Result<VarId, Error> {
        let t = self.expect(TokenKind::Symbol, "Expected variable to be a symbol")?;
        Ok(self.lookup_or_new_var(&t.value))
    }

    // Like var(), but a parameter always creates a fresh binding in the
    // function's own scope, shadowing any outer variable of that name.
    fn arg(&mut self) -> Result<VarId, Error> {
        let t = self.expect(TokenKind::Symbol, "Expected argument to be a symbol")?;
        let id = self.new_variable(&t.value);
        self.current_scope().insert(t.value, id, Type::Undefined);
        Ok(id)
    }

    /// expr := arith ('==' arith)? — equality applies at most once; a
    /// second '==' is rejected with a dedicated diagnostic.
    fn expr(&mut self) -> Result<Expr, Error> {
        let a = self.arith()?;
        if self.tokenizer.peek()?.isa(TokenKind::Equals) {
            self.tokenizer.next()?;
            let b = self.arith()?;
            if self.tokenizer.peek()?.isa(TokenKind::Equals) {
                return Err(Error::new(
                    ErrorImpl::ChainedComparison,
                    self.tokenizer.position(),
                ));
            }
            return Ok(Expr::Comparison {
                left: Box::new(a),
                right: Box::new(b),
            });
        }
        Ok(a)
    }

    /// arith := term (('+'|'-') term)* — left-associative.
    fn arith(&mut self) -> Result<Expr, Error> {
        let mut a = self.term()?;
        let mut t = self.tokenizer.peek()?;
        while t.isa(TokenKind::Plus) || t.isa(TokenKind::Minus) {
            self.tokenizer.next()?;
            let op = self.get_binop_operator(&t)?;
            let right = self.term()?;
            a = Expr::BinOp {
                op,
                left: Box::new(a),
                right: Box::new(right),
            };
            t = self.tokenizer.peek()?;
        }
        Ok(a)
    }

    /// term := unary (('*'|'/') unary)* — left-associative.
    fn term(&mut self) -> Result<Expr, Error> {
        let mut a = self.unary()?;
        let mut t = self.tokenizer.peek()?;
        while t.isa(TokenKind::Star) || t.isa(TokenKind::Slash) {
            self.tokenizer.next()?;
            let op = self.get_binop_operator(&t)?;
            let right = self.unary()?;
            a = Expr::BinOp {
                op,
                left: Box::new(a),
                right: Box::new(right),
            };
            t = self.tokenizer.peek()?;
        }
        Ok(a)
    }

    fn unary(&mut self) -> Result<Expr, Error> {
        if self.tokenizer.peek()?.isa(TokenKind::Minus) {
            self.tokenizer.next()?;
            let operand = self.factor()?;
            return Ok(Expr::UnaryOp {
                op: UnaryOpKind::Negate,
                operand: Box::new(operand),
            });
        }
        self.factor()
    }

    fn factor(&mut self) -> Result<Expr, Error> {
        if self.tokenizer.peek()?.isa(TokenKind::LParen) {
            self.tokenizer.next()?;
            let e = self.expr()?;
            self.expect(TokenKind::RParen, "Unmatched '('")?;
            return Ok(e);
        }
        self.atom()
    }

    /// atom := symbol | integer | fractional | '"' text '"' — the string
    /// body is captured verbatim via scan_until, not tokenized.
    fn atom(&mut self) -> Result<Expr, Error> {
        let t = self.tokenizer.peek()?;
        match t.kind {
            TokenKind::Symbol => {
                self.tokenizer.next()?;
                Ok(Expr::Var(self.lookup_or_new_var(&t.value)))
            }
            TokenKind::Integer => {
                self.tokenizer.next()?;
                let value = t.value.parse::<i64>().map_err(|_| {
                    Error::new(
                        ErrorImpl::NumberParseError {
                            token: t.value.clone(),
                        },
                        self.tokenizer.position(),
                    )
                })?;
                Ok(Expr::Integer(value))
            }
            TokenKind::Fractional => {
                self.tokenizer.next()?;
                let value = t.value.parse::<f64>().map_err(|_| {
                    Error::new(
                        ErrorImpl::NumberParseError {
                            token: t.value.clone(),
                        },
                        self.tokenizer.position(),
                    )
                })?;
                Ok(Expr::Fractional(value))
            }
            TokenKind::Quote => {
                self.tokenizer.next()?;
                let text = self.tokenizer.scan_until(TokenKind::Quote);
                self.expect(TokenKind::Quote, "Unmatched '\"'")?;
                Ok(Expr::String(text))
            }
            _ => Err(self.syntax_error(&t, "Invalid token type for atom")),
        }
    }

    fn symbol(&mut self) -> Result<String, Error> {
        let t = self.expect(TokenKind::Symbol, "Expected symbol")?;
        Ok(t.value)
    }

    // Resolve a name through the scope chain, creating the variable in
    // the innermost scope on first occurrence.
    fn lookup_or_new_var(&mut self, name: &str) -> VarId {
        if let Some(entry) = lookup_chain(&self.scope_stack, name) {
            return entry.variable;
        }
        let id = self.new_variable(name);
        self.current_scope().insert(name, id, Type::Undefined);
        id
    }

    fn new_variable(&mut self, name: &str) -> VarId {
        let module = self.current_module();
        let id = module.variables.len();
        module.variables.push(Variable::new(name));
        id
    }

    fn get_binop_operator(&self, t: &Token) -> Result<BinOpKind, Error> {
        match t.kind {
            TokenKind::Plus => Ok(BinOpKind::Add),
            TokenKind::Minus => Ok(BinOpKind::Sub),
            TokenKind::Star => Ok(BinOpKind::Mul),
            TokenKind::Slash => Ok(BinOpKind::Div),
            _ => Err(self.syntax_error(t, "Invalid operator for binary operation")),
        }
    }
}
