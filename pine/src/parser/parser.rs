use crate::ast::Assign;
use crate::ast::Declaration;
use crate::ast::Expression;
use crate::ast::Literal;
use crate::ast::Lvalue;
use crate::ast::Module;
use crate::ast::Operation;
use crate::ast::OperationKind;
use crate::ast::Program;
use crate::ast::Statement;
use crate::ast::Statements;
use crate::parser::error::SyntaxError;
use crate::parser::scanner::Scanner;
use crate::parser::token::Token;
use crate::parser::token::TokenKind;
use anyhow::Result;
use tracing::debug;
use tracing::trace;

/// Tokens that can begin a statement, plus the `}` that ends the list.
const STATEMENT_START: &[TokenKind] = &[
    TokenKind::KwVar,
    TokenKind::Identifier,
    TokenKind::Number,
    TokenKind::RBrace,
];

/// Tokens that can follow a complete expression inside a statement.
const EXPRESSION_END: &[TokenKind] = &[TokenKind::Semicolon, TokenKind::Plus, TokenKind::Minus];

const TERM: &[TokenKind] = &[TokenKind::Number, TokenKind::Identifier];

/// Recursive descent parser for pine modules.
///
/// The parser owns its [Scanner] and pulls tokens from it on demand. Each
/// grammar rule is one method that consumes exactly the tokens of that rule.
pub struct Parser {
    scanner: Scanner,
}

impl Parser {
    pub fn new(src: &str) -> Self {
        Parser {
            scanner: Scanner::new(src),
        }
    }
    /// Parse `src` as a single module.
    pub fn parse(src: &str) -> Result<Module> {
        let mut parser = Parser::new(src);
        parser.parse_module()
    }
    pub fn peek(&mut self) -> Result<&Token> {
        self.scanner.peek_token()
    }
    pub fn advance(&mut self) -> Result<Token> {
        self.scanner.next_token()
    }
    pub fn check(&mut self, kind: TokenKind) -> Result<bool> {
        Ok(self.peek()?.kind == kind)
    }
    /// Fail on the current token, which is left unconsumed.
    pub fn report_token_error<T>(&mut self, expected: &[TokenKind]) -> Result<T> {
        let found = self.peek()?.clone();
        Err(anyhow::Error::new(SyntaxError::new(expected, found)))
    }
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.check(kind)? {
            self.advance()
        } else {
            self.report_token_error(&[kind])
        }
    }
    /// `module <identifier> { <program> }` followed by the end of the input.
    pub fn parse_module(&mut self) -> Result<Module> {
        self.expect(TokenKind::KwModule)?;
        let identifier = self.expect(TokenKind::Identifier)?;
        self.expect(TokenKind::LBrace)?;
        let program = self.parse_program()?;
        self.expect(TokenKind::RBrace)?;
        self.expect(TokenKind::Eof)?;
        let module = Module::new(identifier, program);
        debug!(
            "parsed module {} with {} statements",
            module.name(),
            module.statements().len()
        );
        Ok(module)
    }
    fn parse_program(&mut self) -> Result<Program> {
        let statements = self.parse_statements()?;
        Ok(Program::new(statements))
    }
    // The list is empty when the next token is the closing brace.
    fn parse_statements(&mut self) -> Result<Statements> {
        let mut statements = vec![];
        while !self.check(TokenKind::RBrace)? {
            let statement = self.parse_statement()?;
            let end: &[TokenKind] = match statement {
                Statement::Declaration(_) => &[TokenKind::Semicolon],
                _ => EXPRESSION_END,
            };
            if !self.check(TokenKind::Semicolon)? {
                return self.report_token_error(end);
            }
            self.advance()?;
            statements.push(statement);
        }
        Ok(statements.into_iter().collect())
    }
    fn parse_statement(&mut self) -> Result<Statement> {
        let kind = self.peek()?.kind;
        let statement = match kind {
            TokenKind::KwVar => Statement::Declaration(self.parse_declaration()?),
            TokenKind::Identifier | TokenKind::Number => {
                if self.is_assign()? {
                    Statement::Assign(self.parse_assign()?)
                } else {
                    Statement::Expression(self.parse_expression()?)
                }
            }
            _ => return self.report_token_error(STATEMENT_START),
        };
        trace!("parsed statement `{statement}`");
        Ok(statement)
    }
    /// Whether the statement at the cursor is `<identifier> = ...`.
    ///
    /// Looks at the first two tokens only and consumes nothing.
    fn is_assign(&mut self) -> Result<bool> {
        if !self.check(TokenKind::Identifier)? {
            return Ok(false);
        }
        Ok(self.scanner.peek_nth(1)?.kind == TokenKind::Equal)
    }
    fn parse_declaration(&mut self) -> Result<Declaration> {
        self.expect(TokenKind::KwVar)?;
        let identifier = self.expect(TokenKind::Identifier)?;
        Ok(Declaration::new(identifier))
    }
    fn parse_assign(&mut self) -> Result<Assign> {
        let identifier = self.expect(TokenKind::Identifier)?;
        self.expect(TokenKind::Equal)?;
        let expression = self.parse_expression()?;
        Ok(Assign::new(identifier, expression))
    }
    /// Parse `a + b - c` into a left-leaning tree.
    ///
    /// Each new operator takes the expression built so far as its `lhs`.
    pub fn parse_expression(&mut self) -> Result<Expression> {
        let mut expression = self.parse_term()?;
        loop {
            let kind = match self.peek()?.kind {
                TokenKind::Plus => OperationKind::Add,
                TokenKind::Minus => OperationKind::Sub,
                _ => break,
            };
            self.advance()?;
            let rhs = self.parse_term()?;
            expression = Expression::Operation(Operation::new(kind, expression, rhs));
        }
        Ok(expression)
    }
    fn parse_term(&mut self) -> Result<Expression> {
        match self.peek()?.kind {
            TokenKind::Number => Ok(Expression::Literal(Literal::new(self.advance()?))),
            TokenKind::Identifier => Ok(Expression::Lvalue(Lvalue::new(self.advance()?))),
            _ => self.report_token_error(TERM),
        }
    }
}
