use crate::ast::Expression;
use crate::parser::Token;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;

/// `x = <expression>`
#[derive(Debug, PartialEq)]
pub struct Assign {
    pub identifier: Token,
    pub expression: Expression,
}

impl Assign {
    pub fn new(identifier: Token, expression: Expression) -> Self {
        Self {
            identifier,
            expression,
        }
    }
    pub fn name(&self) -> &str {
        &self.identifier.lexeme
    }
}

impl Display for Assign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.identifier.lexeme, self.expression)
    }
}

/// `var x`
#[derive(Clone, Debug, PartialEq)]
pub struct Declaration {
    pub identifier: Token,
}

impl Declaration {
    pub fn new(identifier: Token) -> Self {
        Self { identifier }
    }
    pub fn name(&self) -> &str {
        &self.identifier.lexeme
    }
}

impl Display for Declaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "var {}", self.identifier.lexeme)
    }
}

#[derive(Debug, PartialEq)]
pub enum Statement {
    Expression(Expression),
    Assign(Assign),
    Declaration(Declaration),
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Expression(expression) => write!(f, "{expression}"),
            Statement::Assign(assign) => write!(f, "{assign}"),
            Statement::Declaration(declaration) => write!(f, "{declaration}"),
        }
    }
}

struct Node {
    statement: Statement,
    next: Option<Box<Node>>,
}

/// Statements in source order.
///
/// Every node owns its statement and the rest of the list.
#[derive(Default)]
pub struct Statements {
    head: Option<Box<Node>>,
    len: usize,
}

impl Statements {
    pub fn new() -> Self {
        Self::default()
    }
    /// Put `statement` in front of `rest`.
    pub fn cons(statement: Statement, rest: Statements) -> Self {
        let mut rest = rest;
        let next = rest.head.take();
        let len = rest.len + 1;
        Self {
            head: Some(Box::new(Node { statement, next })),
            len,
        }
    }
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
    pub fn first(&self) -> Option<&Statement> {
        self.head.as_ref().map(|node| &node.statement)
    }
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl FromIterator<Statement> for Statements {
    fn from_iter<I: IntoIterator<Item = Statement>>(iter: I) -> Self {
        let statements = iter.into_iter().collect::<Vec<Statement>>();
        statements
            .into_iter()
            .rev()
            .fold(Statements::new(), |rest, statement| {
                Statements::cons(statement, rest)
            })
    }
}

impl PartialEq for Statements {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Debug for Statements {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Unlink the nodes one by one; the derived drop would recurse once per
// statement.
impl Drop for Statements {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Statement;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.statement
        })
    }
}

impl<'a> IntoIterator for &'a Statements {
    type Item = &'a Statement;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
