use crate::parser::Location;
use crate::parser::Token;
use crate::parser::TokenKind;
use std::fmt::Display;
use std::fmt::Formatter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    Add,
    Sub,
}

impl OperationKind {
    pub fn symbol(&self) -> &'static str {
        match self {
            OperationKind::Add => "+",
            OperationKind::Sub => "-",
        }
    }
}

/// A binary `+` or `-`.
///
/// Chains are left-associative, so in `a - b - c` the `lhs` of the outer
/// operation is `a - b`. A long chain is a deep left spine, so dropping,
/// comparing and printing walk it with loops instead of recursion.
#[derive(Debug, PartialEq)]
pub struct Operation {
    pub kind: OperationKind,
    pub lhs: Box<Expression>,
    pub rhs: Box<Expression>,
}

impl Operation {
    pub fn new(kind: OperationKind, lhs: Expression, rhs: Expression) -> Self {
        Self {
            kind,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
    pub fn add(lhs: Expression, rhs: Expression) -> Self {
        Self::new(OperationKind::Add, lhs, rhs)
    }
    pub fn sub(lhs: Expression, rhs: Expression) -> Self {
        Self::new(OperationKind::Sub, lhs, rhs)
    }
    fn has_nested_operation(&self) -> bool {
        matches!(*self.lhs, Expression::Operation(_))
            || matches!(*self.rhs, Expression::Operation(_))
    }
}

// Swap a leaf into the box and hand back what was there.
fn take(expression: &mut Expression) -> Expression {
    let token = Token::new(TokenKind::Eof, String::new(), Location::new(0, 0, 0));
    std::mem::replace(expression, Expression::Literal(Literal::new(token)))
}

impl Drop for Operation {
    fn drop(&mut self) {
        if !self.has_nested_operation() {
            return;
        }
        let mut pending = vec![take(&mut self.lhs), take(&mut self.rhs)];
        while let Some(expression) = pending.pop() {
            if let Expression::Operation(mut operation) = expression {
                pending.push(take(&mut operation.lhs));
                pending.push(take(&mut operation.rhs));
            }
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut spine = vec![self];
        let mut first = self.lhs.as_ref();
        while let Expression::Operation(operation) = first {
            spine.push(operation);
            first = operation.lhs.as_ref();
        }
        write!(f, "{first}")?;
        for operation in spine.iter().rev() {
            write!(f, " {} ", operation.kind.symbol())?;
            // Parsed trees only hold terms on the right. Trees built by hand
            // may nest there too; pine has no parentheses, so such trees
            // print in a form the parser does not accept.
            match operation.rhs.as_ref() {
                Expression::Operation(_) => write!(f, "({})", operation.rhs)?,
                rhs => write!(f, "{rhs}")?,
            }
        }
        Ok(())
    }
}

/// A number like `42`.
#[derive(Clone, Debug, PartialEq)]
pub struct Literal {
    pub value: Token,
}

impl Literal {
    pub fn new(value: Token) -> Self {
        Self { value }
    }
    pub fn text(&self) -> &str {
        &self.value.lexeme
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value.lexeme)
    }
}

/// A variable read like `x`.
#[derive(Clone, Debug, PartialEq)]
pub struct Lvalue {
    pub identifier: Token,
}

impl Lvalue {
    pub fn new(identifier: Token) -> Self {
        Self { identifier }
    }
    pub fn name(&self) -> &str {
        &self.identifier.lexeme
    }
}

impl Display for Lvalue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifier.lexeme)
    }
}

#[derive(Debug)]
pub enum Expression {
    Operation(Operation),
    Literal(Literal),
    Lvalue(Lvalue),
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (Expression::Operation(lhs), Expression::Operation(rhs)) => {
                    if lhs.kind != rhs.kind {
                        return false;
                    }
                    pending.push((lhs.lhs.as_ref(), rhs.lhs.as_ref()));
                    pending.push((lhs.rhs.as_ref(), rhs.rhs.as_ref()));
                }
                (Expression::Literal(lhs), Expression::Literal(rhs)) => {
                    if lhs != rhs {
                        return false;
                    }
                }
                (Expression::Lvalue(lhs), Expression::Lvalue(rhs)) => {
                    if lhs != rhs {
                        return false;
                    }
                }
                _ => return false,
            }
        }
        true
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Operation(operation) => write!(f, "{operation}"),
            Expression::Literal(literal) => write!(f, "{literal}"),
            Expression::Lvalue(lvalue) => write!(f, "{lvalue}"),
        }
    }
}
