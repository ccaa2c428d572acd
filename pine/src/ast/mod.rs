//! Syntax tree produced by the parser.
//!
//! Every node owns its children, so dropping a [Module] releases the whole
//! tree including the tokens stored in the leaves. Each node prints back as
//! pine source via [Display].

mod expression;
mod statement;

pub use expression::Expression;
pub use expression::Literal;
pub use expression::Lvalue;
pub use expression::Operation;
pub use expression::OperationKind;
pub use statement::Assign;
pub use statement::Declaration;
pub use statement::Iter;
pub use statement::Statement;
pub use statement::Statements;

use crate::parser::Token;
use std::fmt::Display;
use std::fmt::Formatter;

/// Return `indent` levels of two spaces.
pub(crate) fn spaces(indent: i32) -> String {
    "  ".repeat(indent.max(0) as usize)
}

#[derive(Debug, Default, PartialEq)]
pub struct Program {
    pub statements: Statements,
}

impl Program {
    pub fn new(statements: Statements) -> Self {
        Self { statements }
    }
    pub fn display(&self, f: &mut Formatter<'_>, indent: i32) -> std::fmt::Result {
        for statement in self.statements.iter() {
            writeln!(f, "{}{};", spaces(indent), statement)?;
        }
        Ok(())
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.display(f, 0)
    }
}

/// `module <name> { ... }`, the root of every parse.
#[derive(Debug, PartialEq)]
pub struct Module {
    pub identifier: Token,
    pub program: Program,
}

impl Module {
    pub fn new(identifier: Token, program: Program) -> Self {
        Self {
            identifier,
            program,
        }
    }
    pub fn name(&self) -> &str {
        &self.identifier.lexeme
    }
    pub fn statements(&self) -> &Statements {
        &self.program.statements
    }
}

impl Display for Module {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "module {} {{", self.identifier.lexeme)?;
        self.program.display(f, 1)?;
        write!(f, "}}")
    }
}
