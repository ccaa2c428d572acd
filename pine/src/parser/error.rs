use crate::parser::scanner::Scanner;
use crate::parser::token::Location;
use crate::parser::token::Token;
use crate::parser::token::TokenKind;
use std::fmt::Display;
use std::fmt::Formatter;

/// The scanner hit a character that starts no token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnrecognizedCharacter {
    pub character: char,
    pub location: Location,
}

impl UnrecognizedCharacter {
    pub fn location(&self) -> &Location {
        &self.location
    }
}

impl Display for UnrecognizedCharacter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Scanning failed starting at: {:?} {}",
            self.character, self.location
        )
    }
}

impl std::error::Error for UnrecognizedCharacter {}

/// The current token does not fit any grammar alternative.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxError {
    /// Token kinds that would have been accepted.
    pub expected: Vec<TokenKind>,
    pub found: Token,
}

impl SyntaxError {
    pub fn new(expected: &[TokenKind], found: Token) -> Self {
        Self {
            expected: expected.to_vec(),
            found,
        }
    }
    pub fn location(&self) -> &Location {
        &self.found.location
    }
    fn expected_text(&self) -> String {
        let names = self
            .expected
            .iter()
            .map(|kind| kind.name())
            .collect::<Vec<&str>>();
        match names.as_slice() {
            [name] => name.to_string(),
            _ => format!("one of {}", names.join(", ")),
        }
    }
    /// The message without the location, used for caret diagnostics.
    pub fn message(&self) -> String {
        format!(
            "Expected {}, but got \"{}\" of kind {}",
            self.expected_text(),
            self.found.lexeme,
            self.found.kind
        )
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.message(), self.found.location)
    }
}

impl std::error::Error for SyntaxError {}

/// Render a scan or parse error as a diagnostic pointing into `src`.
///
/// Errors of other types are rendered with their [Display] implementation.
pub fn render_error(src: &str, err: &anyhow::Error) -> String {
    if let Some(err) = err.downcast_ref::<SyntaxError>() {
        Scanner::error(src, err.location(), &err.message())
    } else if let Some(err) = err.downcast_ref::<UnrecognizedCharacter>() {
        let msg = format!("Scanning failed starting at: {}", err.character);
        Scanner::error(src, err.location(), &msg)
    } else {
        err.to_string()
    }
}
