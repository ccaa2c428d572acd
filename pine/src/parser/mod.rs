//! Parsing logic for pine including a scanner (tokenizer).

mod error;
mod parser;
mod scanner;
mod token;

pub use error::render_error;
pub use error::SyntaxError;
pub use error::UnrecognizedCharacter;
pub use parser::Parser;
pub use scanner::Scanner;
pub use token::Location;
pub use token::Token;
pub use token::TokenKind;
