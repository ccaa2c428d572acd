//! Front end for the pine language.
//!
//! pine is a tiny imperative language. A program is a single module holding
//! a list of statements:
//!
//! ```pine
//! module counter {
//!   var x;
//!   x = 1;
//!   x = x + 1;
//! }
//! ```
//!
//! Source text flows in one direction: the [Scanner](parser::Scanner) turns
//! characters into tokens, and the [Parser](parser::Parser) turns tokens into
//! an owned syntax tree rooted at [Module](ast::Module).
//!
//! ```
//! use pine::parser::Parser;
//!
//! let module = Parser::parse("module m { var x; x = 1; }").unwrap();
//! assert_eq!(module.statements().len(), 2);
//! ```
//!
//! There is no semantic analysis or code generation; consumers walk the tree
//! themselves.

pub mod ast;
pub mod parser;
#[cfg(feature = "test-utils")]
pub mod tester;

use tracing::subscriber::SetGlobalDefaultError;
use tracing::Level;

/// Initialize logging with the given level.
pub fn init_subscriber(level: Level) -> Result<(), SetGlobalDefaultError> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_test_writer()
        .without_time()
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}
