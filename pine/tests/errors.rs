extern crate pine;

use indoc::indoc;
use pine::parser::Scanner;
use pine::parser::SyntaxError;
use pine::parser::TokenKind;
use pine::parser::UnrecognizedCharacter;
use pine::tester::Tester;
use std::panic::Location;

#[test]
fn unrecognized_character() {
    Tester::init_tracing();
    let err = Scanner::scan("#").unwrap_err();
    let err = err.downcast_ref::<UnrecognizedCharacter>().unwrap();
    assert_eq!(err.character, '#');
    assert_eq!(err.location().line(), 0);
    assert_eq!(err.location().column(), 0);
}

#[test]
fn unrecognized_character_in_module() {
    Tester::init_tracing();
    let src = indoc! {"
    module m {
      x = 1 * 2;
    }
    "};
    let (err, actual) = Tester::parse_error(src);
    assert!(err.downcast_ref::<UnrecognizedCharacter>().is_some());
    let expected = indoc! {"
    ```
    0  | module m {
    1  |   x = 1 * 2;
                 ^ Scanning failed starting at: *
    ```
    "};
    Tester::check_lines_exact(&actual, expected, Location::caller());
}

#[test]
fn missing_module_name() {
    Tester::init_tracing();
    let (err, actual) = Tester::parse_error("module { }");
    let err = err.downcast_ref::<SyntaxError>().unwrap();
    assert_eq!(err.expected, vec![TokenKind::Identifier]);
    assert_eq!(err.found.kind, TokenKind::LBrace);
    let expected = indoc! {r#"
    ```
    0  | module { }
                ^ Expected id, but got "{" of kind lbrace
    ```
    "#};
    Tester::check_lines_exact(&actual, expected, Location::caller());
}

#[test]
fn missing_semicolon() {
    Tester::init_tracing();
    let src = indoc! {"
    module m {
      var x
      x = 1;
    }
    "};
    let (err, _actual) = Tester::parse_error(src);
    let err = err.downcast_ref::<SyntaxError>().unwrap();
    assert_eq!(err.expected, vec![TokenKind::Semicolon]);
    assert_eq!(err.found.lexeme, "x");
    assert_eq!(err.found.line(), 2);
}

#[test]
fn missing_closing_brace() {
    Tester::init_tracing();
    let (err, _actual) = Tester::parse_error("module m { x = y + 1;");
    let err = err.downcast_ref::<SyntaxError>().unwrap();
    assert_eq!(err.found.kind, TokenKind::Eof);
    assert!(err.expected.contains(&TokenKind::RBrace));
}

#[test]
fn dangling_operator() {
    Tester::init_tracing();
    let (err, _actual) = Tester::parse_error("module m { x = y + ; }");
    let err = err.downcast_ref::<SyntaxError>().unwrap();
    assert_eq!(err.expected, vec![TokenKind::Number, TokenKind::Identifier]);
    assert_eq!(err.found.kind, TokenKind::Semicolon);
}
