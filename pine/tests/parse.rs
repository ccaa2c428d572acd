extern crate pine;

use indoc::indoc;
use pine::ast::Expression;
use pine::ast::OperationKind;
use pine::ast::Statement;
use pine::parser::Parser;
use pine::tester::Tester;
use std::panic::Location;

#[test]
fn parse_empty_module() {
    Tester::init_tracing();
    let src = "module m { }";
    let (module, actual) = Tester::parse(src);
    assert_eq!(module.name(), "m");
    assert_eq!(module.statements().len(), 0);
    assert!(module.program.statements.is_empty());
    Tester::check_lines_exact(&actual, "module m {\n}", Location::caller());
}

#[test]
fn parse_statements_in_order() {
    Tester::init_tracing();
    let src = "module m { var x; x = 1; x = x + 1; }";
    let expected = indoc! {"
    module m {
      var x;
      x = 1;
      x = x + 1;
    }
    "};
    let caller = Location::caller();
    let (module, actual) = Tester::parse(src);
    Tester::check_lines_exact(&actual, expected, caller);

    let statements = module.statements().iter().collect::<Vec<&Statement>>();
    assert_eq!(statements.len(), 3);

    let Statement::Declaration(declaration) = statements[0] else {
        panic!("Expected a declaration, got {:?}", statements[0]);
    };
    assert_eq!(declaration.name(), "x");

    let Statement::Assign(assign) = statements[1] else {
        panic!("Expected an assignment, got {:?}", statements[1]);
    };
    assert_eq!(assign.name(), "x");
    let Expression::Literal(literal) = &assign.expression else {
        panic!("Expected a literal, got {:?}", assign.expression);
    };
    assert_eq!(literal.text(), "1");

    let Statement::Assign(assign) = statements[2] else {
        panic!("Expected an assignment, got {:?}", statements[2]);
    };
    let Expression::Operation(operation) = &assign.expression else {
        panic!("Expected an operation, got {:?}", assign.expression);
    };
    assert_eq!(operation.kind, OperationKind::Add);
    assert!(matches!(*operation.lhs, Expression::Lvalue(ref x) if x.name() == "x"));
    assert!(matches!(*operation.rhs, Expression::Literal(ref one) if one.text() == "1"));
}

#[test]
fn parse_left_associative_chain() {
    Tester::init_tracing();
    let src = indoc! {"
    module chain {
      a - b - c;
    }
    "};
    let (module, actual) = Tester::parse(src);
    Tester::check_lines_contain(&actual, "a - b - c;", Location::caller());

    let Some(Statement::Expression(Expression::Operation(outer))) = module.statements().first()
    else {
        panic!("Expected an operation statement");
    };
    assert_eq!(outer.kind, OperationKind::Sub);
    assert!(matches!(*outer.rhs, Expression::Lvalue(ref c) if c.name() == "c"));
    let Expression::Operation(inner) = outer.lhs.as_ref() else {
        panic!("Expected `(a - b) - c`, got {:?}", outer);
    };
    assert_eq!(inner.kind, OperationKind::Sub);
    assert!(matches!(*inner.lhs, Expression::Lvalue(ref a) if a.name() == "a"));
    assert!(matches!(*inner.rhs, Expression::Lvalue(ref b) if b.name() == "b"));
}

#[test]
fn parse_bare_identifier_and_assign() {
    Tester::init_tracing();
    let src = indoc! {"
    module m {
      x;
      x = 1;
      42;
    }
    "};
    let (module, _actual) = Tester::parse(src);
    let statements = module.statements().iter().collect::<Vec<&Statement>>();
    assert!(matches!(
        statements[0],
        Statement::Expression(Expression::Lvalue(_))
    ));
    assert!(matches!(statements[1], Statement::Assign(_)));
    assert!(matches!(
        statements[2],
        Statement::Expression(Expression::Literal(_))
    ));
}

#[test]
fn parse_keeps_token_locations() {
    let src = indoc! {"
    module m {
      var total;
    }
    "};
    let module = Parser::parse(src).unwrap();
    assert_eq!(module.identifier.line(), 0);
    assert_eq!(module.identifier.column(), 7);
    let Some(Statement::Declaration(declaration)) = module.statements().first() else {
        panic!("Expected a declaration");
    };
    assert_eq!(declaration.identifier.line(), 1);
    assert_eq!(declaration.identifier.column(), 6);
}

#[test]
fn printed_module_parses_again() {
    Tester::init_tracing();
    let src = indoc! {"
    module   roundtrip{var a;var b;a=1;b=a+2-a;a-b;}
    "};
    let (_module, printed) = Tester::parse(src);
    let (_module, reprinted) = Tester::parse(&printed);
    Tester::check_lines_exact(&reprinted, &printed, Location::caller());
    let expected = indoc! {"
    module roundtrip {
      var a;
      var b;
      a = 1;
      b = a + 2 - a;
      a - b;
    }
    "};
    Tester::check_lines_exact(&printed, expected, Location::caller());
}

#[test]
fn parse_many_statements() {
    let body = "x = x + 1;\n".repeat(10_000);
    let src = format!("module big {{\nvar x;\n{body}}}");
    let module = Parser::parse(&src).unwrap();
    assert_eq!(module.statements().len(), 10_001);
}

#[test]
fn parse_long_expression_chain() {
    let terms = 200_000;
    let chain = vec!["1"; terms].join(" + ");
    let src = format!("module m {{ x = {chain} - y; }}");
    let module = Parser::parse(&src).unwrap();
    let Some(Statement::Assign(assign)) = module.statements().first() else {
        panic!("Expected an assignment");
    };
    let Expression::Operation(operation) = &assign.expression else {
        panic!("Expected an operation");
    };
    assert_eq!(operation.kind, OperationKind::Sub);

    let printed = module.to_string();
    assert!(printed.starts_with("module m {\n  x = 1 + 1 + 1"));
    assert!(printed.ends_with(" + 1 - y;\n}"));
    let reparsed = Parser::parse(&printed).unwrap();
    assert!(reparsed.to_string() == printed);
    drop(module);
}
