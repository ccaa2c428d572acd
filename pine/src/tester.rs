use crate::ast::Module;
use crate::init_subscriber;
use crate::parser::render_error;
use crate::parser::Parser;
use crate::parser::Scanner;
use crate::parser::Token;
use std::cmp::max;
use std::panic::Location;
use tracing::info;

pub struct Tester;

impl Tester {
    /// Initialize the subscriber for the tests.
    ///
    /// Cannot pass options, since the tests run concurrently.
    pub fn init_tracing() {
        let level = tracing::Level::INFO;
        match init_subscriber(level) {
            Ok(_) => (),
            Err(_e) => (),
        }
    }
    fn point_to_missing_line(expected: &str, index: usize) -> String {
        let mut result = String::new();
        result.push_str("A line is missing from the output:\n");
        result.push_str("```");
        for (i, line) in expected.lines().enumerate() {
            if i == index {
                let msg = format!("{line}   <== missing");
                result.push_str(&format!("\n{msg}"));
            } else {
                result.push_str(&format!("\n{line}"));
            }
        }
        result.push_str("\n```");
        result
    }
    pub fn check_lines_exact(actual: &str, expected: &str, caller: &Location<'_>) {
        let actual = actual.trim();
        let expected = expected.trim();
        let l = max(actual.lines().count(), expected.lines().count());
        for i in 0..l {
            let actual_line = match actual.lines().nth(i) {
                None => panic!("Line {i} not found in output: called from {caller}"),
                Some(actual_line) => actual_line,
            };
            let expected_line = match expected.lines().nth(i) {
                None => panic!("Unexpected line {i} in output: called from {caller}"),
                Some(expected_line) => expected_line,
            };
            assert_eq!(actual_line, expected_line, "called from {}", caller);
        }
    }
    /// Check whether the expected lines are present in the actual output.
    ///
    /// The actual output may contain additional lines that are not in the expected output.
    pub fn check_lines_contain(actual: &str, expected: &str, caller: &Location<'_>) {
        let actual = actual.trim();
        let expected = expected.trim();
        let mut actual_index = 0;
        'outer: for i in 0..expected.lines().count() {
            let expected_line = expected.lines().nth(i).unwrap().trim();
            // An empty line would match any line.
            if expected_line.is_empty() {
                continue;
            }
            let start = actual_index;
            for j in start..actual.lines().count() {
                let actual_line = actual.lines().nth(j).unwrap();
                if actual_line.contains(expected_line) {
                    actual_index = j + 1;
                    continue 'outer;
                }
            }
            let msg = Self::point_to_missing_line(expected, i);
            panic!("{msg}\nwhen called from {caller}");
        }
    }
    fn print_heading(msg: &str, src: &str) {
        info!("{msg}:\n```\n{src}\n```\n");
    }
    /// Parse `src` and return the module together with its printed form.
    pub fn parse(src: &str) -> (Module, String) {
        let src = src.trim();
        Self::print_heading("Before parse", src);
        let module = match Parser::parse(src) {
            Ok(module) => module,
            Err(err) => panic!("Parsing failed:\n{}", render_error(src, &err)),
        };
        let actual = format!("{}", module);
        Self::print_heading("After parse", &actual);
        (module, actual)
    }
    /// Parse `src` and return the rendered diagnostic of the expected error.
    pub fn parse_error(src: &str) -> (anyhow::Error, String) {
        let src = src.trim();
        Self::print_heading("Before parse", src);
        let err = match Parser::parse(src) {
            Ok(module) => panic!("Expected parsing to fail, got:\n{module}"),
            Err(err) => err,
        };
        let actual = render_error(src, &err);
        Self::print_heading("Error", &actual);
        (err, actual)
    }
    /// Scan `src` completely and return the tokens with their descriptions.
    pub fn tokens(src: &str) -> (Vec<Token>, String) {
        let tokens = Scanner::scan(src).unwrap();
        let actual = tokens
            .iter()
            .map(|token| token.describe())
            .collect::<Vec<String>>()
            .join("\n");
        Self::print_heading("Tokens", &actual);
        (tokens, actual)
    }
}
