#![allow(dead_code, unused)]
use grammar::{cursor::Cursor, lexer, parse_program, parse_program_with, SyntaxViolation};

pub fn parse(input: &str) -> Result<(), SyntaxViolation> {
    parse_program(lexer::tokenize(input))
}

pub fn accept(input: &str) {
    if let Err(violation) = parse(input) {
        panic!("Expected {:?} to be accepted, got: {}", input, violation);
    }
}

pub fn reject(input: &str) -> SyntaxViolation {
    match parse(input) {
        Ok(()) => panic!("Expected {:?} to be rejected", input),
        Err(violation) => violation,
    }
}

/// Parses with a cursor the test can inspect afterwards.
pub fn parse_with_cursor(input: &str) -> (Result<(), SyntaxViolation>, Cursor) {
    let mut cursor = Cursor::new(lexer::tokenize(input), false);
    let result = parse_program_with(&mut cursor);

    (result, cursor)
}

pub fn mismatch(expected: &[&str], found: &str) -> SyntaxViolation {
    SyntaxViolation::mismatch(expected, found)
}

pub fn end_of_input(expected: &[&str]) -> SyntaxViolation {
    SyntaxViolation::UnexpectedEndOfInput {
        expected: expected.iter().map(|e| e.to_string()).collect(),
    }
}
