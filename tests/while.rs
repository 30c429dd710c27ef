mod common;

use common::{accept, mismatch, reject};
use grammar::SyntaxViolation;

#[test]
fn while_with_inequality() {
    // Arrange
    let input = "while ( x != 0 ) x = 0 ;";

    // Act & Assert
    accept(input);
}

#[test]
fn while_with_block_body() {
    accept("while ( i < 10 ) { i = i + 1 ; }");
}

#[test]
fn nested_while() {
    accept("while ( i < 10 ) while ( j < 10 ) j = j + 1 ;");
}

#[test]
fn while_body_can_be_a_declaration() {
    accept("while ( x ) int y = 2 ;");
}

#[test]
fn while_needs_paren() {
    let violation = reject("while x ) x = 0 ;");

    assert_eq!(violation, mismatch(&["("], "x"));
}

#[test]
fn while_condition_allows_single_comparison() {
    // Arrange
    let input = "while ( 0 < x < 9 ) x = 0 ;";

    // Act
    let violation = reject(input);

    // Assert
    assert_eq!(
        violation,
        SyntaxViolation::TrailingOperator {
            found: "<".to_string()
        }
    );
}

#[test]
fn while_has_no_else() {
    let violation = reject("while ( x ) x = 0 ; else x = 1 ;");

    assert!(violation.is_no_viable_alternative());
}
