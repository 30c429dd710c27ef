use std::fmt::{self, Display};

use thiserror::Error;

/// Terminal category recognized by the classifier rather than by literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Type,
    Identifier,
    Number,
    Relop,
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Type => write!(f, "type"),
            Category::Identifier => write!(f, "identifier"),
            Category::Number => write!(f, "number"),
            Category::Relop => write!(f, "relop"),
        }
    }
}

/// Rules that choose between alternatives on the lookahead token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Statement,
    Factor,
}

/// The first grammar violation found in a token sequence.
///
/// Every variant is terminal: once one is produced the parse is over and no
/// other violation is ever reported for the same input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxViolation {
    /// The input ran out where a token was required. `expected` lists the
    /// literal tokens that would have been accepted, if the rule knew them.
    #[error("Syntax error: {}", end_of_input(.expected))]
    UnexpectedEndOfInput { expected: Vec<String> },

    /// An exact keyword or punctuation token was required.
    #[error("Syntax error: Expected {}, found '{found}'", one_of(.expected))]
    TokenMismatch { expected: Vec<String>, found: String },

    /// A token of a classified category was required.
    #[error("Syntax error: Expected {category}, found '{found}'")]
    ClassMismatch { category: Category, found: String },

    /// No alternative of `rule` starts with the lookahead token.
    #[error("Syntax error: {}", no_alternative(.rule, .found))]
    NoViableAlternative { rule: Rule, found: String },

    /// A statement starts with a number, where an identifier was probably meant.
    #[error("Syntax error: Expected identifier, found number '{found}'")]
    NumberAsIdentifier { found: String },

    /// A declaration uses a type keyword outside of the supported set.
    #[error("Syntax error: Invalid type '{found}', allowed: int, boolean, String, char")]
    UnsupportedType { found: String },

    /// An operator follows a complete expression.
    #[error("Syntax error: Unexpected operator in expression: '{found}'")]
    TrailingOperator { found: String },
}

impl SyntaxViolation {
    pub fn end_of_input() -> SyntaxViolation {
        SyntaxViolation::UnexpectedEndOfInput { expected: vec![] }
    }

    pub fn mismatch(expected: &[&str], found: &str) -> SyntaxViolation {
        SyntaxViolation::TokenMismatch {
            expected: expected.iter().map(|e| e.to_string()).collect(),
            found: found.to_string(),
        }
    }

    /// True for the statement/factor dispatch failures, including the
    /// number-for-identifier and unsupported-type refinements.
    pub fn is_no_viable_alternative(&self) -> bool {
        matches!(
            self,
            SyntaxViolation::NoViableAlternative { .. }
                | SyntaxViolation::NumberAsIdentifier { .. }
                | SyntaxViolation::UnsupportedType { .. }
        )
    }
}

/// Aborts the current parse with `violation`. Never yields a value; callers
/// return it directly and `?` carries it to the entry point.
pub fn fail<T>(violation: SyntaxViolation) -> Result<T, SyntaxViolation> {
    Err(violation)
}

fn one_of(expected: &[String]) -> String {
    expected
        .iter()
        .map(|e| format!("'{}'", e))
        .collect::<Vec<_>>()
        .join(" or ")
}

fn end_of_input(expected: &[String]) -> String {
    if expected.is_empty() {
        "Unexpected end of input".to_string()
    } else {
        format!("Expected {} but reached end of input", one_of(expected))
    }
}

fn no_alternative(rule: &Rule, found: &str) -> String {
    match rule {
        Rule::Statement => format!("Unexpected token for statement: '{}'", found),
        Rule::Factor => format!("Unexpected factor: '{}'", found),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_lists_every_expected_token() {
        let violation = SyntaxViolation::mismatch(&[";", "="], "1");

        assert_eq!(
            violation.to_string(),
            "Syntax error: Expected ';' or '=', found '1'"
        );
    }

    #[test]
    fn end_of_input_without_expectation() {
        assert_eq!(
            SyntaxViolation::end_of_input().to_string(),
            "Syntax error: Unexpected end of input"
        );
    }

    #[test]
    fn end_of_input_names_expected_token() {
        let violation = SyntaxViolation::UnexpectedEndOfInput {
            expected: vec![";".to_string()],
        };

        assert_eq!(
            violation.to_string(),
            "Syntax error: Expected ';' but reached end of input"
        );
    }

    #[test]
    fn class_mismatch_names_category() {
        let violation = SyntaxViolation::ClassMismatch {
            category: Category::Identifier,
            found: "12".to_string(),
        };

        assert_eq!(violation.to_string(), "Syntax error: Expected identifier, found '12'");
    }

    #[test]
    fn no_viable_alternative_depends_on_rule() {
        let statement = SyntaxViolation::NoViableAlternative {
            rule: Rule::Statement,
            found: "else".to_string(),
        };
        let factor = SyntaxViolation::NoViableAlternative {
            rule: Rule::Factor,
            found: ";".to_string(),
        };

        assert_eq!(statement.to_string(), "Syntax error: Unexpected token for statement: 'else'");
        assert_eq!(factor.to_string(), "Syntax error: Unexpected factor: ';'");
    }

    #[test]
    fn refinements_count_as_no_viable_alternative() {
        let number = SyntaxViolation::NumberAsIdentifier { found: "3".to_string() };
        let float = SyntaxViolation::UnsupportedType { found: "float".to_string() };
        let trailing = SyntaxViolation::TrailingOperator { found: "<".to_string() };

        assert!(number.is_no_viable_alternative());
        assert!(float.is_no_viable_alternative());
        assert!(!trailing.is_no_viable_alternative());
    }

    #[test]
    fn fail_is_always_an_error() {
        let result: Result<u8, SyntaxViolation> = fail(SyntaxViolation::end_of_input());

        assert_eq!(result, Err(SyntaxViolation::end_of_input()));
    }
}
