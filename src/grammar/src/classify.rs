//! Token classification. Every predicate looks at token text only, so the
//! answer never depends on where the token sits in the input.

const TYPES: [&str; 4] = ["int", "boolean", "String", "char"];
const REJECTED_TYPES: [&str; 2] = ["float", "double"];
const RELOPS: [&str; 6] = ["<", ">", "<=", ">=", "==", "!="];
const ARITHMETIC: [&str; 4] = ["+", "-", "*", "/"];
const OTHER_OPERATORS: [&str; 8] = ["=", "!", "%", "&&", "||", "&", "|", "^"];

pub fn is_type(token: &str) -> bool {
    TYPES.contains(&token)
}

/// Type keywords of neighbouring languages that the grammar refuses with a
/// dedicated message instead of a generic one.
pub fn is_rejected_type(token: &str) -> bool {
    REJECTED_TYPES.contains(&token)
}

/// A single lowercase ASCII letter.
pub fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_ascii_lowercase(),
        _ => false,
    }
}

/// One or more decimal digits.
pub fn is_number(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

pub fn is_relop(token: &str) -> bool {
    RELOPS.contains(&token)
}

pub fn is_additive(token: &str) -> bool {
    matches!(token, "+" | "-")
}

pub fn is_multiplicative(token: &str) -> bool {
    matches!(token, "*" | "/")
}

/// Anything shaped like an operator. Used after a complete expression, where
/// such a token can only be left-over input.
pub fn is_operator(token: &str) -> bool {
    is_relop(token) || ARITHMETIC.contains(&token) || OTHER_OPERATORS.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_are_a_closed_set() {
        for token in ["int", "boolean", "String", "char"] {
            assert!(is_type(token), "{token}");
        }

        for token in ["Int", "string", "bool", "float", "double", "x", ""] {
            assert!(!is_type(token), "{token}");
        }
    }

    #[test]
    fn rejected_types() {
        assert!(is_rejected_type("float"));
        assert!(is_rejected_type("double"));
        assert!(!is_rejected_type("int"));
    }

    #[test]
    fn identifiers_are_single_lowercase_letters() {
        assert!(is_identifier("a"));
        assert!(is_identifier("z"));

        for token in ["", "X", "xy", "1", "_", "é", "if", ";"] {
            assert!(!is_identifier(token), "{token}");
        }
    }

    #[test]
    fn numbers_are_digit_runs() {
        assert!(is_number("0"));
        assert!(is_number("42"));
        assert!(is_number("007"));

        for token in ["", "-1", "1.5", "1a", "x", "٣"] {
            assert!(!is_number(token), "{token}");
        }
    }

    #[test]
    fn relops() {
        for token in ["<", ">", "<=", ">=", "==", "!="] {
            assert!(is_relop(token), "{token}");
        }

        for token in ["=", "=<", "<>", "!", "+"] {
            assert!(!is_relop(token), "{token}");
        }
    }

    #[test]
    fn operators_cover_relops_and_arithmetic() {
        for token in ["<", "==", "+", "-", "*", "/", "=", "&&", "!"] {
            assert!(is_operator(token), "{token}");
        }

        for token in [")", ";", "}", "x", "1", "("] {
            assert!(!is_operator(token), "{token}");
        }
    }

    #[test]
    fn classification_is_repeatable() {
        for token in ["int", "x", "12", "<=", "?"] {
            assert_eq!(is_type(token), is_type(token));
            assert_eq!(is_identifier(token), is_identifier(token));
            assert_eq!(is_number(token), is_number(token));
            assert_eq!(is_relop(token), is_relop(token));
        }
    }
}
