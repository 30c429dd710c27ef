use crate::{
    classify,
    cursor::Cursor,
    error::{fail, Category, Rule, SyntaxViolation},
};

use super::nested;

/// `SimpleExpr ( Relop SimpleExpr )?`, followed by a check that no operator
/// is left dangling after it.
pub(super) fn parse_expression(cursor: &mut Cursor) -> Result<(), SyntaxViolation> {
    parse_simple_expression(cursor)?;

    if cursor.peek_text().is_some_and(classify::is_relop) {
        parse_relop(cursor)?;
        parse_simple_expression(cursor)?;
    }

    match cursor.peek_text() {
        Some(found) if classify::is_operator(found) => fail(SyntaxViolation::TrailingOperator {
            found: found.to_string(),
        }),
        _ => Ok(()),
    }
}

fn parse_simple_expression(cursor: &mut Cursor) -> Result<(), SyntaxViolation> {
    parse_term(cursor)?;

    while cursor.peek_text().is_some_and(classify::is_additive) {
        cursor.bump()?; // Consume the + or -
        parse_term(cursor)?;
    }

    Ok(())
}

fn parse_term(cursor: &mut Cursor) -> Result<(), SyntaxViolation> {
    parse_factor(cursor)?;

    while cursor.peek_text().is_some_and(classify::is_multiplicative) {
        cursor.bump()?; // Consume the * or /
        parse_factor(cursor)?;
    }

    Ok(())
}

fn parse_factor(cursor: &mut Cursor) -> Result<(), SyntaxViolation> {
    nested(|| dispatch_factor(cursor))
}

fn dispatch_factor(cursor: &mut Cursor) -> Result<(), SyntaxViolation> {
    match cursor.peek_text() {
        Some("(") => {
            cursor.bump()?; // Consume the (
            parse_expression(cursor)?;
            cursor.expect(")")?;
            Ok(())
        }
        Some(t) if classify::is_identifier(t) => parse_identifier(cursor),
        Some(t) if classify::is_number(t) => parse_number(cursor),
        Some(found) => fail(SyntaxViolation::NoViableAlternative {
            rule: Rule::Factor,
            found: found.to_string(),
        }),
        None => fail(SyntaxViolation::end_of_input()),
    }
}

pub(super) fn parse_identifier(cursor: &mut Cursor) -> Result<(), SyntaxViolation> {
    parse_classified(cursor, Category::Identifier, classify::is_identifier)
}

fn parse_number(cursor: &mut Cursor) -> Result<(), SyntaxViolation> {
    parse_classified(cursor, Category::Number, classify::is_number)
}

fn parse_relop(cursor: &mut Cursor) -> Result<(), SyntaxViolation> {
    parse_classified(cursor, Category::Relop, classify::is_relop)
}

fn parse_classified(
    cursor: &mut Cursor,
    category: Category,
    predicate: fn(&str) -> bool,
) -> Result<(), SyntaxViolation> {
    let token = cursor.bump()?;

    if predicate(token.text()) {
        Ok(())
    } else {
        fail(SyntaxViolation::ClassMismatch {
            category,
            found: token.to_string(),
        })
    }
}
