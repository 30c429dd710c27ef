use crate::{
    classify,
    cursor::Cursor,
    error::{fail, Rule, SyntaxViolation},
};

use super::{
    expressions::{parse_expression, parse_identifier},
    nested,
    types::{parse_type, unsupported_type},
};

pub(super) fn parse_statement(cursor: &mut Cursor) -> Result<(), SyntaxViolation> {
    nested(|| dispatch_statement(cursor))
}

fn dispatch_statement(cursor: &mut Cursor) -> Result<(), SyntaxViolation> {
    let Some(token) = cursor.peek().cloned() else {
        return fail(SyntaxViolation::end_of_input());
    };

    match token.text() {
        t if classify::is_type(t) => parse_declaration(cursor),
        t if classify::is_identifier(t) => parse_assignment(cursor),
        "if" => parse_if(cursor),
        "while" => parse_while(cursor),
        "for" => parse_for(cursor),
        "{" => parse_block(cursor),
        t if classify::is_number(t) => fail(SyntaxViolation::NumberAsIdentifier {
            found: t.to_string(),
        }),
        t if classify::is_rejected_type(t) => unsupported_type(t),
        t => fail(SyntaxViolation::NoViableAlternative {
            rule: Rule::Statement,
            found: t.to_string(),
        }),
    }
}

fn parse_declaration(cursor: &mut Cursor) -> Result<(), SyntaxViolation> {
    parse_type(cursor)?;
    parse_identifier(cursor)?;

    match cursor.peek_text() {
        Some(";") => {
            cursor.bump()?; // Consume the ;
            Ok(())
        }
        Some("=") => {
            cursor.bump()?; // Consume the =
            parse_expression(cursor)?;
            cursor.expect(";")?;
            Ok(())
        }
        Some(found) => fail(SyntaxViolation::mismatch(&[";", "="], found)),
        None => fail(SyntaxViolation::UnexpectedEndOfInput {
            expected: vec![";".to_string(), "=".to_string()],
        }),
    }
}

fn parse_assignment(cursor: &mut Cursor) -> Result<(), SyntaxViolation> {
    parse_identifier(cursor)?;
    cursor.expect("=")?;
    parse_expression(cursor)?;
    cursor.expect(";")?;

    Ok(())
}

fn parse_if(cursor: &mut Cursor) -> Result<(), SyntaxViolation> {
    cursor.expect("if")?;
    parse_condition(cursor)?;
    parse_statement(cursor)?;

    if cursor.check("else") {
        cursor.bump()?; // Consume the else
        parse_statement(cursor)?;
    }

    Ok(())
}

fn parse_while(cursor: &mut Cursor) -> Result<(), SyntaxViolation> {
    cursor.expect("while")?;
    parse_condition(cursor)?;
    parse_statement(cursor)
}

/// The declaration brings its own `;`, so the header is
/// `( Declaration Expr ; Expr )`.
fn parse_for(cursor: &mut Cursor) -> Result<(), SyntaxViolation> {
    cursor.expect("for")?;
    cursor.expect("(")?;
    parse_declaration(cursor)?;
    parse_expression(cursor)?;
    cursor.expect(";")?;
    parse_expression(cursor)?;
    cursor.expect(")")?;
    parse_statement(cursor)
}

/// Exactly one statement between the braces.
fn parse_block(cursor: &mut Cursor) -> Result<(), SyntaxViolation> {
    cursor.expect("{")?;
    parse_statement(cursor)?;
    cursor.expect("}")?;

    Ok(())
}

fn parse_condition(cursor: &mut Cursor) -> Result<(), SyntaxViolation> {
    cursor.expect("(")?;
    parse_expression(cursor)?;
    cursor.expect(")")?;

    Ok(())
}
