use crate::{
    classify,
    cursor::Cursor,
    error::{fail, Category, SyntaxViolation},
};

pub(super) fn parse_type(cursor: &mut Cursor) -> Result<(), SyntaxViolation> {
    let token = cursor.bump()?; // Consume the type

    if classify::is_type(token.text()) {
        return Ok(());
    }

    if classify::is_rejected_type(token.text()) {
        return unsupported_type(token.text());
    }

    fail(SyntaxViolation::ClassMismatch {
        category: Category::Type,
        found: token.to_string(),
    })
}

pub(super) fn unsupported_type<T>(found: &str) -> Result<T, SyntaxViolation> {
    fail(SyntaxViolation::UnsupportedType {
        found: found.to_string(),
    })
}
