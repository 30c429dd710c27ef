//! Predictive recursive-descent acceptor.
//!
//! ```text
//! Declaration  := Type Identifier ( ";" | "=" Expr ";" )
//! Assignment   := Identifier "=" Expr ";"
//! IfStmt       := "if" "(" Expr ")" Statement ( "else" Statement )?
//! WhileStmt    := "while" "(" Expr ")" Statement
//! ForStmt      := "for" "(" Declaration Expr ";" Expr ")" Statement
//! Block        := "{" Statement "}"
//! Type         := "int" | "boolean" | "String" | "char"
//! Expr         := SimpleExpr ( Relop SimpleExpr )?
//! SimpleExpr   := Term ( ("+" | "-") Term )*
//! Term         := Factor ( ("*" | "/") Factor )*
//! Factor       := "(" Expr ")" | Identifier | Number
//! ```
//!
//! Numbers are runs of one or more digits, and the `for` header carries one
//! declaration followed by exactly two expressions. An older dialect with
//! single-digit numbers and a three-expression header is not accepted.
//!
//! Every alternative is chosen from the current token alone. Nothing is ever
//! tried and rolled back, and the first violation ends the parse.

mod expressions;
mod statements;
mod types;

use crate::{cursor::Cursor, error::SyntaxViolation, lexer::Token};

const RED_ZONE: usize = 64 * 1024;
const STACK_SEGMENT: usize = 1024 * 1024;

/// Runs a rule that recurses into nested input. When the native stack runs
/// low the rule continues on a fresh heap-allocated segment, so nesting depth
/// is bounded by memory instead of the thread's stack size.
pub(super) fn nested<R>(rule: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, rule)
}

/// Accepts `tokens` if the whole sequence is a program, i.e. zero or more
/// statements.
pub fn parse_program(tokens: Vec<Token>) -> Result<(), SyntaxViolation> {
    let mut cursor = Cursor::new(tokens, false);
    parse_program_with(&mut cursor)
}

/// Same as [`parse_program`] on a caller-owned cursor, which stays
/// inspectable after the parse (position, verbose tracing).
pub fn parse_program_with(cursor: &mut Cursor) -> Result<(), SyntaxViolation> {
    while !cursor.is_end_of_file() {
        statements::parse_statement(cursor)?;
    }

    Ok(())
}
