pub mod classify;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod parser;

pub use error::{Category, Rule, SyntaxViolation};
pub use parser::{parse_program, parse_program_with};
