use std::{io, path::PathBuf};

use grammar::SyntaxViolation;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum CheckError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read {name}: {source}")]
    Read { name: String, source: io::Error },

    #[error("Failed to resolve path {path}: {source}")]
    Path { path: String, source: io::Error },

    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid glob pattern {pattern}: {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("No files match {0}")]
    NoMatches(String),

    #[error(transparent)]
    Syntax(#[from] SyntaxViolation),
}

impl CheckError {
    /// Syntax errors are the expected negative answer; everything else means
    /// the input could not be checked at all.
    pub fn is_syntax(&self) -> bool {
        matches!(self, CheckError::Syntax(_))
    }
}
