use std::fmt::{self, Display};

/// A single whitespace-delimited text atom.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    pub fn new(text: impl Into<String>) -> Token {
        Token(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Token::new(text)
    }
}

impl From<String> for Token {
    fn from(text: String) -> Self {
        Token(text)
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Splits the source on whitespace. No further lexical analysis happens here:
/// `x=1;` is one token and the grammar will reject it.
pub fn tokenize(source_code: &str) -> Vec<Token> {
    source_code.split_whitespace().map(Token::from).collect()
}

pub trait PrettyPrint {
    fn prettify(&self) -> String;
}

impl PrettyPrint for Vec<Token> {
    fn prettify(&self) -> String {
        let texts: Vec<String> = self.iter().map(|t| format!("{:?}", t.text())).collect();
        format!("[{}]", texts.join(", "))
    }
}
