use crate::{
    error::{fail, SyntaxViolation},
    lexer::Token,
};

/// Read position over a token sequence. The position only ever moves forward.
///
/// A verbose cursor records one trace line per consumption attempt; printing
/// them is up to the caller.
#[derive(Debug, Clone)]
pub struct Cursor {
    tokens: Vec<Token>,
    position: usize,
    verbose: bool,
    trace: Vec<String>,
}

impl Cursor {
    pub fn new(tokens: Vec<Token>, verbose: bool) -> Cursor {
        Cursor {
            tokens,
            position: 0,
            verbose,
            trace: vec![],
        }
    }

    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn is_end_of_file(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// The current token, or `None` once the input is exhausted.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Text of the current token. Convenient for classifier lookahead.
    pub(crate) fn peek_text(&self) -> Option<&str> {
        self.peek().map(Token::text)
    }

    pub fn check(&self, expected: &str) -> bool {
        self.peek_text() == Some(expected)
    }

    pub fn bump(&mut self) -> Result<Token, SyntaxViolation> {
        let Some(token) = self.tokens.get(self.position).cloned() else {
            return fail(SyntaxViolation::end_of_input());
        };

        if self.verbose {
            self.trace
                .push(format!("Bumping: {:?} at {}", token.text(), self.position));
        }

        self.position += 1;
        Ok(token)
    }

    /// Consumes the current token if it is exactly `expected`. On a mismatch
    /// the cursor stays where it is.
    pub fn expect(&mut self, expected: &str) -> Result<Token, SyntaxViolation> {
        if self.verbose {
            let line = format!("Expecting: {:?}, found {:?}", expected, self.peek_text());
            self.trace.push(line);
        }

        match self.peek_text() {
            None => fail(SyntaxViolation::UnexpectedEndOfInput {
                expected: vec![expected.to_string()],
            }),
            Some(found) if found != expected => fail(SyntaxViolation::mismatch(&[expected], found)),
            Some(_) => self.bump(),
        }
    }
}
