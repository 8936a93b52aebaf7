use super::token::TokenInfo;
use super::tokenize::{tokenize_line, TokenStore, TokenizeError};

pub struct StringStream {
    tokens: TokenStore,
}

impl StringStream {
    pub fn new<S: AsRef<str>>(input: S) -> Result<StringStream, TokenizeError> {
        let mut tokens = TokenStore::default();
        for (linum, line) in input.as_ref().lines().enumerate() {
            tokenize_line(line, linum, &mut tokens)?;
        }
        Ok(StringStream { tokens })
    }
}

impl Iterator for StringStream {
    type Item = TokenInfo;

    fn next(&mut self) -> Option<TokenInfo> {
        self.tokens.pop_front()
    }
}
