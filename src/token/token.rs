use std::fmt;

use crate::ast::Tag;

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    LeftParen,
    RightParen,
    Atom(Atom),
    Comment(String),
}

/// Literal token text along with its lexical class (`Integer`, `Decimal` or
/// `Symbol`). The text is kept verbatim; the reader does the actual parsing.
#[derive(Clone, Debug, PartialEq)]
pub struct Atom {
    pub tag: Tag,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TokenInfo {
    pub token: Token,
    pub line: usize,
}

impl fmt::Display for TokenInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.token {
            Token::Atom(atom) => write!(f, "{} @ line {}", atom.text, self.line),
            _ => write!(f, "{:?} @ line {}", self.token, self.line),
        }
    }
}
