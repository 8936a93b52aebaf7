//! Module for breaking lispy text into tokens.

use std::collections::VecDeque;
use std::fmt;

use super::token::{Atom, Token, TokenInfo};
use crate::ast::Tag;
use crate::symbol::{SymbolError, ToSymbol};

pub type TokenStore = VecDeque<TokenInfo>;

#[derive(Debug)]
pub struct TokenizeError {
    pub line: usize,
    pub kind: TokenizeErrorKind,
}

#[derive(Debug)]
pub enum TokenizeErrorKind {
    InvalidSymbol(SymbolError),
}


pub fn tokenize_line<S: AsRef<str>>(
    line: S,
    linum: usize,
    result: &mut TokenStore,
) -> Result<(), TokenizeError> {
    let mut sexp_slice = line.as_ref();

    let mut comment: Option<TokenInfo> = None;
    if let Some(j) = sexp_slice.find(';') {
        comment = Some(TokenInfo {
            token: Token::Comment(sexp_slice[j + 1..].to_string()),
            line: linum,
        });
        sexp_slice = &sexp_slice[..j];
    }

    let expanded = sexp_slice.replace("(", " ( ").replace(")", " ) ");

    for ptoken in expanded.split_whitespace() {
        let token = match ptoken {
            "(" => Token::LeftParen,
            ")" => Token::RightParen,
            _ => Token::Atom(classify(ptoken).map_err(|err| TokenizeError {
                line: linum,
                kind: TokenizeErrorKind::InvalidSymbol(err),
            })?),
        };
        result.push_back(TokenInfo { token, line: linum });
    }

    if let Some(comment) = comment {
        result.push_back(comment);
    }
    Ok(())
}

// Lexical classification only; no value is constructed here. Number-shaped
// atoms keep their text for the reader to parse (and to range-check).
fn classify(text: &str) -> Result<Atom, SymbolError> {
    let tag = if is_integer(text) {
        Tag::Integer
    } else if is_decimal(text) {
        Tag::Decimal
    } else {
        text.to_symbol()?;
        Tag::Symbol
    };

    Ok(Atom {
        tag,
        text: text.to_string(),
    })
}

/// Matches -?[0-9]+
fn is_integer(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Matches -?[0-9]+\.[0-9]+
fn is_decimal(s: &str) -> bool {
    match s.find('.') {
        Some(j) => is_integer(&s[..j]) && !s[j + 1..].is_empty() && s[j + 1..].chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}


impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TokenizeErrorKind::InvalidSymbol(err) => {
                write!(f, "[Tokenize Error] {} @ line {}", err, self.line)
            }
        }
    }
}


#[cfg(test)]
#[path = "./tokenize_test.rs"]
mod tokenize_test;
