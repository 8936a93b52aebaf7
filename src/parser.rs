//! Module for parsing lispy tokens into a syntax tree.

use std::fmt;
use std::iter::Peekable;

use log::debug;

use crate::ast::{Ast, Tag};
use crate::token::{Token, TokenInfo};

use self::ParseErrorReason::*;

const MAX_DEPTH: usize = 128;


#[derive(Debug)]
pub enum ParseErrorReason {
    DepthOverflow,
    UnmatchedOpen,
    UnmatchedClose,
}

#[derive(Debug)]
pub struct ParseError {
    reason: ParseErrorReason,
    // None when the stream ended before the offending token.
    token: Option<TokenInfo>,
}

impl ParseError {
    /// Whether the stream simply ended inside an open s-expression. Callers
    /// accumulating input line-by-line treat this as "keep reading".
    pub fn unfinished(&self) -> bool {
        matches!(self.reason, UnmatchedOpen) && self.token.is_none()
    }
}


/// Parses an entire token stream into a root node holding every top-level
/// expression in order.
pub fn parse<I: Iterator<Item = TokenInfo>>(tokens: I) -> Result<Ast, ParseError> {
    let mut peekable = tokens.peekable();
    let mut children = Vec::new();
    while let Some(expr) = parse_expr(&mut peekable, 0)? {
        children.push(expr);
    }

    let root = Ast::node(Tag::Root, children);
    debug!("parsed {} nodes", root.count_nodes());
    Ok(root)
}

/// Parses a single expression off the front of the stream. `Ok(None)` means
/// the stream held nothing further.
pub fn parse_expr<I: Iterator<Item = TokenInfo>>(
    tokens: &mut Peekable<I>,
    depth: usize,
) -> Result<Option<Ast>, ParseError> {
    if depth >= MAX_DEPTH {
        return Err(ParseError {
            reason: DepthOverflow,
            token: tokens.next(),
        });
    }

    skip_comments(tokens);
    let info = match tokens.next() {
        Some(info) => info,
        None => {
            return if depth == 0 {
                Ok(None)
            } else {
                Err(ParseError {
                    reason: UnmatchedOpen,
                    token: None,
                })
            };
        }
    };

    match info.token {
        Token::LeftParen => {
            let mut children = vec![Ast::leaf(Tag::Punct, "(")];
            loop {
                skip_comments(tokens);
                match tokens.peek() {
                    Some(TokenInfo {
                        token: Token::RightParen,
                        ..
                    }) => {
                        tokens.next();
                        children.push(Ast::leaf(Tag::Punct, ")"));
                        break;
                    }
                    Some(_) => {
                        if let Some(child) = parse_expr(tokens, depth + 1)? {
                            children.push(child);
                        }
                    }
                    None => {
                        return Err(ParseError {
                            reason: UnmatchedOpen,
                            token: None,
                        });
                    }
                }
            }
            Ok(Some(Ast::node(Tag::Sexpr, children)))
        }
        Token::RightParen => Err(ParseError {
            reason: UnmatchedClose,
            token: Some(info),
        }),
        Token::Atom(atom) => Ok(Some(Ast::leaf(atom.tag, atom.text))),
        // skip_comments leaves none of these behind.
        Token::Comment(_) => Ok(None),
    }
}

fn skip_comments<I: Iterator<Item = TokenInfo>>(tokens: &mut Peekable<I>) {
    while let Some(TokenInfo {
        token: Token::Comment(_),
        ..
    }) = tokens.peek()
    {
        tokens.next();
    }
}


impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Parse Error] {:?}", self.reason)?;
        if let Some(token) = &self.token {
            write!(f, ": {}", token)?;
        }
        Ok(())
    }
}


#[cfg(test)]
#[path = "./parser_test.rs"]
mod parser_test;
