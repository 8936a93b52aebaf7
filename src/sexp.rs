//! Module for representing S-exps.

use std::fmt;
use std::str::FromStr;

use crate::eval_err::EvalErr;
use crate::number::Number;
use crate::parser::{self, ParseError};
use crate::reader;
use crate::symbol::Symbol;
use crate::token::string_stream::StringStream;
use crate::token::TokenizeError;


/// Runtime value. Exactly one variant at a time; an `Error` is terminal and
/// only ever propagated. `Sexpr` children are owned exclusively by their
/// parent, so dropping a value releases its whole tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(Number),
    Symbol(Symbol),
    Error(EvalErr),
    Sexpr(Vec<Value>),
}

#[derive(Debug)]
pub enum FromStrError {
    TokenizeError(TokenizeError),
    ParseError(ParseError),
}

impl Value {
    /// Renders an s-expression's children space-separated inside the given
    /// bracket pair; everything else renders as the bare primitive.
    pub fn write_expr(&self, f: &mut fmt::Formatter<'_>, open: char, close: char) -> fmt::Result {
        match self {
            Value::Number(num) => write!(f, "{}", num),
            Value::Symbol(sym) => write!(f, "{}", sym),
            Value::Error(err) => write!(f, "{}", err),
            Value::Sexpr(children) => {
                write!(f, "{}", open)?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    child.write_expr(f, open, close)?;
                }
                write!(f, "{}", close)
            }
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Sexpr(Vec::new())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_expr(f, '(', ')')
    }
}


impl FromStr for Value {
    type Err = FromStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stream = match StringStream::new(s) {
            Ok(stream) => stream,
            Err(err) => return Err(FromStrError::TokenizeError(err)),
        };

        match parser::parse_expr(&mut stream.peekable(), 0) {
            Ok(Some(ast)) => Ok(reader::read(&ast)),
            Ok(None) => Ok(Value::default()),
            Err(err) => Err(FromStrError::ParseError(err)),
        }
    }
}


// From<T> impls.
impl From<Number> for Value {
    fn from(num: Number) -> Self {
        Value::Number(num)
    }
}

impl From<Symbol> for Value {
    fn from(sym: Symbol) -> Self {
        Value::Symbol(sym)
    }
}

impl From<EvalErr> for Value {
    fn from(err: EvalErr) -> Self {
        Value::Error(err)
    }
}

impl From<Vec<Value>> for Value {
    fn from(children: Vec<Value>) -> Self {
        Value::Sexpr(children)
    }
}

impl From<i64> for Value {
    fn from(int: i64) -> Self {
        Value::Number(Number::Integer(int))
    }
}

impl From<f64> for Value {
    fn from(dbl: f64) -> Self {
        Value::Number(Number::Decimal(dbl))
    }
}


#[cfg(test)]
#[path = "./sexp_test.rs"]
mod sexp_test;
