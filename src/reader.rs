//! Translation of syntax trees into runtime values.
//!
//! Translation never fails as a whole: a malformed or out-of-range numeric
//! literal degrades to an error value embedded at that position, discovered
//! only when the reducer later reaches it.

use crate::ast::{Ast, Tag};
use crate::eval_err::EvalErr;
use crate::number::Number;
use crate::sexp::Value;
use crate::symbol::ToSymbol;

pub fn read(ast: &Ast) -> Value {
    match ast.tag {
        // The i64 parse is range-checked; overflow degrades like any other
        // bad literal.
        Tag::Integer => match ast.contents.parse::<i64>() {
            Ok(int) => Number::Integer(int).into(),
            Err(_) => EvalErr::InvalidNumber.into(),
        },
        Tag::Decimal => match ast.contents.parse::<f64>() {
            Ok(dbl) => Number::Decimal(dbl).into(),
            Err(_) => EvalErr::InvalidNumber.into(),
        },
        // The tokenizer enforces the symbol policy; a leaf constructed some
        // other way degrades to an error value like a bad literal does.
        Tag::Symbol => match ast.contents.to_symbol() {
            Ok(sym) => sym.into(),
            Err(_) => EvalErr::InvalidOperator.into(),
        },
        Tag::Root | Tag::Sexpr => {
            let mut children = Vec::new();
            for child in &ast.children {
                if child.tag == Tag::Punct {
                    continue;
                }
                children.push(read(child));
            }
            Value::Sexpr(children)
        }
        // Punctuation is skipped by its parent; a bare punct node reads as
        // the empty expression.
        Tag::Punct => Value::default(),
    }
}


#[cfg(test)]
#[path = "./reader_test.rs"]
mod reader_test;
