use super::*;

use std::fmt;

use crate::symbol::ToSymbol;


#[test]
fn display_atoms() {
    assert_eq!(Value::from(5).to_string(), "5");
    assert_eq!(Value::from(2.5).to_string(), "2.500000");
    assert_eq!(Value::from("+".to_symbol_or_panic()).to_string(), "+");
    assert_eq!(
        Value::from(EvalErr::DivisionByZero).to_string(),
        "error: division by zero"
    );
}

#[test]
fn display_empty() {
    assert_eq!(Value::default().to_string(), "()");
}

#[test]
fn display_nested() {
    let v: Value = "(* 2 (+ 1 1))".parse().unwrap();
    assert_eq!(v.to_string(), "(* 2 (+ 1 1))");
}

#[test]
fn from_str_reads_one_expr() {
    let v: Value = "(+ 2 3)".parse().unwrap();
    assert_eq!(
        v,
        Value::Sexpr(vec!["+".to_symbol_or_panic().into(), 2.into(), 3.into()])
    );
}

#[test]
fn from_str_empty_input() {
    assert_eq!("".parse::<Value>().unwrap(), Value::default());
}

#[test]
fn from_str_unbalanced() {
    assert!("(+ 1".parse::<Value>().is_err());
}


struct Bracketed<'a>(&'a Value, char, char);

impl fmt::Display for Bracketed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_expr(f, self.1, self.2)
    }
}

#[test]
fn configurable_brackets() {
    let v: Value = "(+ 1 (2))".parse().unwrap();
    assert_eq!(Bracketed(&v, '{', '}').to_string(), "{+ 1 {2}}");
}
