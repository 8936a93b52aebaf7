//! Builtin operator dispatch.

use lazy_static::lazy_static;

use std::collections::HashMap;
use std::fmt;

use log::debug;

use crate::eval_err::EvalErr;
use crate::number::Number;
use crate::sexp::Value;
use crate::symbol::Symbol;

macro_rules! builtins {
    [$($n:tt : $x:expr),*] => {
        {
            let mut m = HashMap::new();
            $(
                m.insert(
                    $n,
                    BuiltIn {
                        name: stringify!($x),
                        fun: $x,
                    },
                );
            )*
            m
        }
    };
}

lazy_static! {
    pub static ref BUILTINS: HashMap<&'static str, BuiltIn> =
        builtins!["+": add, "-": sub, "*": mul, "/": div, "%": rem];
}

pub struct BuiltIn {
    name: &'static str,
    fun: fn(Vec<Number>) -> Value,
}

impl BuiltIn {
    pub fn call(&self, args: Vec<Number>) -> Value {
        (self.fun)(args)
    }
}

impl fmt::Debug for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[BUILTIN_{} @ {:p}]", self.name, &self.fun)
    }
}

impl fmt::Display for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[BUILTIN_{}]", self.name)
    }
}


/// Applies an operator to already-reduced arguments. Every argument must be
/// numeric; the operator table is fixed.
pub fn apply(op: &Symbol, args: Vec<Value>) -> Value {
    let builtin = match BUILTINS.get(op.as_str()) {
        Some(builtin) => builtin,
        None => {
            debug!("no builtin bound to {}", op);
            return EvalErr::InvalidOperator.into();
        }
    };

    let mut nums = Vec::with_capacity(args.len());
    for arg in args {
        match arg {
            Value::Number(num) => nums.push(num),
            _ => return EvalErr::NonNumberOperand.into(),
        }
    }

    builtin.call(nums)
}


fn add(args: Vec<Number>) -> Value {
    fold(args, Number::checked_add)
}

fn sub(args: Vec<Number>) -> Value {
    // Unary minus is negation.
    if args.len() == 1 {
        return match args[0].checked_neg() {
            Ok(num) => num.into(),
            Err(err) => err.into(),
        };
    }
    fold(args, Number::checked_sub)
}

fn mul(args: Vec<Number>) -> Value {
    fold(args, Number::checked_mul)
}

fn div(args: Vec<Number>) -> Value {
    fold(args, Number::checked_div)
}

fn rem(args: Vec<Number>) -> Value {
    fold(args, Number::checked_rem)
}

// Left fold from the first argument; the first arithmetic error terminates
// the fold and the remaining arguments are discarded.
fn fold(args: Vec<Number>, op: fn(Number, Number) -> Result<Number, EvalErr>) -> Value {
    let mut iter = args.into_iter();
    let mut acc = match iter.next() {
        Some(num) => num,
        // Unreachable through the reducer, which never dispatches without
        // arguments.
        None => return EvalErr::MalformedExpression.into(),
    };

    for num in iter {
        acc = match op(acc, num) {
            Ok(next) => next,
            Err(err) => return err.into(),
        };
    }

    acc.into()
}


#[cfg(test)]
#[path = "./builtin_test.rs"]
mod builtin_test;
