//! Reduction of values to their simplest equivalent form.

use log::trace;

use crate::builtin;
use crate::eval_err::EvalErr;
use crate::sexp::Value;

/// Reduces a value, consuming it. Ownership of every subtree transfers
/// linearly through the reduction; nothing is shared or revisited.
pub fn eval(value: Value) -> Value {
    let children = match value {
        Value::Sexpr(children) => children,
        // Numbers, symbols and errors are already in reduced form.
        _ => return value,
    };

    // All children reduce first, left to right, even if an early one errors.
    let mut reduced: Vec<Value> = children.into_iter().map(eval).collect();

    // The first error subsumes the whole expression.
    if let Some(pos) = reduced
        .iter()
        .position(|child| matches!(child, Value::Error(_)))
    {
        return reduced.swap_remove(pos);
    }

    // The empty s-expression is its own fixed point; a singleton unwraps.
    if reduced.len() <= 1 {
        return match reduced.pop() {
            Some(single) => single,
            None => Value::Sexpr(reduced),
        };
    }

    let first = reduced.remove(0);
    match first {
        Value::Symbol(sym) => {
            trace!("applying {} to {} args", sym, reduced.len());
            builtin::apply(&sym, reduced)
        }
        _ => EvalErr::MalformedExpression.into(),
    }
}


#[cfg(test)]
#[path = "./interpreter_test.rs"]
mod interpreter_test;
