//! Representation of evaluation errors.
//!
//! Errors here are ordinary values: the reducer wraps them in `Value::Error`
//! and propagates them as data until they are printed. Nothing in evaluation
//! raises or unwinds.

use std::fmt;

use self::EvalErr::*;


#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EvalErr {
    /// Literal failed to parse, or a literal or arithmetic result fell
    /// outside the representable numeric range.
    InvalidNumber,
    /// Operator applied to operands of two different numeric kinds.
    MismatchedTypes,
    /// Operator received a non-numeric argument.
    NonNumberOperand,
    /// `/` or `%` with a zero divisor.
    DivisionByZero,
    /// `%` applied to decimal operands.
    IncompatibleOperator,
    /// S-expression's first element is not an operator symbol.
    MalformedExpression,
    /// Operator outside the builtin set; unreachable by construction of the
    /// grammar, defined for completeness.
    InvalidOperator,
}

impl EvalErr {
    pub fn message(&self) -> &'static str {
        match self {
            InvalidNumber => "invalid number",
            MismatchedTypes => "mismatched types",
            NonNumberOperand => "cannot operate on non-number",
            DivisionByZero => "division by zero",
            IncompatibleOperator => "incompatible type for operator",
            MalformedExpression => "s-expression does not start with symbol",
            InvalidOperator => "invalid operator",
        }
    }
}

impl fmt::Display for EvalErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error: {}", self.message())
    }
}
