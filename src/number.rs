//! Representation of lispy numbers.

use std::fmt;
use std::str;

use self::Number::*;
use crate::eval_err::EvalErr;


/// The two numeric kinds. They never coerce into each other; mixing them in
/// one operator application is an error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Decimal(f64),
}

impl Number {
    pub fn checked_add(self, other: Self) -> Result<Number, EvalErr> {
        match (self, other) {
            (Integer(a), Integer(b)) => or_invalid(a.checked_add(b)),
            (Decimal(a), Decimal(b)) => Ok(Decimal(a + b)),
            _ => Err(EvalErr::MismatchedTypes),
        }
    }

    pub fn checked_sub(self, other: Self) -> Result<Number, EvalErr> {
        match (self, other) {
            (Integer(a), Integer(b)) => or_invalid(a.checked_sub(b)),
            (Decimal(a), Decimal(b)) => Ok(Decimal(a - b)),
            _ => Err(EvalErr::MismatchedTypes),
        }
    }

    pub fn checked_mul(self, other: Self) -> Result<Number, EvalErr> {
        match (self, other) {
            (Integer(a), Integer(b)) => or_invalid(a.checked_mul(b)),
            (Decimal(a), Decimal(b)) => Ok(Decimal(a * b)),
            _ => Err(EvalErr::MismatchedTypes),
        }
    }

    pub fn checked_div(self, other: Self) -> Result<Number, EvalErr> {
        match (self, other) {
            (Integer(_), Integer(0)) => Err(EvalErr::DivisionByZero),
            // Non-zero divisor, so None can only mean i64::MIN / -1.
            (Integer(a), Integer(b)) => or_invalid(a.checked_div(b)),
            (Decimal(a), Decimal(b)) => {
                if b == 0.0 {
                    Err(EvalErr::DivisionByZero)
                } else {
                    Ok(Decimal(a / b))
                }
            }
            _ => Err(EvalErr::MismatchedTypes),
        }
    }

    pub fn checked_rem(self, other: Self) -> Result<Number, EvalErr> {
        match (self, other) {
            (Integer(_), Integer(0)) => Err(EvalErr::DivisionByZero),
            (Integer(a), Integer(b)) => or_invalid(a.checked_rem(b)),
            (Decimal(_), Decimal(_)) => Err(EvalErr::IncompatibleOperator),
            _ => Err(EvalErr::MismatchedTypes),
        }
    }

    /// Sign flip, preserving the numeric kind. Fails only for `i64::MIN`,
    /// whose negation is unrepresentable.
    pub fn checked_neg(self) -> Result<Number, EvalErr> {
        match self {
            Integer(i) => or_invalid(i.checked_neg()),
            Decimal(d) => Ok(Decimal(-d)),
        }
    }
}

// An overflowed integer operation lands outside the representable range,
// which is the same diagnostic an overflowed literal gets.
fn or_invalid(result: Option<i64>) -> Result<Number, EvalErr> {
    result.map(Integer).ok_or(EvalErr::InvalidNumber)
}


#[derive(Debug)]
pub struct ParseNumberError(String);

impl str::FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let integer = s.parse::<i64>();
        if let Ok(int) = integer {
            return Ok(Integer(int));
        }

        let decimal = s.parse::<f64>();
        if let Ok(d) = decimal {
            return Ok(Decimal(d));
        }

        Err(ParseNumberError(s.to_string()))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Integer(i) => write!(f, "{}", i),
            // Fixed six-digit fractional format.
            Decimal(d) => write!(f, "{:.6}", d),
        }
    }
}


#[cfg(test)]
#[path = "./number_test.rs"]
mod number_test;
