pub mod ast;
pub mod builtin;
pub mod eval_err;
pub mod interpreter;
pub mod number;
pub mod parser;
pub mod reader;
pub mod sexp;
pub mod symbol;
pub mod token;

pub mod prelude {
    pub use crate::ast::{Ast, Tag};
    pub use crate::eval_err::EvalErr;
    pub use crate::interpreter::eval;
    pub use crate::number::Number;
    pub use crate::parser::{parse, parse_expr, ParseError};
    pub use crate::reader::read;
    pub use crate::sexp::{FromStrError, Value};
    pub use crate::symbol::{Symbol, ToSymbol};
}
