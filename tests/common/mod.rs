use lispy::prelude::*;
use lispy::token::string_stream::StringStream;

/// Reduces every top-level expression in `input`, in order.
pub fn results(input: &str) -> Vec<Value> {
    let stream = StringStream::new(input).unwrap();
    let root = parse(stream).unwrap();
    root.children.iter().map(|expr| eval(read(expr))).collect()
}

/// Same, rendered the way the shell prints them.
pub fn printed(input: &str) -> Vec<String> {
    results(input).iter().map(|val| val.to_string()).collect()
}
