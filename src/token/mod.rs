// Public exports.
pub use token::{Atom, Token, TokenInfo};
pub use tokenize::{tokenize_line, TokenStore, TokenizeError, TokenizeErrorKind};

// Public mods.
pub mod file_stream;
pub mod string_stream;
pub mod token;
pub mod tokenize;
