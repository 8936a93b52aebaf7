use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use super::token::TokenInfo;
use super::tokenize::{tokenize_line, TokenStore, TokenizeError};

pub struct FileStream {
    tokens: TokenStore,
}

#[derive(Debug)]
pub enum FileStreamError {
    IoError(io::Error),
    TokenizeError(TokenizeError),
}

impl FileStream {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<FileStream, FileStreamError> {
        let file = File::open(path).map_err(FileStreamError::IoError)?;
        let reader = BufReader::new(file);

        let mut tokens = TokenStore::default();
        for (linum, line) in reader.lines().enumerate() {
            let line = line.map_err(FileStreamError::IoError)?;
            tokenize_line(&line, linum, &mut tokens).map_err(FileStreamError::TokenizeError)?;
        }

        Ok(FileStream { tokens })
    }
}

impl Iterator for FileStream {
    type Item = TokenInfo;

    fn next(&mut self) -> Option<TokenInfo> {
        self.tokens.pop_front()
    }
}

impl fmt::Display for FileStreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileStreamError::IoError(err) => write!(f, "{}", err),
            FileStreamError::TokenizeError(err) => write!(f, "{}", err),
        }
    }
}
