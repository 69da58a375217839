use thiserror::Error;

/// Why a single line of BNF text failed to parse. Columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("illegal character '{ch}' at column {column}")]
    IllegalChar { ch: char, column: usize },
    #[error("unexpected token '{found}' at column {column}")]
    UnexpectedToken { found: String, column: usize },
    #[error("unmatched '(' at column {column}")]
    UnclosedParen { column: usize },
    #[error("trailing input '{found}' at column {column}")]
    TrailingInput { found: String, column: usize },
    #[error("unexpected end of input")]
    UnexpectedEnd,
}

#[derive(Debug, Error)]
pub enum Error {
    /// The cause is part of the message, not a chained source.
    #[error("line {line}: syntax error: {error}")]
    Syntax { line: usize, error: SyntaxError },
    #[error("line {line}: invalid token '{token}' for dpll mode in '{text}'")]
    Format {
        line: usize,
        token: String,
        text: String,
    },
    #[error("invalid option: {0}")]
    Config(String),
    #[error("internal error: {0}")]
    Internal(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
