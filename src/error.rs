use std::path::PathBuf;

/// Evaluation errors.
///
/// Contains all error types that can be raised while the evaluator is
/// consuming tokens: dispatch failures, missing delimiters, bad register or
/// heap addresses, and arithmetic failures such as division by zero.
pub mod eval_error;
/// Lexical errors.
///
/// Defines the error type produced when source text contains a character the
/// tokenizer does not recognize.
pub mod lex_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;

#[derive(Debug)]
/// Unifies every failure the public API can report.
pub enum Error {
    /// The source text could not be tokenized.
    Lex(LexError),
    /// The token sequence could not be evaluated.
    Eval(EvalError),
    /// The requested source file does not exist.
    FileNotFound(PathBuf),
    /// The requested source file is a directory.
    IsADirectory(PathBuf),
    /// The source file could not be read.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
            Self::FileNotFound(path) => {
                write!(f, "Fatal: '{}' doesn't exist", path.display())
            },
            Self::IsADirectory(path) => {
                write!(f, "Fatal: '{}' is a directory", path.display())
            },
            Self::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Eval(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::FileNotFound(_) | Self::IsADirectory(_) => None,
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
