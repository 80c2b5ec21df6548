/// Represents a failure to tokenize source text.
///
/// Tokenization is all-or-nothing: the first unrecognized piece of input
/// aborts the whole scan and no partial token sequence is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// The offending lexeme. Usually a single unrecognized character, but it
    /// can also be a numeric literal too large to represent.
    pub lexeme:   String,
    /// Byte offset of the lexeme in the source text.
    pub position: usize,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Invalid token '{}' at byte {}.",
               self.lexeme, self.position)
    }
}

impl std::error::Error for LexError {}
