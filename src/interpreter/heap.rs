use crate::{
    error::EvalError,
    interpreter::{evaluator::EvalResult, lexer::Token},
    util::num::{i64_to_usize_checked, usize_to_i64_checked},
};

/// The append-only token arena holding quoted code.
///
/// Each stored block is encoded as an `Integer` length tag followed by that
/// many raw tokens. A block's address is the index of its length tag. Heap
/// content is opaque data until `call` re-materializes it; nothing validates
/// the stored tokens at store time.
#[derive(Debug, Default)]
pub struct Heap {
    tokens: Vec<Token>,
}

impl Heap {
    /// Creates an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Appends a length tag followed by `code` and returns the address of
    /// the tag.
    ///
    /// # Errors
    /// Returns [`EvalError::Overflow`] if the block length does not fit the
    /// tag.
    pub fn store(&mut self, code: Vec<Token>) -> EvalResult<usize> {
        let address = self.tokens.len();
        let length = usize_to_i64_checked(code.len(), EvalError::Overflow)?;

        self.tokens.push(Token::Integer(length));
        self.tokens.extend(code);

        Ok(address)
    }

    /// Returns the code block whose length tag sits at `address`.
    ///
    /// The entry is validated before anything is read: the tag must be an
    /// `Integer` token and the tagged range must lie entirely inside the
    /// heap.
    ///
    /// # Errors
    /// - [`EvalError::HeapOutOfRange`] if `address` or the tagged range
    ///   falls outside the stored tokens.
    /// - [`EvalError::BadHeapLength`] if the token at `address` is not an
    ///   integer length tag.
    pub fn fetch(&self, address: i64) -> EvalResult<&[Token]> {
        let size = self.tokens.len();
        let out_of_range = |address| EvalError::HeapOutOfRange { address, size };

        let start = i64_to_usize_checked(address, out_of_range(address))?;
        if start >= size {
            return Err(out_of_range(address));
        }

        let length = match &self.tokens[start] {
            Token::Integer(length) => *length,
            other => {
                return Err(EvalError::BadHeapLength { address: start,
                                                      token:   other.to_string(), });
            },
        };
        let length = i64_to_usize_checked(length, out_of_range(address))?;

        let end = (start + 1).checked_add(length)
                             .filter(|end| *end <= size)
                             .ok_or_else(|| out_of_range(address))?;

        Ok(&self.tokens[start + 1..end])
    }

    /// Iterates over every stored token, length tags included.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Returns the number of stored tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` when nothing has been quoted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
