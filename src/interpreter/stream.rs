use std::collections::VecDeque;

use crate::interpreter::lexer::Token;

/// The live token queue consumed by the evaluator.
///
/// The stream is consumed strictly front-to-back, but content can be pushed
/// onto the front: `evaluate` injects each new line of source there, and
/// `call` splices stored heap code back in the same way. End of input is the
/// exhausted queue, so reading past the end is idempotent: `peek` and
/// `advance` simply keep returning `None`.
#[derive(Debug, Default)]
pub struct Stream {
    tokens: VecDeque<Token>,
}

impl Stream {
    /// Creates an empty stream.
    #[must_use]
    pub fn new() -> Self {
        Self { tokens: VecDeque::new() }
    }

    /// Consumes and returns the next token, or `None` at end of input.
    pub fn advance(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }

    /// Returns the next token without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.front()
    }

    /// Pushes `tokens` onto the front of the stream, preserving their order.
    pub fn prepend<I>(&mut self, tokens: I)
        where I: IntoIterator<Item = Token>,
              I::IntoIter: DoubleEndedIterator
    {
        for token in tokens.into_iter().rev() {
            self.tokens.push_front(token);
        }
    }

    /// Drops any remaining tokens.
    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// Returns `true` when no tokens remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
