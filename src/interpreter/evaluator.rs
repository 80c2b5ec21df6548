use std::{f64::consts, fs, path::Path};

use crate::{
    error::{Error, EvalError},
    interpreter::{
        heap::Heap,
        lexer::{Token, tokenize},
        precedence::{Precedence, led_precedence},
        registers::Registers,
        stream::Stream,
        value::Value,
    },
    util::num::usize_to_i64_checked,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Maximum depth of nested `expression` calls.
///
/// Deeply nested source and `call`-of-`call` chains grow the native call
/// stack; past this depth evaluation fails with a dedicated error instead.
pub const MAX_RECURSION_DEPTH: usize = 256;

/// An environment for evaluating expressions.
///
/// Encapsulates the token stream, the register file, and the heap as state
/// shared across recursive calls to `expression`, freeing each call from
/// having to thread that state through explicitly.
///
/// One `Evaluator` is one session: repeated [`evaluate`](Self::evaluate)
/// calls persistently grow both the registers and the heap, which is how
/// variables and quoted code survive across lines of a REPL.
pub struct Evaluator {
    stream:    Stream,
    registers: Registers,
    heap:      Heap,
    depth:     usize,
}

#[allow(clippy::new_without_default)]
impl Evaluator {
    /// Creates a fresh session with no registers and an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self { stream:    Stream::new(),
               registers: Registers::new(),
               heap:      Heap::new(),
               depth:     0, }
    }

    /// Tokenizes `source`, injects it into the session's stream, and
    /// evaluates one top-level expression.
    ///
    /// Register and heap mutations made before a failure are kept; session
    /// state is cumulative and never rolled back.
    ///
    /// # Errors
    /// Returns an [`Error`] wrapping the lexical or evaluation failure. No
    /// partial result is produced.
    ///
    /// # Examples
    /// ```
    /// use prattle::interpreter::{evaluator::Evaluator, value::Value};
    ///
    /// let mut session = Evaluator::new();
    ///
    /// // Bare identifiers are addresses; '@' reads the stored value.
    /// session.evaluate("x <- 41").unwrap();
    /// let result = session.evaluate("@x + 1").unwrap();
    /// assert_eq!(result, Value::Integer(42));
    /// ```
    pub fn evaluate(&mut self, source: &str) -> Result<Value, Error> {
        let tokens = tokenize(source)?;

        // Anything left over from an earlier line is unreachable behind its
        // end marker; drop it.
        self.stream.clear();
        self.stream.prepend(tokens);

        Ok(self.expression(Precedence::None)?)
    }

    /// Executes the code in the file at `path`.
    ///
    /// # Errors
    /// Fails with [`Error::FileNotFound`] or [`Error::IsADirectory`] before
    /// attempting to read; otherwise behaves like
    /// [`evaluate`](Self::evaluate).
    pub fn evaluate_file<P: AsRef<Path>>(&mut self, path: P) -> Result<Value, Error> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        if path.is_dir() {
            return Err(Error::IsADirectory(path.to_path_buf()));
        }

        let code = fs::read_to_string(path)?;

        self.evaluate(&code)
    }

    /// Returns `(alias, value)` pairs for every register, in allocation
    /// order.
    #[must_use]
    pub fn dump_registers(&self) -> Vec<(String, Value)> {
        self.registers
            .iter()
            .map(|register| (register.alias.clone(), register.value))
            .collect()
    }

    /// Returns a description of every heap token, length tags included.
    #[must_use]
    pub fn dump_heap(&self) -> Vec<String> {
        self.heap.iter().map(ToString::to_string).collect()
    }

    /// Pratt-parses an arithmetic expression, evaluating it as it goes.
    ///
    /// `level` is the minimum precedence: the LED loop keeps consuming only
    /// while the next token binds strictly tighter than `level`.
    fn expression(&mut self, level: Precedence) -> EvalResult<Value> {
        if self.depth >= MAX_RECURSION_DEPTH {
            return Err(EvalError::RecursionLimitExceeded { limit: MAX_RECURSION_DEPTH });
        }

        self.depth += 1;
        let result = self.expression_at(level);
        self.depth -= 1;

        result
    }

    fn expression_at(&mut self, level: Precedence) -> EvalResult<Value> {
        let mut acc = self.nud()?;

        while level < led_precedence(self.stream.peek())? {
            let Some(current) = self.stream.advance() else {
                break;
            };

            acc = self.led(current, acc)?;
        }

        Ok(acc)
    }

    /// Dispatches a token in prefix position.
    fn nud(&mut self) -> EvalResult<Value> {
        let Some(current) = self.stream.advance() else {
            return Err(EvalError::UnexpectedEndOfInput);
        };

        match current {
            Token::Integer(n) => Ok(Value::Integer(n)),

            Token::Real(r) => Ok(Value::Real(r)),

            Token::Identifier(alias) => {
                // An identifier evaluates to its address, not its value.
                address_value(self.registers.resolve(&alias))
            },

            Token::Local => self.local(),

            Token::Pi => Ok(Value::Real(consts::PI)),

            Token::Sin => {
                Ok(Value::Real(self.expression(Precedence::Unary)?.as_real().sin()))
            },

            Token::Cos => {
                Ok(Value::Real(self.expression(Precedence::Unary)?.as_real().cos()))
            },

            Token::Tan => {
                Ok(Value::Real(self.expression(Precedence::Unary)?.as_real().tan()))
            },

            Token::Sec => {
                reciprocal(self.expression(Precedence::Unary)?.as_real().cos())
            },

            Token::Csc => {
                reciprocal(self.expression(Precedence::Unary)?.as_real().sin())
            },

            Token::Cot => {
                reciprocal(self.expression(Precedence::Unary)?.as_real().tan())
            },

            Token::Minus => self.expression(Precedence::Unary)?.neg(),

            Token::LParen => self.grouping(),

            Token::Print => {
                let value = self.expression(Precedence::Unary)?;
                println!("{value}");

                Ok(value)
            },

            Token::At => self.dereference(),

            Token::LBrace => self.quote(),

            Token::Call => self.call(),

            other => Err(EvalError::InvalidNud { token: other.to_string() }),
        }
    }

    /// Dispatches a token in infix/postfix position, given the accumulator
    /// parsed so far.
    fn led(&mut self, current: Token, acc: Value) -> EvalResult<Value> {
        match current {
            Token::Plus => acc.add(self.expression(Precedence::Additive)?),

            Token::Minus => acc.sub(self.expression(Precedence::Additive)?),

            Token::Star => acc.mul(self.expression(Precedence::Multiplicative)?),

            Token::Slash => acc.div(self.expression(Precedence::Multiplicative)?),

            // Parsing the right operand one level down enforces right
            // association.
            Token::Caret => acc.pow(self.expression(Precedence::Power.lowered())?),

            Token::Bang => factorial(acc),

            // Discard the left-hand side, keeping only the right-hand side.
            Token::Semicolon => self.expression(Precedence::Semicolon),

            Token::Assign => {
                // Assignment is right-associative.
                let value = self.expression(Precedence::Assignment.lowered())?;

                // Truncate the accumulator so it can serve as a register
                // address.
                self.registers.write(acc.truncated(), value)?;

                // The assigned value is the expression's own result, like
                // Lisp's 'setq'.
                Ok(value)
            },

            other => Err(EvalError::InvalidLed { token: other.to_string() }),
        }
    }

    /// `( expr )`: we don't drive evaluation with the right parenthesis, so
    /// it is skipped as it is read.
    fn grouping(&mut self) -> EvalResult<Value> {
        let value = self.expression(Precedence::None)?;

        match self.stream.advance() {
            Some(Token::RParen) => Ok(value),
            _ => Err(EvalError::ExpectedClosingParen),
        }
    }

    /// `@ expr`: reads the register addressed by the operand.
    ///
    /// `@` is right-associative so that double (or higher) dereferencing,
    /// for example `@@alice`, works.
    fn dereference(&mut self) -> EvalResult<Value> {
        let address = self.expression(Precedence::Dereference.lowered())?;

        self.registers.read(address.truncated())
    }

    /// `local name`: declares a fresh register even when the alias already
    /// exists, and evaluates to the new register's address.
    fn local(&mut self) -> EvalResult<Value> {
        match self.stream.advance() {
            Some(Token::Identifier(alias)) => {
                address_value(self.registers.declare(&alias))
            },
            Some(other) => Err(EvalError::InvalidLocalName { token: other.to_string() }),
            None => Err(EvalError::UnexpectedEndOfInput),
        }
    }

    /// `{ ... }`: captures raw tokens up to the closing brace onto the
    /// heap.
    ///
    /// The block's contents are consumed flatly, without recursing into
    /// `expression`; malformed code inside a quote is only discovered when
    /// the block is later `call`ed.
    fn quote(&mut self) -> EvalResult<Value> {
        let mut code = Vec::new();

        loop {
            match self.stream.advance() {
                Some(Token::RBrace) => break,
                Some(token) => code.push(token),
                None => return Err(EvalError::UnterminatedQuote),
            }
        }

        address_value(self.heap.store(code)?)
    }

    /// `call expr`: replays a quoted block from the heap.
    ///
    /// The operand evaluates to a register address; that register holds the
    /// heap address of the stored code. The code is spliced onto the front
    /// of the live stream and evaluated with the current registers (dynamic
    /// scoping). Nothing fences it off from the rest of the stream, so
    /// replayed code can keep consuming tokens that follow the `call` in the
    /// original input.
    fn call(&mut self) -> EvalResult<Value> {
        let register = self.expression(Precedence::Unary)?;
        let code_address = self.registers.read(register.truncated())?;

        let code = self.heap.fetch(code_address.truncated())?.to_vec();
        self.stream.prepend(code);

        self.expression(Precedence::None)
    }
}

/// Converts a freshly allocated address into the value an expression yields.
fn address_value(address: usize) -> EvalResult<Value> {
    usize_to_i64_checked(address, EvalError::Overflow).map(Value::Integer)
}

/// Computes a factorial by hand: the accumulator is truncated to an integer
/// `n` and the running product `1..=n` is built up with checked
/// multiplication. `n <= 0` yields 1.
fn factorial(acc: Value) -> EvalResult<Value> {
    let n = acc.truncated();
    let mut product: i64 = 1;

    for j in 1..=n {
        product = product.checked_mul(j).ok_or(EvalError::Overflow)?;
    }

    Ok(Value::Integer(product))
}

/// Reciprocal for the `sec`/`csc`/`cot` family, with the zero denominator
/// reported as a division error.
fn reciprocal(denominator: f64) -> EvalResult<Value> {
    if denominator == 0.0 {
        return Err(EvalError::DivisionByZero);
    }

    Ok(Value::Real(1.0 / denominator))
}
