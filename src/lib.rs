//! # prattle
//!
//! prattle is a tiny calculator language interpreted in a single Pratt
//! parsing pass: no syntax tree is built, tokens are evaluated as they are
//! consumed. Bare identifiers denote register *addresses*, `@` dereferences
//! them, and `{ ... }` / `call` store and replay un-evaluated code, giving
//! the language primitive, macro-like closures.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{evaluator::Evaluator, value::Value},
};

/// Provides unified error types for lexing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing or
/// evaluating code, plus the top-level `Error` the public API reports. Each
/// kind carries the detail needed to explain the failure (the offending
/// token, the bad address, the missing delimiter).
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, evaluator, file
///   access).
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together the lexer, the precedence table, the token
/// stream, the register file, the heap, and the evaluator loop to provide a
/// complete runtime for source code evaluation. It exposes the session type
/// ([`interpreter::evaluator::Evaluator`]) that front-ends drive.
///
/// # Responsibilities
/// - Coordinates all core components of the single-pass interpreter.
/// - Provides entry points for evaluating expressions and files.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// Reusable helpers for converting between the integer types used for
/// addresses, lengths, and exponents without silent data loss.
pub mod util;

/// Evaluates `source` in a fresh, throwaway session and returns the result.
///
/// Convenience for one-shot evaluation; anything that needs registers or
/// heap content to survive across calls should hold an
/// [`interpreter::evaluator::Evaluator`] instead.
///
/// # Errors
/// Returns an error if tokenization or evaluation fails.
///
/// # Examples
/// ```
/// use prattle::{get_result, interpreter::value::Value};
///
/// let result = get_result("3 + 4 * 5 + 6").unwrap();
/// assert_eq!(result, Value::Integer(29));
///
/// // 'x' names an address; '@' reads the value stored there.
/// let result = get_result("x <- 42 ; @x").unwrap();
/// assert_eq!(result, Value::Integer(42));
///
/// let result = get_result("3 / 0");
/// assert!(result.is_err());
/// ```
pub fn get_result(source: &str) -> Result<Value, Error> {
    let mut evaluator = Evaluator::new();

    evaluator.evaluate(source)
}
