/// The evaluator module runs the Pratt evaluation loop.
///
/// The evaluator owns the session state (stream, registers, heap) and
/// exposes the single recursive `expression` operation that is
/// simultaneously the parser and the interpreter: tokens are consumed once,
/// dispatched by position (NUD or LED), and reduced to a value on the spot.
///
/// # Responsibilities
/// - Dispatches every token by kind and position, with no default action.
/// - Implements arithmetic, assignment, sequencing, and the quote/call
///   mechanism.
/// - Reports evaluation errors such as division by zero or bad addresses.
pub mod evaluator;
/// The heap module stores quoted code for later replay.
///
/// Quoted blocks live in an append-only token arena, each prefixed by a
/// length tag. Blocks are addressed by the index of their tag and validated
/// only when fetched.
pub mod heap;
/// The lexer module tokenizes source code for the evaluator.
///
/// The lexer reads raw source text and produces typed tokens for numbers,
/// keywords, operators, and identifiers. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Skips whitespace and `#` line comments.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The precedence module ranks tokens in infix/postfix position.
///
/// Defines the ordered precedence levels and the lookup deciding how
/// eagerly the evaluation loop keeps consuming LED tokens versus returning
/// to the enclosing call.
pub mod precedence;
/// The registers module provides named mutable storage.
///
/// Registers back the language's variables: an append-only file of
/// `(alias, value)` slots addressed by index, with linear alias resolution
/// and bounds-checked access.
pub mod registers;
/// The stream module holds the live token queue.
///
/// A double-ended queue consumed front-to-back, supporting the front
/// insertion used to inject fresh source and replayed heap code.
pub mod stream;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum (integers and reals) together with promoting,
/// checked arithmetic: integer results stay exact, mixed operands become
/// reals, and division is always true division.
pub mod value;
