use std::fmt;

use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Longest match wins, so `pint` lexes as one identifier rather than the
/// keyword `pi` followed by `nt`. Whitespace and `#` line comments are
/// skipped.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+|#[^\n]*")]
pub enum Token {
    /// Decimal literal tokens, such as `3.14` or `2.`.
    #[regex(r"[0-9]+\.[0-9]*", parse_real)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `pi`
    #[token("pi")]
    Pi,
    /// `sin`
    #[token("sin")]
    Sin,
    /// `cos`
    #[token("cos")]
    Cos,
    /// `tan`
    #[token("tan")]
    Tan,
    /// `sec`
    #[token("sec")]
    Sec,
    /// `csc`
    #[token("csc")]
    Csc,
    /// `cot`
    #[token("cot")]
    Cot,
    /// `print`
    #[token("print")]
    Print,
    /// `call`
    #[token("call")]
    Call,
    /// `local`
    #[token("local")]
    Local,
    /// `<-`
    #[token("<-")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `!`
    #[token("!")]
    Bang,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `@`
    #[token("@")]
    At,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// Identifier tokens; register aliases such as `x` or `alice`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Pi => f.write_str("pi"),
            Self::Sin => f.write_str("sin"),
            Self::Cos => f.write_str("cos"),
            Self::Tan => f.write_str("tan"),
            Self::Sec => f.write_str("sec"),
            Self::Csc => f.write_str("csc"),
            Self::Cot => f.write_str("cot"),
            Self::Print => f.write_str("print"),
            Self::Call => f.write_str("call"),
            Self::Local => f.write_str("local"),
            Self::Assign => f.write_str("<-"),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::Caret => f.write_str("^"),
            Self::Bang => f.write_str("!"),
            Self::Semicolon => f.write_str(";"),
            Self::At => f.write_str("@"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::LBrace => f.write_str("{"),
            Self::RBrace => f.write_str("}"),
            Self::Identifier(name) => f.write_str(name),
        }
    }
}

/// Parses a decimal literal from the current token slice.
fn parse_real(lex: &mut logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// A literal too large for `i64` is reported as a lexical error rather than
/// being truncated.
fn parse_integer(lex: &mut logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Tokenizes `source` eagerly into a vector of tokens.
///
/// Tokenization is deterministic: the same source always yields the same
/// sequence. The first unrecognized character aborts the scan.
///
/// # Errors
/// Returns a [`LexError`] carrying the offending lexeme and its byte offset
/// if any part of the input is not recognized.
///
/// # Examples
/// ```
/// use prattle::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 + 2").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Integer(1), Token::Plus, Token::Integer(2)]);
///
/// assert!(tokenize("1 ? 2").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        match token {
            Ok(token) => tokens.push(token),
            Err(()) => {
                return Err(LexError { lexeme:   lexer.slice().to_string(),
                                      position: lexer.span().start, });
            },
        }
    }

    Ok(tokens)
}
