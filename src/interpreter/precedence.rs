use crate::{error::EvalError, interpreter::lexer::Token};

/// Establishes the various precedence levels.
///
/// Rather than being associated directly with a token, a given precedence
/// level gets passed in as an argument whenever a given token is dispatched.
/// For example, subtraction is dispatched using `Additive`, while negation
/// is dispatched using `Unary`, even though both are associated with the
/// `-` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// The floor: end of input and closing delimiters report this level.
    None,
    /// `;`
    Semicolon,
    /// `<-`
    Assignment,
    /// `+` and `-`
    Additive,
    /// `*` and `/`
    Multiplicative,
    /// `^`
    Power,
    /// Prefix operators such as negation, `print`, and the trig keywords.
    Unary,
    /// `!`
    Factorial,
    /// `@`
    Dereference,
}

impl Precedence {
    /// The level immediately below this one.
    ///
    /// Parsing an operand one level below the operator's own level is what
    /// makes `^`, `<-` and `@` right-associative.
    #[must_use]
    pub const fn lowered(self) -> Self {
        match self {
            Self::None | Self::Semicolon => Self::None,
            Self::Assignment => Self::Semicolon,
            Self::Additive => Self::Assignment,
            Self::Multiplicative => Self::Additive,
            Self::Power => Self::Multiplicative,
            Self::Unary => Self::Power,
            Self::Factorial => Self::Unary,
            Self::Dereference => Self::Factorial,
        }
    }
}

/// Looks up the precedence of a token in infix/postfix position.
///
/// Not all tokens handled here are actual LEDs: `)` and `}` serve no other
/// function than to report a level of `None` so the evaluation loop hands
/// control back to the enclosing call, and an exhausted stream does the
/// same. A token with no entry at all is a dispatch error, never silently
/// skipped.
///
/// # Errors
/// Returns [`EvalError::InvalidLed`] for tokens that cannot appear in
/// infix/postfix position.
pub fn led_precedence(token: Option<&Token>) -> Result<Precedence, EvalError> {
    let Some(token) = token else {
        return Ok(Precedence::None);
    };

    match token {
        Token::RParen | Token::RBrace => Ok(Precedence::None),
        Token::Semicolon => Ok(Precedence::Semicolon),
        Token::Assign => Ok(Precedence::Assignment),
        Token::Plus | Token::Minus => Ok(Precedence::Additive),
        Token::Star | Token::Slash => Ok(Precedence::Multiplicative),
        Token::Caret => Ok(Precedence::Power),
        Token::Bang => Ok(Precedence::Factorial),
        other => Err(EvalError::InvalidLed { token: other.to_string() }),
    }
}
