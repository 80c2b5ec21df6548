#[derive(Debug)]
/// Represents all errors that can be raised during the evaluation pass.
///
/// Since parsing and evaluation happen in a single pass, syntactic problems
/// (a token with no action in its position, a missing delimiter) and runtime
/// problems (a bad address, division by zero) surface through the same type.
pub enum EvalError {
    /// A token appeared in prefix position with no defined action there.
    InvalidNud {
        /// The token encountered.
        token: String,
    },
    /// A token appeared in infix/postfix position with no defined action
    /// there.
    InvalidLed {
        /// The token encountered.
        token: String,
    },
    /// Reached the end of input where an expression was expected.
    UnexpectedEndOfInput,
    /// `local` was followed by something other than an identifier.
    InvalidLocalName {
        /// The token encountered instead.
        token: String,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen,
    /// A quoted block was still open when the input ended.
    UnterminatedQuote,
    /// A register address lay outside the allocated range.
    AddressOutOfRange {
        /// The requested address, after truncation.
        address: i64,
        /// The number of registers currently allocated.
        size:    usize,
    },
    /// A heap address lay outside the stored token range.
    HeapOutOfRange {
        /// The requested address, after truncation.
        address: i64,
        /// The number of tokens currently on the heap.
        size:    usize,
    },
    /// The heap token at a called address was not an integer length tag.
    BadHeapLength {
        /// The heap address that was read.
        address: usize,
        /// The token found there.
        token:   String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Arithmetic operation overflowed.
    Overflow,
    /// The evaluator recursed past its fixed depth limit.
    RecursionLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNud { token } => write!(f, "Invalid nud: '{token}'."),

            Self::InvalidLed { token } => write!(f, "Invalid led: '{token}'."),

            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input."),

            Self::InvalidLocalName { token } => {
                write!(f, "Invalid local name: '{token}'.")
            },

            Self::ExpectedClosingParen => {
                write!(f, "Expected closing parenthesis ')' but none found.")
            },

            Self::UnterminatedQuote => {
                write!(f, "Quoted block never closed before end of input.")
            },

            Self::AddressOutOfRange { address, size } => write!(f,
                "Register address {address} is out of range; {size} registers are allocated."),

            Self::HeapOutOfRange { address, size } => write!(f,
                "Heap address {address} is out of range; {size} tokens are stored."),

            Self::BadHeapLength { address, token } => write!(f,
                "Expected a length tag at heap address {address}, found '{token}'."),

            Self::DivisionByZero => write!(f, "Division by zero."),

            Self::Overflow => {
                write!(f, "Integer overflow while trying to compute result.")
            },

            Self::RecursionLimitExceeded { limit } => {
                write!(f, "Recursion limit of {limit} exceeded.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
