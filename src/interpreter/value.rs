use std::fmt;

use crate::{
    error::EvalError,
    interpreter::evaluator::EvalResult,
    util::num::i64_to_u32_checked,
};

/// Represents a runtime value in the interpreter.
///
/// Every expression evaluates to one of these. Register addresses are plain
/// `Integer` values; nothing at the type level distinguishes an address from
/// the value stored at it. Keeping them apart is the program's job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// An integer value (64 bit integer).
    Integer(i64),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r}"),
            Self::Integer(n) => write!(f, "{n}"),
        }
    }
}

impl Value {
    /// Returns the value as an `f64`, promoting integers.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn as_real(self) -> f64 {
        match self {
            Self::Real(r) => r,
            Self::Integer(n) => n as f64,
        }
    }

    /// Returns the value truncated toward zero to an `i64`.
    ///
    /// This is the conversion applied wherever a value is about to be used
    /// as a register or heap address, or as the factorial operand.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn truncated(self) -> i64 {
        match self {
            Self::Real(r) => r as i64,
            Self::Integer(n) => n,
        }
    }

    /// Returns `true` when the value is exactly zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Real(r) => r == 0.0,
            Self::Integer(n) => n == 0,
        }
    }

    /// Negates the value.
    ///
    /// # Errors
    /// Returns [`EvalError::Overflow`] when negating `i64::MIN`.
    pub fn neg(self) -> EvalResult<Self> {
        match self {
            Self::Real(r) => Ok(Self::Real(-r)),
            Self::Integer(n) => {
                n.checked_neg().map(Self::Integer).ok_or(EvalError::Overflow)
            },
        }
    }

    /// Adds two values. Integer operands stay integers; mixed operands are
    /// promoted to reals.
    ///
    /// # Errors
    /// Returns [`EvalError::Overflow`] when integer addition overflows.
    pub fn add(self, rhs: Self) -> EvalResult<Self> {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => {
                a.checked_add(b).map(Self::Integer).ok_or(EvalError::Overflow)
            },
            _ => Ok(Self::Real(self.as_real() + rhs.as_real())),
        }
    }

    /// Subtracts `rhs` from the value. Integer operands stay integers; mixed
    /// operands are promoted to reals.
    ///
    /// # Errors
    /// Returns [`EvalError::Overflow`] when integer subtraction overflows.
    pub fn sub(self, rhs: Self) -> EvalResult<Self> {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => {
                a.checked_sub(b).map(Self::Integer).ok_or(EvalError::Overflow)
            },
            _ => Ok(Self::Real(self.as_real() - rhs.as_real())),
        }
    }

    /// Multiplies two values. Integer operands stay integers; mixed operands
    /// are promoted to reals.
    ///
    /// # Errors
    /// Returns [`EvalError::Overflow`] when integer multiplication
    /// overflows.
    pub fn mul(self, rhs: Self) -> EvalResult<Self> {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => {
                a.checked_mul(b).map(Self::Integer).ok_or(EvalError::Overflow)
            },
            _ => Ok(Self::Real(self.as_real() * rhs.as_real())),
        }
    }

    /// Divides the value by `rhs`.
    ///
    /// Division is true division: the result is always `Real`, even for two
    /// integer operands that divide evenly.
    ///
    /// # Errors
    /// Returns [`EvalError::DivisionByZero`] when `rhs` is zero.
    ///
    /// # Example
    /// ```
    /// use prattle::interpreter::value::Value;
    ///
    /// let q = Value::Integer(5).div(Value::Integer(2)).unwrap();
    /// assert_eq!(q, Value::Real(2.5));
    /// ```
    pub fn div(self, rhs: Self) -> EvalResult<Self> {
        if rhs.is_zero() {
            return Err(EvalError::DivisionByZero);
        }

        Ok(Self::Real(self.as_real() / rhs.as_real()))
    }

    /// Raises the value to `exponent`.
    ///
    /// An integer base with a non-negative integer exponent uses checked
    /// integer exponentiation and yields an exact integer. Negative integer
    /// exponents and real operands are computed with `powf`.
    ///
    /// # Errors
    /// Returns [`EvalError::Overflow`] when integer exponentiation
    /// overflows.
    ///
    /// # Example
    /// ```
    /// use prattle::interpreter::value::Value;
    ///
    /// let p = Value::Integer(2).pow(Value::Integer(10)).unwrap();
    /// assert_eq!(p, Value::Integer(1024));
    ///
    /// let q = Value::Integer(2).pow(Value::Integer(-1)).unwrap();
    /// assert_eq!(q, Value::Real(0.5));
    /// ```
    pub fn pow(self, exponent: Self) -> EvalResult<Self> {
        match (self, exponent) {
            (Self::Integer(base), Self::Integer(exp)) if exp >= 0 => {
                let exp = i64_to_u32_checked(exp, EvalError::Overflow)?;
                base.checked_pow(exp)
                    .map(Self::Integer)
                    .ok_or(EvalError::Overflow)
            },
            _ => Ok(Self::Real(self.as_real().powf(exponent.as_real()))),
        }
    }
}
