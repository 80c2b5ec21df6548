/// Safely converts a `usize` to `i64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value does not fit in an `i64`.
///
/// ## Example
/// ```
/// use prattle::util::num::usize_to_i64_checked;
///
/// let result = usize_to_i64_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42);
/// ```
pub fn usize_to_i64_checked<E>(value: usize, error: E) -> Result<i64, E> {
    i64::try_from(value).map_err(|_| error)
}

/// Safely converts an `i64` to a `usize` if and only if it can be
/// represented exactly.
///
/// ## Errors
/// Returns `Err(error)` if the value is negative or exceeds the maximum
/// representable `usize`.
///
/// ## Example
/// ```
/// use prattle::util::num::i64_to_usize_checked;
///
/// assert_eq!(i64_to_usize_checked(42, "out of range"), Ok(42));
/// assert_eq!(i64_to_usize_checked(-1, "out of range"), Err("out of range"));
/// ```
pub fn i64_to_usize_checked<E>(value: i64, error: E) -> Result<usize, E> {
    usize::try_from(value).map_err(|_| error)
}

/// Safely converts an `i64` to a `u32` if and only if it can be represented
/// exactly.
///
/// ## Errors
/// Returns `Err(error)` if the value is negative or exceeds `u32::MAX`.
pub fn i64_to_u32_checked<E>(value: i64, error: E) -> Result<u32, E> {
    u32::try_from(value).map_err(|_| error)
}
