/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between the integer
/// types used for addresses, lengths, and exponents without risking silent
/// wraparound. All functions return a `Result`, which is `Ok` if the
/// conversion is exact, or the caller-supplied error otherwise.
pub mod num;
