use thiserror::Error;

/// An error raised by exact arithmetic.
#[derive(Error, Copy, Clone, PartialEq, Eq, Debug)]
pub enum MathError {
    /// A division whose divisor is the field zero or the zero polynomial.
    #[error("attempted to divide by zero")]
    DivisionByZero,
    /// A reduced fraction whose numerator or denominator does not fit in an `i64`.
    #[error("fraction overflowed the representable range")]
    Overflow,
}

/// Unwraps the result of a checked operation, panicking with its error.
#[inline]
pub(crate) fn or_panic<T>(result: Result<T, MathError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}
