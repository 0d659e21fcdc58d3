//! Exact arithmetic: fractions, finite fields, and polynomials over them.
//!
//! Everything here is computed exactly. There is no floating-point approximation anywhere, so
//! results that cannot be represented are reported as a [`MathError`] rather than rounded.

mod error;
pub use error::MathError;

mod field;
pub use field::Field;

mod gcd;
pub use gcd::gcd;
#[cfg(feature = "benchmark-internals")]
pub use gcd::{_binary_gcd, _euclidean_gcd};

mod fraction;
pub use fraction::Fraction;

mod finite_field;
pub use finite_field::Fp;

mod poly;
pub use poly::Polynomial;

mod poly_div;

mod gcd_poly;
pub use gcd_poly::{checked_poly_gcd, poly_gcd};

#[cfg(test)]
mod proptests;
