//! Exact rational arithmetic and single-variable polynomial algebra.
//!
//! libexact has three layers:
//!
//! - [`Fraction`], a rational number kept in lowest terms, and [`Fp`], the integers modulo a
//!   prime. Both implement [`Field`].
//! - [`Polynomial<T>`](Polynomial) over any [`Field`], with exact long division, modulo, and a
//!   monic [gcd](poly_gcd).
//! - A scanner and recursive-descent parser that evaluate arithmetic expression text like
//!   `"(1 + 2) / -4"` to a [`Fraction`], reporting malformed text through coded
//!   [diagnostics](diagnostics::Diagnostic).
//!
//! Values can be emitted in several [formats](EmitFormat) through the [`Emit`] trait.

pub mod common;
pub mod diagnostics;

pub mod scanner;
pub use scanner::scan;

mod parser;
pub use parser::{parse_coefficients, parse_expression, ExprError};

mod math;
pub use math::{checked_poly_gcd, gcd, poly_gcd, Field, Fp, Fraction, MathError, Polynomial};

#[cfg(feature = "benchmark-internals")]
pub use math::{_binary_gcd, _euclidean_gcd};

mod emit;
pub use emit::{Emit, EmitFormat};

mod utils;
