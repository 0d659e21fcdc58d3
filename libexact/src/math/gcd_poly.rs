//! Greatest common divisor of polynomials over a field.

use crate::math::error::or_panic;
use crate::math::{Field, MathError, Polynomial};

use log::{debug, trace};

/// Computes the monic greatest common divisor of two polynomials with the Euclidean algorithm.
///
/// The gcd of two zero polynomials is the zero polynomial. Otherwise the result is monic, and
/// divides both `a` and `b` with no remainder.
///
/// # Examples:
///
/// ```
/// use libexact::{poly, poly_gcd};
///
/// // gcd(x^2 - 1, x - 1) = x - 1
/// assert_eq!(poly_gcd(&poly![-1, 0, 1], &poly![-1, 1]), poly![-1, 1]);
/// ```
pub fn poly_gcd<T: Field>(a: &Polynomial<T>, b: &Polynomial<T>) -> Polynomial<T> {
    or_panic(checked_poly_gcd(a, b))
}

/// Like [`poly_gcd`], but reports coefficients that cannot be represented.
///
/// # Examples:
///
/// ```
/// use libexact::{poly, Fraction, MathError, Polynomial};
///
/// // (x + 1/2) % (x + i64::MAX) needs 1/2 - i64::MAX
/// let a = Polynomial::new(vec![Fraction::new(1, 2), Fraction::new(1, 1)]);
/// assert_eq!(a.checked_gcd(&poly![i64::MAX, 1]), Err(MathError::Overflow));
/// ```
pub fn checked_poly_gcd<T: Field>(
    a: &Polynomial<T>,
    b: &Polynomial<T>,
) -> Result<Polynomial<T>, MathError> {
    if a.is_zero() && b.is_zero() {
        return Ok(Polynomial::zero());
    }
    debug!("poly gcd of degrees {} and {}", a.degree(), b.degree());

    let mut a = a.clone();
    let mut b = b.clone();
    loop {
        if a.is_zero() {
            return b.checked_monic();
        }
        if b.is_zero() {
            return a.checked_monic();
        }
        // Neither divisor is zero here; only overflow can be reported.
        if a.degree() >= b.degree() {
            a = a.checked_div_rem(&b)?.1.checked_monic()?;
        } else {
            b = b.checked_div_rem(&a)?.1.checked_monic()?;
        }
        trace!("poly gcd reduced to degrees {} and {}", a.degree(), b.degree());
    }
}

impl<T: Field> Polynomial<T> {
    /// The monic greatest common divisor of `self` and `other`. See [`poly_gcd`].
    pub fn gcd(&self, other: &Self) -> Self {
        poly_gcd(self, other)
    }

    /// The monic greatest common divisor of `self` and `other`. See [`checked_poly_gcd`].
    pub fn checked_gcd(&self, other: &Self) -> Result<Self, MathError> {
        checked_poly_gcd(self, other)
    }
}
