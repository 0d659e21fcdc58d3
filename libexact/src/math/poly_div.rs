use crate::math::error::or_panic;
use crate::math::{Field, MathError, Polynomial};

use core::ops::{Div, Rem};
use log::trace;

impl<T: Field> Polynomial<T> {
    /// Divides `self` by `divisor`, returning `(quotient, remainder)` such that
    /// `self == quotient * divisor + remainder` and `remainder.degree() < divisor.degree()`.
    ///
    /// Dividing by the zero polynomial is a [`MathError::DivisionByZero`], and a coefficient
    /// that cannot be represented along the way is reported as well.
    ///
    /// For each `power` from `deg self - deg divisor` down to zero, the quotient term at `power`
    /// is the remainder's coefficient at `deg divisor + power` over the divisor's leading
    /// coefficient, and `term * divisor` is subtracted from the remainder.
    ///
    /// # Examples:
    ///
    /// ```
    /// use libexact::poly;
    ///
    /// // (x^2 - 2) / (x + 1) -> (x - 1, -1)
    /// assert_eq!(poly![-2, 0, 1].checked_div_rem(&poly![1, 1]), Ok((poly![-1, 1], poly![-1])));
    /// ```
    pub fn checked_div_rem(&self, divisor: &Self) -> Result<(Self, Self), MathError> {
        if divisor.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        let (deg_self, deg_div) = (self.degree(), divisor.degree());
        if deg_self < deg_div {
            return Ok((Self::zero(), self.clone()));
        }
        trace!("long division of degree {} by degree {}", deg_self, deg_div);

        let deg_div = deg_div as usize;
        let lc = divisor.leading_coeff();
        let mut rem = self.coeffs().to_vec();
        let mut quo = vec![T::zero(); deg_self as usize - deg_div + 1];
        for power in (0..quo.len()).rev() {
            let term = rem[deg_div + power].checked_div(lc)?;
            for (j, coeff) in divisor.coeffs().iter().enumerate() {
                rem[power + j] = rem[power + j].checked_sub(&term.checked_mul(coeff)?)?;
            }
            quo[power] = term;
        }
        // Every coefficient at or above the divisor's degree has been cancelled.
        rem.truncate(deg_div);
        Ok((Self::new(quo), Self::new(rem)))
    }

    /// Like [`checked_div_rem`](Polynomial::checked_div_rem), but panics when dividing by the
    /// zero polynomial or when a coefficient cannot be represented.
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        or_panic(self.checked_div_rem(divisor))
    }
}

macro_rules! poly_div_op {
    ($($Op:ident, $op:ident => $pick:tt)*) => {$(
        impl<T: Field> $Op for Polynomial<T> {
            type Output = Polynomial<T>;

            /// # Panics
            ///
            /// Panics when dividing by the zero polynomial.
            fn $op(self, rhs: Polynomial<T>) -> Polynomial<T> {
                self.div_rem(&rhs).$pick
            }
        }

        impl<'a, T: Field> $Op<&'a Polynomial<T>> for &'a Polynomial<T> {
            type Output = Polynomial<T>;

            /// # Panics
            ///
            /// Panics when dividing by the zero polynomial.
            fn $op(self, rhs: &'a Polynomial<T>) -> Polynomial<T> {
                self.div_rem(rhs).$pick
            }
        }
    )*};
}

poly_div_op! {
    Div, div => 0
    Rem, rem => 1
}
