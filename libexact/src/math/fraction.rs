use crate::math::error::or_panic;
use crate::math::{gcd, Field, MathError};

use core::cmp::Ordering;
use core::convert::TryFrom;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_traits::{One, Zero};

/// An exact rational number `numer / denom`.
///
/// A `Fraction` is always kept in lowest terms:
///
/// - the denominator is positive,
/// - `gcd(|numer|, denom) == 1`,
/// - zero is uniquely represented as `0 / 1`.
///
/// Arithmetic is carried out on 128-bit intermediates and reduced before being narrowed back to
/// `i64`. A reduced result outside the representable range (numerator in
/// `i64::MIN + 1..=i64::MAX`, denominator in `1..=i64::MAX`) is an overflow. The `checked_*`
/// methods report overflow and division by zero as a [`MathError`]; the operators panic on them,
/// like integer operators do.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Fraction {
    numer: i64,
    denom: i64,
}

impl Fraction {
    /// Creates a fraction in lowest terms.
    ///
    /// A zero numerator always yields `0 / 1`, whatever the denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero and the numerator is not, or if the numerator is
    /// `i64::MIN` after reduction.
    pub fn new(numer: i64, denom: i64) -> Self {
        or_panic(Self::try_new(numer, denom))
    }

    /// Creates a fraction in lowest terms, reporting a zero denominator.
    pub fn try_new(numer: i64, denom: i64) -> Result<Self, MathError> {
        Self::reduce(i128::from(numer), i128::from(denom))
    }

    /// The numerator, in lowest terms.
    #[inline]
    pub fn numer(&self) -> i64 {
        self.numer
    }

    /// The denominator, in lowest terms. Always positive.
    #[inline]
    pub fn denom(&self) -> i64 {
        self.denom
    }

    /// Whether the fraction is an integer.
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom == 1
    }

    /// Whether the fraction is strictly less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numer < 0
    }

    pub fn checked_add(&self, rhs: &Self) -> Result<Self, MathError> {
        let (a, b) = self.wide();
        let (c, d) = rhs.wide();
        Self::reduce(a * d + c * b, b * d)
    }

    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, MathError> {
        let (a, b) = self.wide();
        let (c, d) = rhs.wide();
        Self::reduce(a * d - c * b, b * d)
    }

    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, MathError> {
        let (a, b) = self.wide();
        let (c, d) = rhs.wide();
        Self::reduce(a * c, b * d)
    }

    /// Divides `self` by `rhs`. Dividing by zero is a [`MathError::DivisionByZero`].
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, MathError> {
        if rhs.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        let (a, b) = self.wide();
        let (c, d) = rhs.wide();
        Self::reduce(a * d, b * c)
    }

    /// Adds one to `self` in place.
    pub fn increment(&mut self) -> &mut Self {
        *self += Self::one();
        self
    }

    /// Subtracts one from `self` in place.
    pub fn decrement(&mut self) -> &mut Self {
        *self -= Self::one();
        self
    }

    #[inline]
    fn wide(&self) -> (i128, i128) {
        (i128::from(self.numer), i128::from(self.denom))
    }

    /// Reduces `numer / denom` to lowest terms and narrows it to `i64`.
    ///
    /// The inputs are products and sums of at most two `i64` products whose magnitudes are below
    /// `2^63`, so they cannot overflow `i128`.
    fn reduce(numer: i128, denom: i128) -> Result<Self, MathError> {
        if numer == 0 {
            return Ok(Self::zero());
        }
        if denom == 0 {
            return Err(MathError::DivisionByZero);
        }

        let divisor = gcd(numer.unsigned_abs(), denom.unsigned_abs()) as i128;
        let (mut numer, mut denom) = (numer / divisor, denom / divisor);
        if denom < 0 {
            numer = -numer;
            denom = -denom;
        }

        match (i64::try_from(numer), i64::try_from(denom)) {
            (Ok(numer), Ok(denom)) if numer != i64::MIN => Ok(Self { numer, denom }),
            _ => Err(MathError::Overflow),
        }
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Self::new(n, 1)
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self { numer: 0, denom: 1 }
    }

    fn is_zero(&self) -> bool {
        self.numer == 0
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self { numer: 1, denom: 1 }
    }
}

impl Field for Fraction {
    fn checked_add(&self, rhs: &Self) -> Result<Self, MathError> {
        Fraction::checked_add(self, rhs)
    }

    fn checked_sub(&self, rhs: &Self) -> Result<Self, MathError> {
        Fraction::checked_sub(self, rhs)
    }

    fn checked_mul(&self, rhs: &Self) -> Result<Self, MathError> {
        Fraction::checked_mul(self, rhs)
    }

    fn checked_div(&self, rhs: &Self) -> Result<Self, MathError> {
        Fraction::checked_div(self, rhs)
    }
}

impl Ord for Fraction {
    /// Orders by the sign of the numerator of `self - other`.
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = self.wide();
        let (c, d) = other.wide();
        (a * d - c * b).cmp(&0)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Self {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

macro_rules! fraction_binop {
    ($($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident => $checked:ident)*) => {$(
        impl $Op for Fraction {
            type Output = Fraction;

            fn $op(self, rhs: Fraction) -> Fraction {
                or_panic(self.$checked(&rhs))
            }
        }

        impl $Op<i64> for Fraction {
            type Output = Fraction;

            fn $op(self, rhs: i64) -> Fraction {
                self.$op(Fraction::from(rhs))
            }
        }

        impl $Op<Fraction> for i64 {
            type Output = Fraction;

            fn $op(self, rhs: Fraction) -> Fraction {
                Fraction::from(self).$op(rhs)
            }
        }

        impl $OpAssign for Fraction {
            fn $op_assign(&mut self, rhs: Fraction) {
                *self = (*self).$op(rhs);
            }
        }

        impl $OpAssign<i64> for Fraction {
            fn $op_assign(&mut self, rhs: i64) {
                *self = (*self).$op(Fraction::from(rhs));
            }
        }
    )*};
}

fraction_binop! {
    Add, add, AddAssign, add_assign => checked_add
    Sub, sub, SubAssign, sub_assign => checked_sub
    Mul, mul, MulAssign, mul_assign => checked_mul
    Div, div, DivAssign, div_assign => checked_div
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! frac {
        ($n:expr) => {
            Fraction::new($n, 1)
        };
        ($n:expr, $d:expr) => {
            Fraction::new($n, $d)
        };
    }

    macro_rules! reduction_tests {
        ($($name:ident: ($n:expr, $d:expr) => ($rn:expr, $rd:expr))*) => {$(
            #[test]
            fn $name() {
                let frac = Fraction::new($n, $d);
                assert_eq!((frac.numer(), frac.denom()), ($rn, $rd));
            }
        )*};
    }

    mod reduction {
        use super::*;

        reduction_tests! {
            already_reduced:       (3, 4)    => (3, 4)
            common_factor:         (6, 8)    => (3, 4)
            negative_denominator:  (3, -6)   => (-1, 2)
            both_negative:         (-3, -6)  => (1, 2)
            zero_numerator:        (0, 5)    => (0, 1)
            zero_over_negative:    (0, -5)   => (0, 1)
            zero_over_zero:        (0, 0)    => (0, 1)
            integer:               (12, 4)   => (3, 1)
            max_numerator:         (i64::MAX, i64::MAX) => (1, 1)
        }
    }

    macro_rules! arith_tests {
        ($($name:ident: $lhs:expr, $op:tt, $rhs:expr => $res:expr)*) => {$(
            #[test]
            fn $name() {
                assert_eq!($lhs $op $rhs, $res);
            }
        )*};
    }

    mod arith {
        use super::*;

        arith_tests! {
            add:              frac!(1, 2), +, frac!(1, 3)  => frac!(5, 6)
            add_to_integer:   frac!(1, 2), +, frac!(1, 2)  => frac!(1)
            add_to_zero:      frac!(1, 2), +, frac!(-1, 2) => Fraction::zero()
            sub:              frac!(1, 2), -, frac!(1, 3)  => frac!(1, 6)
            sub_negative:     frac!(1, 3), -, frac!(1, 2)  => frac!(-1, 6)
            mul:              frac!(2, 3), *, frac!(9, 4)  => frac!(3, 2)
            mul_by_zero:      frac!(2, 3), *, frac!(0)     => Fraction::zero()
            div:              frac!(2, 3), /, frac!(4, 9)  => frac!(3, 2)
            div_negative:     frac!(2, 3), /, frac!(-4, 9) => frac!(-3, 2)
            add_int:          frac!(1, 2), +, 1            => frac!(3, 2)
            int_sub:          1,           -, frac!(1, 4)  => frac!(3, 4)
            int_div:          1,           /, frac!(3)     => frac!(1, 3)
        }
    }

    #[test]
    fn assign_ops() {
        let mut frac = frac!(1, 2);
        frac += frac!(1, 4);
        assert_eq!(frac, frac!(3, 4));
        frac -= 1;
        assert_eq!(frac, frac!(-1, 4));
        frac *= frac!(-2);
        assert_eq!(frac, frac!(1, 2));
        frac /= frac!(1, 8);
        assert_eq!(frac, frac!(4));
    }

    #[test]
    fn unary_ops() {
        assert_eq!(-frac!(3, 7), frac!(-3, 7));
        assert_eq!(-Fraction::zero(), Fraction::zero());
    }

    #[test]
    fn increment_decrement() {
        let mut frac = frac!(1, 2);
        frac.increment();
        assert_eq!(frac, frac!(3, 2));
        frac.decrement().decrement();
        assert_eq!(frac, frac!(-1, 2));
    }

    #[test]
    fn compare() {
        assert!(frac!(1, 3) < frac!(1, 2));
        assert!(frac!(-1, 2) < frac!(-1, 3));
        assert!(frac!(5, 2) > frac!(2));
        assert!(frac!(2, 4) == frac!(1, 2));
        assert!(frac!(2, 4) != frac!(1, 3));
        assert_eq!(frac!(i64::MAX, 2).cmp(&frac!(i64::MAX - 1, 2)), Ordering::Greater);
    }

    #[test]
    fn divide_by_zero_is_reported() {
        assert_eq!(frac!(1).checked_div(&Fraction::zero()), Err(MathError::DivisionByZero));
        assert_eq!(Fraction::try_new(1, 0), Err(MathError::DivisionByZero));
    }

    #[test]
    #[should_panic(expected = "attempted to divide by zero")]
    fn divide_by_zero_operator_panics() {
        let _ = frac!(1) / Fraction::zero();
    }

    #[test]
    fn overflow_is_reported() {
        let big = frac!(i64::MAX);
        assert_eq!(big.checked_add(&frac!(1)), Err(MathError::Overflow));
        assert_eq!(big.checked_mul(&big), Err(MathError::Overflow));
        assert_eq!(frac!(1, i64::MAX).checked_div(&frac!(i64::MAX)), Err(MathError::Overflow));
    }

    #[test]
    fn intermediates_do_not_overflow() {
        // (MAX / 2) * (2 / MAX) has an intermediate product far outside i64.
        let lhs = frac!(i64::MAX, 2);
        let rhs = frac!(2, i64::MAX);
        assert_eq!(lhs * rhs, frac!(1));
    }
}
