use crate::math::{Field, MathError};

use core::ops::{Add, Div, Mul, Neg, Sub};
use num_traits::{One, Zero};

/// The integers modulo a prime `P`.
///
/// `P` must be prime and below `2^32` so that products of two residues fit in a `u64`; otherwise
/// division is not exact.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Fp<const P: u64>(u64);

impl<const P: u64> Fp<P> {
    /// Creates the residue of `value` modulo `P`.
    pub fn new(value: u64) -> Self {
        Self(value % P)
    }

    /// Creates the residue of a signed `value` modulo `P`.
    pub fn from_signed(value: i64) -> Self {
        Self(value.rem_euclid(P as i64) as u64)
    }

    /// The canonical representative in `0..P`.
    #[inline]
    pub fn value(self) -> u64 {
        self.0
    }

    fn pow(self, mut exp: u64) -> Self {
        let mut base = self;
        let mut acc = Self::one();
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc * base;
            }
            base = base * base;
            exp >>= 1;
        }
        acc
    }

    /// The multiplicative inverse, by Fermat's little theorem.
    pub fn inverse(self) -> Result<Self, MathError> {
        if self.is_zero() {
            Err(MathError::DivisionByZero)
        } else {
            Ok(self.pow(P - 2))
        }
    }
}

impl<const P: u64> Zero for Fp<P> {
    fn zero() -> Self {
        Self(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl<const P: u64> One for Fp<P> {
    fn one() -> Self {
        Self(1 % P)
    }
}

impl<const P: u64> Add for Fp<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self((self.0 + rhs.0) % P)
    }
}

impl<const P: u64> Sub for Fp<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self((self.0 + P - rhs.0) % P)
    }
}

impl<const P: u64> Mul for Fp<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0 % P)
    }
}

impl<const P: u64> Div for Fp<P> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics when dividing by zero.
    fn div(self, rhs: Self) -> Self {
        match rhs.inverse() {
            Ok(inv) => self * inv,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<const P: u64> Neg for Fp<P> {
    type Output = Self;

    fn neg(self) -> Self {
        Self((P - self.0) % P)
    }
}

impl<const P: u64> Field for Fp<P> {}
