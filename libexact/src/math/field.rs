use crate::math::MathError;

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};
use num_traits::{One, Zero};

/// A field whose operations lose no precision.
///
/// Every type implementing `Field` can be used as the coefficient type of a
/// [`Polynomial`](crate::Polynomial). Division must be exact: `(a / b) * b == a` for all
/// nonzero `b`. Floating-point types do not satisfy this and must not implement the trait.
///
/// The operators may panic when a result is not representable, or when dividing by
/// [zero](Zero::zero). The `checked_*` methods report those cases instead; their defaults defer
/// to the operators, so only types with a bounded representation need to override them.
pub trait Field:
    Clone
    + PartialEq
    + Debug
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    fn checked_add(&self, rhs: &Self) -> Result<Self, MathError> {
        Ok(self.clone() + rhs.clone())
    }

    fn checked_sub(&self, rhs: &Self) -> Result<Self, MathError> {
        Ok(self.clone() - rhs.clone())
    }

    fn checked_mul(&self, rhs: &Self) -> Result<Self, MathError> {
        Ok(self.clone() * rhs.clone())
    }

    /// Divides `self` by `rhs`, reporting division by zero.
    fn checked_div(&self, rhs: &Self) -> Result<Self, MathError> {
        if rhs.is_zero() {
            Err(MathError::DivisionByZero)
        } else {
            Ok(self.clone() / rhs.clone())
        }
    }
}
