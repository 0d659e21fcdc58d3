use crate::math::error::or_panic;
use crate::math::{Field, Fraction, MathError};

use core::iter::FromIterator;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A polynomial in one variable over an exact [`Field`].
///
/// Coefficients are stored by ascending power, so `coeffs()[i]` is the coefficient of `x^i`.
/// The representation is always canonical:
///
/// - there is at least one coefficient,
/// - the last coefficient is nonzero, unless the polynomial is zero,
/// - the zero polynomial is stored as exactly one zero coefficient, and has degree `-1`.
///
/// Every constructor and every mutating operation restores this form.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Polynomial<T: Field> {
    coeffs: Vec<T>,
}

/// Creates a polynomial with integer [`Fraction`] coefficients, by ascending power.
///
/// # Examples:
///
/// ```
/// use libexact::{poly, Fraction};
///
/// let p = poly![2, 3, 1]; // x^2 + 3x + 2
/// assert_eq!(p.degree(), 2);
/// assert_eq!(p.coeff(1), Fraction::new(3, 1));
/// assert!(poly![].is_zero());
/// ```
#[macro_export]
macro_rules! poly {
    ($($x:expr),+ $(,)?) => (
        $crate::Polynomial::new(vec![$($crate::Fraction::from($x as i64)),+])
    );

    () => {
        $crate::Polynomial::<$crate::Fraction>::zero()
    };
}

impl<T: Field> Polynomial<T> {
    /// Creates a polynomial from coefficients by ascending power.
    pub fn new(coeffs: Vec<T>) -> Self {
        let mut poly = Self { coeffs };
        poly.normalize();
        poly
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Self {
            coeffs: vec![T::zero()],
        }
    }

    /// The constant polynomial `1`.
    pub fn one() -> Self {
        Self::constant(T::one())
    }

    /// The polynomial `x`.
    pub fn x() -> Self {
        Self::monomial(T::one(), 1)
    }

    /// The constant polynomial `c`.
    pub fn constant(c: T) -> Self {
        Self::new(vec![c])
    }

    /// The monomial `c * x^n`.
    pub fn monomial(c: T, n: usize) -> Self {
        let mut coeffs = vec![T::zero(); n + 1];
        coeffs[n] = c;
        Self::new(coeffs)
    }

    /// Gets the degree of the polynomial. The zero polynomial has degree `-1`.
    #[inline]
    pub fn degree(&self) -> isize {
        if self.is_zero() {
            -1
        } else {
            self.coeffs.len() as isize - 1
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Returns the coefficient of `x^i`. Coefficients past the degree are zero.
    pub fn coeff(&self, i: usize) -> T {
        self.coeffs.get(i).cloned().unwrap_or_else(T::zero)
    }

    /// Returns the canonical coefficients by ascending power.
    #[inline]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// Returns the coefficient of the highest-degree term, or zero for the zero polynomial.
    #[inline]
    pub fn leading_coeff(&self) -> &T {
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Returns the polynomial scaled so its leading coefficient is one.
    ///
    /// The zero polynomial, and polynomials that are already monic, are returned unchanged.
    pub fn monic(&self) -> Self {
        or_panic(self.checked_monic())
    }

    /// Like [`monic`](Polynomial::monic), but reports coefficients that cannot be represented.
    pub fn checked_monic(&self) -> Result<Self, MathError> {
        let lc = self.leading_coeff();
        if lc.is_zero() || lc.is_one() {
            return Ok(self.clone());
        }
        self.coeffs
            .iter()
            .map(|c| c.checked_div(lc))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// Evaluates the polynomial at `arg` with Horner's rule.
    ///
    /// # Examples:
    ///
    /// ```
    /// use libexact::{poly, Fraction};
    ///
    /// // (x^2 - 4)(1) -> -3
    /// assert_eq!(poly![-4, 0, 1].eval(&Fraction::new(1, 1)), Fraction::new(-3, 1));
    /// ```
    pub fn eval(&self, arg: &T) -> T {
        or_panic(self.checked_eval(arg))
    }

    /// Like [`eval`](Polynomial::eval), but reports intermediate values that cannot be
    /// represented.
    pub fn checked_eval(&self, arg: &T) -> Result<T, MathError> {
        let mut terms = self.coeffs.iter().rev();
        let mut acc = terms.next().cloned().unwrap_or_else(T::zero);
        for c in terms {
            acc = acc.checked_mul(arg)?.checked_add(c)?;
        }
        Ok(acc)
    }

    /// Substitutes `inner` for the variable, yielding `self(inner(x))`.
    ///
    /// # Examples:
    ///
    /// ```
    /// use libexact::poly;
    ///
    /// // x^2 . (x + 1) -> x^2 + 2x + 1
    /// assert_eq!(poly![0, 0, 1].compose(&poly![1, 1]), poly![1, 2, 1]);
    /// ```
    pub fn compose(&self, inner: &Self) -> Self {
        or_panic(self.checked_compose(inner))
    }

    /// Like [`compose`](Polynomial::compose), but reports coefficients that cannot be
    /// represented.
    pub fn checked_compose(&self, inner: &Self) -> Result<Self, MathError> {
        let mut terms = self.coeffs.iter().rev();
        let mut acc = Self::constant(terms.next().cloned().unwrap_or_else(T::zero));
        for c in terms {
            acc = acc.checked_mul(inner)?;
            acc.coeffs[0] = acc.coeffs[0].checked_add(c)?;
            acc.normalize();
        }
        Ok(acc)
    }

    /// Adds `rhs` to `self`, reporting coefficients that cannot be represented.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, MathError> {
        self.zip_coeffs(rhs, T::checked_add)
    }

    /// Subtracts `rhs` from `self`, reporting coefficients that cannot be represented.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, MathError> {
        self.zip_coeffs(rhs, T::checked_sub)
    }

    /// Multiplies `self` by `rhs` as a full convolution, reporting coefficients that cannot be
    /// represented.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, MathError> {
        if self.is_zero() || rhs.is_zero() {
            return Ok(Self::zero());
        }
        let mut coeffs = vec![T::zero(); self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] = coeffs[i + j].checked_add(&a.checked_mul(b)?)?;
            }
        }
        Ok(Self::new(coeffs))
    }

    /// Combines the coefficients of `self` and `rhs` pairwise, padding the shorter with zeros.
    fn zip_coeffs<F>(&self, rhs: &Self, op: F) -> Result<Self, MathError>
    where
        F: Fn(&T, &T) -> Result<T, MathError>,
    {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        (0..len)
            .map(|i| op(&self.coeff(i), &rhs.coeff(i)))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// Strips trailing zero coefficients, keeping a single zero for the zero polynomial.
    fn normalize(&mut self) {
        while self.coeffs.len() > 1 && self.coeffs.last().map_or(false, T::is_zero) {
            self.coeffs.pop();
        }
        if self.coeffs.is_empty() {
            self.coeffs.push(T::zero());
        }
    }

    fn add_in_place(&mut self, rhs: &Self) {
        *self = or_panic(self.checked_add(rhs));
    }

    fn sub_in_place(&mut self, rhs: &Self) {
        *self = or_panic(self.checked_sub(rhs));
    }

    fn mul_in_place(&mut self, rhs: &Self) {
        *self = or_panic(self.checked_mul(rhs));
    }

    fn add_scalar_in_place(&mut self, c: &T) {
        self.coeffs[0] = self.coeffs[0].clone() + c.clone();
        self.normalize();
    }

    fn sub_scalar_in_place(&mut self, c: &T) {
        self.coeffs[0] = self.coeffs[0].clone() - c.clone();
        self.normalize();
    }

    fn scale_in_place(&mut self, c: &T) {
        if c.is_zero() {
            *self = Self::zero();
            return;
        }
        for coeff in self.coeffs.iter_mut() {
            *coeff = coeff.clone() * c.clone();
        }
        self.normalize();
    }
}

impl<T: Field> Default for Polynomial<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Field> From<T> for Polynomial<T> {
    fn from(c: T) -> Self {
        Self::constant(c)
    }
}

impl<T: Field> From<Vec<T>> for Polynomial<T> {
    fn from(coeffs: Vec<T>) -> Self {
        Self::new(coeffs)
    }
}

impl<T: Field> FromIterator<T> for Polynomial<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Compares against a bare scalar, treated as a polynomial of degree at most zero.
impl<T: Field> PartialEq<T> for Polynomial<T> {
    fn eq(&self, other: &T) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0] == *other
    }
}

impl<T: Field> Neg for Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(mut self) -> Polynomial<T> {
        for coeff in self.coeffs.iter_mut() {
            *coeff = -coeff.clone();
        }
        self
    }
}

impl<'a, T: Field> Neg for &'a Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        -self.clone()
    }
}

macro_rules! poly_binop {
    ($($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident => $in_place:ident, $scalar_in_place:ident)*) => {$(
        impl<T: Field> $Op for Polynomial<T> {
            type Output = Polynomial<T>;

            fn $op(mut self, rhs: Polynomial<T>) -> Polynomial<T> {
                self.$in_place(&rhs);
                self
            }
        }

        impl<'a, T: Field> $Op<&'a Polynomial<T>> for &'a Polynomial<T> {
            type Output = Polynomial<T>;

            fn $op(self, rhs: &'a Polynomial<T>) -> Polynomial<T> {
                let mut out = self.clone();
                out.$in_place(rhs);
                out
            }
        }

        impl<T: Field> $OpAssign for Polynomial<T> {
            fn $op_assign(&mut self, rhs: Polynomial<T>) {
                self.$in_place(&rhs);
            }
        }

        impl<'a, T: Field> $OpAssign<&'a Polynomial<T>> for Polynomial<T> {
            fn $op_assign(&mut self, rhs: &'a Polynomial<T>) {
                self.$in_place(rhs);
            }
        }

        impl<T: Field> $Op<T> for Polynomial<T> {
            type Output = Polynomial<T>;

            fn $op(mut self, rhs: T) -> Polynomial<T> {
                self.$scalar_in_place(&rhs);
                self
            }
        }

        impl<'a, T: Field> $Op<T> for &'a Polynomial<T> {
            type Output = Polynomial<T>;

            fn $op(self, rhs: T) -> Polynomial<T> {
                let mut out = self.clone();
                out.$scalar_in_place(&rhs);
                out
            }
        }

        impl<T: Field> $OpAssign<T> for Polynomial<T> {
            fn $op_assign(&mut self, rhs: T) {
                self.$scalar_in_place(&rhs);
            }
        }
    )*};
}

poly_binop! {
    Add, add, AddAssign, add_assign => add_in_place, add_scalar_in_place
    Sub, sub, SubAssign, sub_assign => sub_in_place, sub_scalar_in_place
    Mul, mul, MulAssign, mul_assign => mul_in_place, scale_in_place
}

impl Add<Polynomial<Fraction>> for Fraction {
    type Output = Polynomial<Fraction>;

    fn add(self, rhs: Polynomial<Fraction>) -> Polynomial<Fraction> {
        rhs + self
    }
}

impl Sub<Polynomial<Fraction>> for Fraction {
    type Output = Polynomial<Fraction>;

    fn sub(self, rhs: Polynomial<Fraction>) -> Polynomial<Fraction> {
        -rhs + self
    }
}

impl Mul<Polynomial<Fraction>> for Fraction {
    type Output = Polynomial<Fraction>;

    fn mul(self, rhs: Polynomial<Fraction>) -> Polynomial<Fraction> {
        rhs * self
    }
}
