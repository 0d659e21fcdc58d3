//! Emit strategies for exact values.

use crate::math::{Field, Fp, Fraction, Polynomial};

use core::fmt;
use core::str::FromStr;

/// The format in which a value should be emitted.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum EmitFormat {
    /// Fully parenthesized form, where every coefficient is shown.
    /// For example, `x^2 - 1/2` is output as `(1)x^2+(-1/2)`.
    Simple,
    /// Human-readable form.
    /// For example, `x^2 - 1/2` is output as `x^2-1/2`, and `3x` as `3*x`.
    Visual,
    /// LaTeX math mode form.
    /// For example, `x^2 - 1/2` is output as `x^{2}-\frac{1}{2}`.
    Latex,
    /// Internal debug form.
    /// NB: this form is not stable, and no assumptions should be made about it.
    Debug,
}

impl Default for EmitFormat {
    fn default() -> Self {
        Self::Visual
    }
}

impl FromStr for EmitFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(Self::Simple),
            "visual" => Ok(Self::Visual),
            "latex" => Ok(Self::Latex),
            "debug" => Ok(Self::Debug),
            _ => Err(format!("unknown emit format \"{}\"", s)),
        }
    }
}

/// Implements the emission of a type in an [EmitFormat][EmitFormat].
pub trait Emit
where
    Self: fmt::Display + fmt::Debug,
{
    /// Emit `self` with the given [EmitFormat][EmitFormat].
    fn emit(&self, form: EmitFormat) -> String {
        match form {
            EmitFormat::Simple => self.emit_simple(),
            EmitFormat::Visual => self.emit_visual(),
            EmitFormat::Latex => self.emit_latex(),
            EmitFormat::Debug => self.emit_debug(),
        }
    }

    /// Emit `self` with the [simple emit format][EmitFormat::Simple]
    fn emit_simple(&self) -> String;

    /// Emit `self` with the [visual emit format][EmitFormat::Visual]
    fn emit_visual(&self) -> String;

    /// Emit `self` with the [LaTeX emit format][EmitFormat::Latex]
    fn emit_latex(&self) -> String;

    /// Emit `self` with the [debug emit format][EmitFormat::Debug]
    fn emit_debug(&self) -> String {
        format!("{:?}", self)
    }
}

/// Implements `core::fmt::Display` for a type implementing `Emit`, using the visual format.
#[doc(hidden)]
macro_rules! fmt_emit_impl {
    ($S:path) => {
        impl core::fmt::Display for $S {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.emit_visual())
            }
        }
    };
}

fmt_emit_impl!(Fraction);
impl Emit for Fraction {
    fn emit_simple(&self) -> String {
        format!("({})", self.emit_visual())
    }

    fn emit_visual(&self) -> String {
        if self.is_integer() {
            self.numer().to_string()
        } else {
            format!("{}/{}", self.numer(), self.denom())
        }
    }

    fn emit_latex(&self) -> String {
        if self.is_integer() {
            self.numer().to_string()
        } else {
            let sign = if self.is_negative() { "-" } else { "" };
            format!(
                "{}\\frac{{{}}}{{{}}}",
                sign,
                self.numer().unsigned_abs(),
                self.denom()
            )
        }
    }
}

impl<const P: u64> fmt::Display for Fp<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.emit_visual())
    }
}

impl<const P: u64> Emit for Fp<P> {
    fn emit_simple(&self) -> String {
        format!("({})", self.value())
    }

    fn emit_visual(&self) -> String {
        self.value().to_string()
    }

    fn emit_latex(&self) -> String {
        self.value().to_string()
    }
}

/// How the terms of a polynomial are joined.
struct TermStyle {
    /// Shows unit coefficients, and joins every term with `+` regardless of sign.
    explicit: bool,
    /// Placed between a coefficient and `x`.
    times: &'static str,
    /// Formats the exponent of `x`.
    power: fn(usize) -> String,
}

fn emit_terms<T, E>(poly: &Polynomial<T>, style: TermStyle, emit_coeff: E) -> String
where
    T: Field,
    E: Fn(&T) -> String,
{
    let mut out = String::with_capacity(8 * poly.coeffs().len());
    let one = T::one();
    let minus_one = -T::one();
    for (deg, coeff) in poly.coeffs().iter().enumerate().rev() {
        if coeff.is_zero() && !(deg == 0 && poly.is_zero()) {
            continue;
        }
        let first = out.is_empty();
        let emitted = emit_coeff(coeff);
        if !first && (style.explicit || !emitted.starts_with('-')) {
            out.push('+');
        }
        if deg == 0 {
            out.push_str(&emitted);
            continue;
        }
        if style.explicit {
            out.push_str(&emitted);
            out.push_str(style.times);
        } else if *coeff == minus_one {
            out.push('-');
        } else if *coeff != one {
            out.push_str(&emitted);
            out.push_str(style.times);
        }
        out.push('x');
        if deg > 1 {
            out.push_str(&(style.power)(deg));
        }
    }
    out
}

impl<T: Field + Emit> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.emit_visual())
    }
}

impl<T: Field + Emit> Emit for Polynomial<T> {
    fn emit_simple(&self) -> String {
        let style = TermStyle {
            explicit: true,
            times: "",
            power: |deg| format!("^{}", deg),
        };
        emit_terms(self, style, T::emit_simple)
    }

    fn emit_visual(&self) -> String {
        let style = TermStyle {
            explicit: false,
            times: "*",
            power: |deg| format!("^{}", deg),
        };
        emit_terms(self, style, T::emit_visual)
    }

    fn emit_latex(&self) -> String {
        let style = TermStyle {
            explicit: false,
            times: "",
            power: |deg| format!("^{{{}}}", deg),
        };
        emit_terms(self, style, T::emit_latex)
    }
}
