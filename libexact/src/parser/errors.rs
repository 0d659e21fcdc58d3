//! Diagnostic errors produced by the parser.

use crate::diagnostics::{DiagnosticRecord, DiagnosticRegistry};

macro_rules! define_errors {
    ($($(#[doc = $doc:expr])+ $code:ident: $error:ident $gen_macro:tt)*) => {$(
        $(#[doc = $doc])+
        pub(crate) struct $error;

        impl DiagnosticRecord for $error {
            const CODE: &'static str = stringify!($code);
            const EXPLANATION: &'static str = concat!($($doc, "\n"),+);
        })*

        /// Diagnostic errors produced by the parser.
        pub(crate) struct ParseErrors;

        impl DiagnosticRegistry for ParseErrors {
            fn codes_with_explanations() -> Vec<(&'static str, &'static str)> {
                let mut vec = Vec::new();
                $(vec.push(($error::CODE, $error::EXPLANATION));)*
                vec
            }
        }

        $(
            macro_rules! $error $gen_macro
        )*
    };
}

define_errors! {
    ///This error fires on tokens that are not connected to a complete expression.
    ///
    ///For example, in the expression
    ///
    ///```text
    ///(1 + 2)(3 + 4)
    ///       ^^^^^^^- offending tokens
    ///```
    ///
    ///`(3 + 4)` follows the complete expression `(1 + 2)`, but there is no operator saying how
    ///the two should be combined. Products must be written out with `*`, as in `(1 + 2)*(3 + 4)`.
    P0001: ExtraTokens {
        ($span:expr) => {{
            use crate::diagnostics::*;

            Diagnostic::span_err(
                $span,
                "Unexpected extra tokens",
                ExtraTokens::CODE,
                "not connected to the expression".to_string(),
            )
            .with_help("operators between values must be written out, as in `2*(1+1)`")
        }}
    }

    ///This error fires on token sequences that are expected to parse as an expression, but do not.
    ///
    ///The following are examples of expressions that emit this error:
    ///
    ///```text
    ///1 + *
    ///    ^- offending token
    ///```
    ///
    ///```text
    ///1 /
    ///   ^- offending token: end of file
    ///```
    ///
    ///An empty input also emits this error, since it contains no expression at all.
    P0002: ExpectedExpr {
        ($span:expr, $found:expr) => {{
            use crate::diagnostics::*;

            Diagnostic::span_err(
                $span,
                format!("Expected an expression, found {}", $found),
                ExpectedExpr::CODE,
                "expected an expression".to_string(),
            )
        }}
    }

    ///A `-` that does not separate two terms is a negative sign, and must be directly followed by
    ///a numeral.
    ///
    ///The following are examples of expressions that emit this error:
    ///
    ///```text
    ///-(1 + 2)
    /// ^- expected a numeral
    ///```
    ///
    ///```text
    ///2 * --3
    ///     ^- expected a numeral
    ///```
    ///
    ///Negating a parenthesized expression can be written as a subtraction from zero, as in
    ///`0 - (1 + 2)`.
    P0003: ExpectedNumeral {
        ($span:expr, $minus_span:expr, $found:expr) => {{
            use crate::diagnostics::*;

            Diagnostic::span_err(
                $span,
                format!("Expected a numeral after `-`, found {}", $found),
                ExpectedNumeral::CODE,
                "expected a numeral".to_string(),
            )
            .with_spanned_note($minus_span, "negative sign here")
            .with_help("a negative sign applies only to numerals; consider subtracting from 0")
        }}
    }

    ///Every opening parenthesis must be closed by a matching `)`.
    ///
    ///For example, in the expression
    ///
    ///```text
    ///(1 + 2 * 3
    ///^- this `(` is never closed
    ///```
    ///
    ///the end of the expression is reached before the group opened by `(` is closed.
    P0004: UnclosedParen {
        ($span:expr, $found_span:expr, $found:expr) => {{
            use crate::diagnostics::*;

            Diagnostic::span_err(
                $span,
                "Unclosed delimiter `(`",
                UnclosedParen::CODE,
                "this delimiter is never closed".to_string(),
            )
            .with_spanned_note($found_span, format!("expected `)`, found {}", $found))
        }}
    }

    ///A closing parenthesis must have a matching `(` earlier in the expression.
    ///
    ///For example,
    ///
    ///```text
    ///1 + 2)
    ///     ^- unmatched closing delimiter
    ///```
    P0005: UnmatchedParen {
        ($span:expr) => {{
            use crate::diagnostics::*;

            Diagnostic::span_err(
                $span,
                "Unmatched closing delimiter `)`",
                UnmatchedParen::CODE,
                "has no matching `(`".to_string(),
            )
        }}
    }

    ///Numerals must fit in a signed 64-bit integer, so their magnitude can be at most
    ///`9223372036854775807`.
    ///
    ///```text
    ///99999999999999999999 / 3
    ///^^^^^^^^^^^^^^^^^^^^- out of range
    ///```
    ///
    ///Values that large cannot be represented exactly, and are rejected rather than approximated.
    P0006: NumeralOutOfRange {
        ($span:expr, $numeral:expr) => {{
            use crate::diagnostics::*;

            Diagnostic::span_err(
                $span,
                format!("Numeral `{}` is out of range", $numeral),
                NumeralOutOfRange::CODE,
                "does not fit in a 64-bit integer".to_string(),
            )
        }}
    }

    ///Division by a value that evaluates to zero has no meaning.
    ///
    ///```text
    ///1 / (2 - 2)
    ///    ^^^^^^^- evaluates to zero
    ///```
    P0007: ZeroDivisor {
        ($span:expr, $divisor_span:expr) => {{
            use crate::diagnostics::*;

            Diagnostic::span_err(
                $span,
                "Division by zero",
                ZeroDivisor::CODE,
                None,
            )
            .with_spanned_note($divisor_span, "this divisor evaluates to zero")
        }}
    }

    ///Every intermediate value of an expression is an exact fraction whose numerator and
    ///denominator must fit in a signed 64-bit integer once reduced to lowest terms.
    ///
    ///```text
    ///9223372036854775807 + 1
    ///^^^^^^^^^^^^^^^^^^^^^^^- overflows
    ///```
    ///
    ///Such an expression cannot be evaluated exactly, and is rejected rather than approximated.
    P0008: ValueOverflow {
        ($span:expr) => {{
            use crate::diagnostics::*;

            Diagnostic::span_err(
                $span,
                "Value overflowed the representable range",
                ValueOverflow::CODE,
                "numerator or denominator exceeds 64 bits".to_string(),
            )
        }}
    }
}
