//! Diagnostic errors produced by the scanner.

use crate::diagnostics::{DiagnosticRecord, DiagnosticRegistry};

macro_rules! define_errors {
    ($($(#[doc = $doc:expr])+ $code:ident: $error:ident $gen_macro:tt)*) => {$(
        $(#[doc = $doc])+
        pub(crate) struct $error;

        impl DiagnosticRecord for $error {
            const CODE: &'static str = stringify!($code);
            const EXPLANATION: &'static str = concat!($($doc, "\n"),+);
        })*

        /// Diagnostic errors produced by the scanner.
        pub(crate) struct ScanErrors;

        impl DiagnosticRegistry for ScanErrors {
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
    ///An expression may only contain decimal digits, the operators `+`, `-`, `*`, `/`,
    ///parentheses, commas separating polynomial coefficients, and whitespace.
    ///
    ///This error is fired on any other character, for example
    ///
    ///```text
    ///1 + 2.5
    ///     ^- invalid token
    ///```
    ///
    ///Decimal points are not accepted because every value is an exact fraction; write `5/2`
    ///instead of `2.5`. Variables are not accepted either, since expressions are evaluated to a
    ///single number.
    S0001: InvalidToken {
        ($span:expr, $found:expr, $did_you_mean:expr) => {{
            use crate::diagnostics::*;

            let mut diag = Diagnostic::span_err(
                $span,
                format!(r#"Invalid token "{}""#, $found),
                InvalidToken::CODE,
                None,
            )
            .with_note("expressions may only contain digits, operators, and parentheses");
            if let Some(did_you_mean) = $did_you_mean {
                diag = diag.with_spanned_help($span, format!(r#"did you mean "{}"?"#, did_you_mean));
            }
            diag
        }}
    }
}
