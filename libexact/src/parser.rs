//! Recursive-descent parsing of expression text into exact fractions.
//!
//! The grammar is
//!
//! ```text
//! Expr    := Sum
//! Sum     := Product (('+'|'-') Product)*
//! Product := SubExpr (('*'|'/') SubExpr)*
//! SubExpr := '(' Sum ')' | Num
//! Num     := ['-'] digit+
//! ```
//!
//! Values are folded left-to-right as they are parsed, so a successful parse yields a single
//! [`Fraction`]. Malformed input is reported through [`Diagnostic`]s, and parsing continues past
//! an error where possible so that more than one diagnostic can be reported at once.

#[macro_use]
pub(crate) mod errors;

use crate::common::Span;
use crate::diagnostics::Diagnostic;
use crate::math::{Fraction, MathError, Polynomial};
use crate::scanner::types::{Token, TokenType};
use crate::scanner::{scan, ScanResult};
use crate::utils::PeekIter;
use errors::*;

use core::str::FromStr;
use std::error::Error;
use std::fmt;

/// Parses a scanned expression into its value.
///
/// The value is `None` if the expression is malformed or contains [invalid
/// tokens](TokenType::Invalid). Invalid tokens are already reported by the scanner, so they do not
/// produce a second diagnostic here.
pub fn parse_expression(tokens: Vec<Token>) -> (Option<Fraction>, Vec<Diagnostic>) {
    let mut parser = Parser::new(tokens);
    let (value, _) = parser.sum();
    parser.finish();
    parser.into_result(value)
}

/// Parses a scanned, comma-separated list of expressions into their values.
///
/// The list is read as polynomial coefficients in ascending powers, so `"1, 0, 2"` is `1 + 2x^2`.
pub fn parse_coefficients(tokens: Vec<Token>) -> (Option<Vec<Fraction>>, Vec<Diagnostic>) {
    let mut parser = Parser::new(tokens);
    let mut coeffs = Some(Vec::new());
    loop {
        let (value, _) = parser.sum();
        coeffs = coeffs.and_then(|mut coeffs: Vec<Fraction>| {
            coeffs.push(value?);
            Some(coeffs)
        });
        if !parser.next_if_is(TokenType::Comma) {
            break;
        }
    }
    parser.finish();
    parser.into_result(coeffs)
}

/// Malformed expression text, described by one or more diagnostics.
#[derive(Clone, PartialEq, Debug)]
pub struct ExprError {
    pub diagnostics: Vec<Diagnostic>,
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.diagnostics.as_slice() {
            [] => f.write_str("malformed expression"),
            [first, rest @ ..] => {
                write!(f, "{}", first)?;
                for diag in rest {
                    write!(f, "\n{}", diag)?;
                }
                Ok(())
            }
        }
    }
}

impl Error for ExprError {}

/// Scans and parses `text`, collecting diagnostics of both phases.
fn parse_text<T, P>(text: &str, parse: P) -> Result<T, ExprError>
where
    P: FnOnce(Vec<Token>) -> (Option<T>, Vec<Diagnostic>),
{
    let ScanResult {
        tokens,
        mut diagnostics,
    } = scan(text);
    let (value, parse_diagnostics) = parse(tokens);
    diagnostics.extend(parse_diagnostics);
    match value {
        Some(value) if diagnostics.is_empty() => Ok(value),
        _ => Err(ExprError { diagnostics }),
    }
}

impl FromStr for Fraction {
    type Err = ExprError;

    /// Evaluates an arithmetic expression, like `"(1 + 2) / -4"`, to a fraction.
    ///
    /// # Examples:
    ///
    /// ```
    /// use libexact::Fraction;
    ///
    /// assert_eq!("2+3*4".parse::<Fraction>().unwrap(), Fraction::new(14, 1));
    /// assert_eq!("1/4 - 1/2".parse::<Fraction>().unwrap(), Fraction::new(-1, 4));
    /// assert!("1/(1-1)".parse::<Fraction>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_text(s, parse_expression)
    }
}

impl FromStr for Polynomial<Fraction> {
    type Err = ExprError;

    /// Reads a comma-separated list of coefficient expressions, in ascending powers.
    ///
    /// # Examples:
    ///
    /// ```
    /// use libexact::{poly, Polynomial, Fraction};
    ///
    /// let p: Polynomial<Fraction> = "-1, 0, 2/2".parse().unwrap();
    /// assert_eq!(p, poly![-1, 0, 1]);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_text(s, parse_coefficients).map(Polynomial::new)
    }
}

/// A parsed value, or `None` if it was malformed, together with the span it was parsed from.
type Parsed = (Option<Fraction>, Span);

struct Parser {
    input: PeekIter<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            input: PeekIter::new(tokens.into_iter()),
            diagnostics: Vec::new(),
        }
    }

    fn into_result<T>(self, value: Option<T>) -> (Option<T>, Vec<Diagnostic>) {
        let value = if self.diagnostics.is_empty() {
            value
        } else {
            None
        };
        (value, self.diagnostics)
    }

    fn peek_ty(&mut self) -> TokenType {
        match self.input.peek() {
            Some(tok) => tok.ty.clone(),
            None => TokenType::EOF,
        }
    }

    fn peek_span(&mut self) -> Span {
        match self.input.peek() {
            Some(tok) => tok.span,
            None => Span::default(),
        }
    }

    fn next_if_is(&mut self, ty: TokenType) -> bool {
        self.input.next_if(|tok| tok.ty == ty).is_some()
    }

    /// Reports anything left over after a complete expression.
    fn finish(&mut self) {
        let mut extra: Option<Span> = None;
        let mut depth = 0usize;
        while let Some(tok) = self.input.next() {
            match tok.ty {
                TokenType::EOF => break,
                TokenType::CloseParen if depth == 0 => {
                    self.diagnostics.push(UnmatchedParen!(tok.span));
                    continue;
                }
                TokenType::CloseParen => depth -= 1,
                TokenType::OpenParen => depth += 1,
                TokenType::Invalid(_) => continue,
                _ => {}
            }
            extra = Some(extra.map_or(tok.span, |span| span.to(tok.span)));
        }
        if let Some(span) = extra {
            self.diagnostics.push(ExtraTokens!(span));
        }
    }

    fn sum(&mut self) -> Parsed {
        let mut lhs = self.product();
        loop {
            let op = self.peek_ty();
            if op != TokenType::Plus && op != TokenType::Minus {
                break;
            }
            self.input.next();
            let rhs = self.product();
            lhs = self.fold(op, lhs, rhs);
        }
        lhs
    }

    fn product(&mut self) -> Parsed {
        let mut lhs = self.sub_expr();
        loop {
            let op = self.peek_ty();
            if op != TokenType::Mult && op != TokenType::Div {
                break;
            }
            self.input.next();
            let rhs = self.sub_expr();
            lhs = self.fold(op, lhs, rhs);
        }
        lhs
    }

    fn sub_expr(&mut self) -> Parsed {
        if self.peek_ty() != TokenType::OpenParen {
            return self.num();
        }
        let open = self.peek_span();
        self.input.next();
        let (inner, inner_span) = self.sum();
        match self.input.next_if(|tok| tok.ty == TokenType::CloseParen) {
            Some(close) => (inner, open.to(close.span)),
            None => {
                let (found, found_span) = (self.peek_ty(), self.peek_span());
                self.diagnostics
                    .push(UnclosedParen!(open, found_span, found));
                (None, open.to(inner_span))
            }
        }
    }

    fn num(&mut self) -> Parsed {
        let minus = self
            .input
            .next_if(|tok| tok.ty == TokenType::Minus)
            .map(|minus| minus.span);
        let (ty, span) = (self.peek_ty(), self.peek_span());
        match (minus, ty) {
            (minus, TokenType::Int(digits)) => {
                self.input.next();
                let (numeral, span) = match minus {
                    Some(minus) => (format!("-{}", digits), minus.to(span)),
                    None => (digits, span),
                };
                let value = numeral
                    .parse::<i64>()
                    .ok()
                    .and_then(|n| Fraction::try_new(n, 1).ok());
                if value.is_none() {
                    self.diagnostics
                        .push(NumeralOutOfRange!(span, numeral));
                }
                (value, span)
            }
            (Some(minus), ty) => {
                self.diagnostics
                    .push(ExpectedNumeral!(span, minus, ty));
                // A following group is still parsed, so its own errors are reported.
                if ty == TokenType::OpenParen {
                    let (_, group_span) = self.sub_expr();
                    return (None, minus.to(group_span));
                }
                self.skip_unexpected(&ty);
                (None, minus.to(span))
            }
            (None, TokenType::Invalid(_)) => {
                self.input.next();
                (None, span)
            }
            (None, ty) => {
                let mut diag = ExpectedExpr!(span, ty);
                if ty.is_operator() {
                    diag = diag.with_help(format!("`{}` must have a value on either side", ty));
                }
                self.diagnostics.push(diag);
                self.skip_unexpected(&ty);
                (None, span)
            }
        }
    }

    /// Skips a token that cannot start an expression, unless it may still close or separate an
    /// enclosing one.
    fn skip_unexpected(&mut self, ty: &TokenType) {
        match ty {
            TokenType::EOF | TokenType::CloseParen | TokenType::Comma => {}
            _ => {
                self.input.next();
            }
        }
    }

    fn fold(&mut self, op: TokenType, (lhs, lhs_span): Parsed, (rhs, rhs_span): Parsed) -> Parsed {
        let span = lhs_span.to(rhs_span);
        let (lhs, rhs) = match (lhs, rhs) {
            (Some(lhs), Some(rhs)) => (lhs, rhs),
            _ => return (None, span),
        };
        let folded = match op {
            TokenType::Plus => lhs.checked_add(&rhs),
            TokenType::Minus => lhs.checked_sub(&rhs),
            TokenType::Mult => lhs.checked_mul(&rhs),
            TokenType::Div => lhs.checked_div(&rhs),
            _ => unreachable!("{} is not a binary operator", op),
        };
        match folded {
            Ok(value) => (Some(value), span),
            Err(MathError::DivisionByZero) => {
                self.diagnostics.push(ZeroDivisor!(span, rhs_span));
                (None, span)
            }
            Err(MathError::Overflow) => {
                self.diagnostics.push(ValueOverflow!(span));
                (None, span)
            }
        }
    }
}
