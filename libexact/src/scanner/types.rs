//! Definitions of types used in the libexact scanner.

use crate::common::Span;
use core::fmt;

/// The type of a [Token][Token].
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum TokenType {
    /// The digits of an unsigned numeral, with any interleaved whitespace removed.
    Int(String),

    /// + symbol
    Plus,

    /// - symbol
    Minus,

    /// * symbol
    Mult,

    /// / symbol
    Div,

    /// ( symbol
    OpenParen,

    /// ) symbol
    CloseParen,

    /// , symbol
    Comma,

    /// An invalid token.
    Invalid(String),

    /// End of file.
    EOF,
}

impl TokenType {
    /// Whether the token is a binary operator.
    pub fn is_operator(&self) -> bool {
        use TokenType::*;
        matches!(self, Plus | Minus | Mult | Div)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TokenType::*;
        write!(
            f,
            "{}",
            match self {
                Int(digits) => digits.as_str(),
                Plus => "+",
                Minus => "-",
                Mult => "*",
                Div => "/",
                OpenParen => "(",
                CloseParen => ")",
                Comma => ",",
                Invalid(s) => s.as_str(),
                EOF => "end of file",
            }
        )
    }
}

/// Describes a token in an expression.
#[derive(PartialEq, Clone, Debug)]
pub struct Token {
    /// The type of the token.
    pub ty: TokenType,
    /// The source span of the token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new<Sp>(ty: TokenType, span: Sp) -> Self
    where
        Sp: Into<Span>,
    {
        Self {
            ty,
            span: span.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ty)
    }
}
