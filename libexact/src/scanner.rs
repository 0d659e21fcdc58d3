//! Tokenization of expression text.
//!
//! Whitespace carries no meaning in an expression and is dropped before tokens are formed, so
//! digits separated only by whitespace scan as a single numeral (`"1 2"` is `12`). Token spans
//! still refer to character positions in the original text.

#[macro_use]
pub(crate) mod errors;
pub mod types;

use crate::diagnostics::Diagnostic;
use crate::utils::PeekIter;
use errors::*;
use types::*;

/// The result of scanning an expression.
pub struct ScanResult {
    /// Scanned tokens, always terminated by an [EOF](TokenType::EOF) token.
    pub tokens: Vec<Token>,
    /// Diagnostics for invalid tokens.
    pub diagnostics: Vec<Diagnostic>,
}

/// Scans an expression into a list of tokens.
pub fn scan<T: Into<String>>(input: T) -> ScanResult {
    let mut scanner = Scanner::new(input);
    scanner.scan();
    ScanResult {
        tokens: scanner.output,
        diagnostics: scanner.diagnostics,
    }
}

struct Scanner {
    input: PeekIter<(usize, char)>,
    /// Character length of the original input.
    end: usize,
    output: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl Scanner {
    fn new<T: Into<String>>(input: T) -> Scanner {
        let input = input.into();
        let end = input.chars().count();
        let chars: Vec<(usize, char)> = input
            .chars()
            .enumerate()
            .filter(|(_, c)| !c.is_whitespace())
            .collect();

        Scanner {
            input: PeekIter::new(chars.into_iter()),
            end,
            output: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    fn scan(&mut self) {
        while let Some(&(_, c)) = self.input.peek() {
            match c {
                _ if c.is_ascii_digit() => self.scan_num(),
                _ => self.scan_symbol(),
            }
        }

        self.output
            .push(Token::new(TokenType::EOF, self.end..self.end + 1));
    }

    // matches token with symbol and creates it
    fn scan_symbol(&mut self) {
        use TokenType::*;
        let (start, c) = match self.input.next() {
            Some(next) => next,
            None => return,
        };
        let ty = match c {
            '+' => Plus,
            '-' => Minus,
            '*' => Mult,
            '/' => Div,
            '(' => OpenParen,
            ')' => CloseParen,
            ',' => Comma,
            c => {
                let span = (start, start + 1);
                self.diagnostics
                    .push(InvalidToken!(span, c, did_you_mean(c)));
                Invalid(c.to_string())
            }
        };
        self.output.push(Token::new(ty, start..start + 1));
    }

    // iterates through any digits to create a token of that value
    fn scan_num(&mut self) {
        let mut digits = String::new();
        let mut span = match self.input.peek() {
            Some(&(start, _)) => (start, start),
            None => return,
        };
        while let Some(&(i, c)) = self.input.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            digits.push(c);
            span.1 = i + 1;
            self.input.next();
        }
        self.output.push(Token::new(TokenType::Int(digits), span));
    }
}

/// Suggests a valid token for common lookalike characters.
fn did_you_mean(c: char) -> Option<&'static str> {
    match c {
        'x' | 'X' | '×' | '·' => Some("*"),
        '÷' | ':' => Some("/"),
        '−' | '–' => Some("-"),
        '[' | '{' => Some("("),
        ']' | '}' => Some(")"),
        _ => None,
    }
}
