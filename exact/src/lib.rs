//! The exact app. For an overview of the arithmetic, see [libexact's documentation](libexact).

#![deny(warnings)]
#![deny(missing_docs)]

mod diagnostics;
use diagnostics::{emit_exact_diagnostics, sanitize_source_for_diagnostics};

use libexact::diagnostics::Diagnostic;
use libexact::scanner::{types::Token, ScanResult};
use libexact::{
    parse_coefficients, parse_expression, scan, Emit, EmitFormat, Fraction, MathError, Polynomial,
};
use log::debug;
use std::str::FromStr;

/// An operation on two polynomials.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PolyOp {
    /// Quotient of polynomial long division.
    Div,
    /// Remainder of polynomial long division.
    Rem,
    /// Monic greatest common divisor.
    Gcd,
    /// Composition `p(q(x))`.
    Compose,
    /// Evaluation of a polynomial at a fraction.
    Eval,
}

impl FromStr for PolyOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "div" => Ok(Self::Div),
            "rem" => Ok(Self::Rem),
            "gcd" => Ok(Self::Gcd),
            "compose" => Ok(Self::Compose),
            "eval" => Ok(Self::Eval),
            _ => Err(format!("unknown polynomial operation \"{}\"", s)),
        }
    }
}

/// Options to run exact with.
#[derive(Default)]
pub struct Opts {
    /// Expression to evaluate, or the coefficients of the first polynomial operand.
    pub program: String,
    /// Second operand of a polynomial operation.
    pub other: Option<String>,
    /// How the result should be emitted.
    pub emit_format: EmitFormat,
    /// When is [Some](Option::Some), `program` and `other` are operands of this operation.
    pub poly_op: Option<PolyOp>,
    /// When is [Some](Option::Some) diagnostic code, will explain that code.
    pub explain_diagnostic: Option<String>,
    /// When true, exact emit will be colored.
    pub color: bool,
}

/// Parses [Opts](self::Opts) from the command line or given a parser that acts on the clap
/// [App](clap::App).
pub fn get_opts<P>(parser: P, color: bool) -> Result<Opts, clap::Error>
where
    P: for<'a> FnOnce(clap::App<'a, '_>) -> Result<clap::ArgMatches<'a>, clap::Error>,
{
    let matches = clap::App::new(clap::crate_name!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .author(clap::crate_authors!())
        .arg(
            clap::Arg::with_name("program")
                .help("Expression to evaluate, or comma-separated polynomial coefficients")
                .required(true)
                .default_value_if("explain", None, ""),
        )
        .arg(
            clap::Arg::with_name("other")
                .help("Second operand of a polynomial operation")
                .requires("poly"),
        )
        .arg(
            clap::Arg::with_name("output-form")
                .short("-o")
                .long("--output-form")
                .next_line_help(true)
                .help(
                    "Emit format. Possible values:\n\
                    \tsimple: Every coefficient parenthesized, like \"(1)x^2+(-1/2)\".\n\
                    \tvisual: Human-readable text, like \"x^2-1/2\".\n\
                    \tlatex:  LaTeX math mode code, like \"x^{2}-\\frac{1}{2}\".\n\
                    \tdebug:  Opaque internal representation. Note: this format is not stable.\n\
                    ",
                )
                .hide_possible_values(true)
                .default_value("visual")
                .takes_value(true)
                .possible_values(&["simple", "visual", "latex", "debug"]),
        )
        .arg(
            clap::Arg::with_name("poly")
                .long("--poly")
                .value_name("operation")
                .next_line_help(true)
                .help(
                    "Treat the operands as polynomial coefficients, lowest power first. Possible values:\n\
                    \tdiv:     Quotient of <program> by <other>.\n\
                    \trem:     Remainder of <program> by <other>.\n\
                    \tgcd:     Monic greatest common divisor of <program> and <other>.\n\
                    \tcompose: <program> composed with <other>.\n\
                    \teval:    <program> evaluated at the expression <other>.\n\
                    ",
                )
                .hide_possible_values(true)
                .takes_value(true)
                .requires("other")
                .possible_values(&["div", "rem", "gcd", "compose", "eval"]),
        )
        .arg(
            clap::Arg::with_name("explain")
                .long("--explain")
                .value_name("diagnostic")
                .help("Provide a detailed explanation for a diagnostic code.")
                .takes_value(true),
        );
    let matches = parser(matches)?;

    let invalid = |e: String| clap::Error::with_description(&e, clap::ErrorKind::InvalidValue);
    Ok(Opts {
        program: matches.value_of("program").unwrap_or_default().into(),
        other: matches.value_of("other").map(str::to_owned),
        emit_format: matches
            .value_of("output-form")
            .unwrap_or_default()
            .parse::<EmitFormat>()
            .map_err(invalid)?,
        poly_op: matches
            .value_of("poly")
            .map(str::parse::<PolyOp>)
            .transpose()
            .map_err(invalid)?,
        explain_diagnostic: matches.value_of("explain").map(str::to_owned),
        color,
    })
}

/// Output of an exact execution.
#[derive(Default)]
pub struct ExactResult {
    /// Exit code
    pub code: i32,
    /// Emit for stdout
    pub stdout: String,
    /// Emit for stderr
    pub stderr: String,
    /// Whether the stdout should be emit as paged
    pub page: bool,
}

/// Builds an [ExactResult](self::ExactResult).
struct ExactResultBuilder {
    emit_format: EmitFormat,
    color: bool,
    stdout: String,
    stderr: String,
    page: bool,
}

impl ExactResultBuilder {
    fn new(emit_format: EmitFormat, color: bool) -> Self {
        Self {
            emit_format,
            color,
            page: false,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    fn emit(&mut self, obj: &dyn Emit) {
        self.stdout.push_str(&obj.emit(self.emit_format));
    }

    fn err(&mut self, source: &str, diagnostics: &[Diagnostic]) {
        if !self.stderr.is_empty() && !diagnostics.is_empty() {
            self.stderr.push('\n');
        }
        self.stderr.push_str(&emit_exact_diagnostics(
            None, // file: operands only come from the command line
            &sanitize_source_for_diagnostics(source),
            diagnostics,
            self.color,
        ));
    }

    fn math_err(&mut self, err: MathError) {
        self.stderr.push_str(&format!("error: {}", err));
    }

    fn page(&mut self, page: bool) {
        self.page = page;
    }

    fn ok(self) -> ExactResult {
        ExactResult {
            code: 0,
            stdout: self.stdout,
            stderr: self.stderr,
            page: self.page,
        }
    }

    fn failed(self) -> ExactResult {
        ExactResult {
            code: 1,
            stdout: self.stdout,
            stderr: self.stderr,
            page: self.page,
        }
    }
}

/// Runs exact end-to-end.
pub fn run_exact(opts: Opts) -> ExactResult {
    let mut result = ExactResultBuilder::new(opts.emit_format, opts.color);

    if let Some(diag_code) = opts.explain_diagnostic {
        let codes = Diagnostic::all_codes_with_explanations();
        return match codes.get::<str>(&diag_code) {
            Some(explanation) => {
                result.stdout.push_str(explanation);
                result.page(true);
                result.ok()
            }
            None => {
                result
                    .stderr
                    .push_str(&format!("{} is not a diagnostic code", diag_code));
                result.failed()
            }
        };
    }

    match (opts.poly_op, opts.other) {
        (Some(op), Some(other)) => eval_poly_op(result, op, &opts.program, &other),
        (Some(op), None) => {
            result
                .stderr
                .push_str(&format!("error: {:?} needs a second operand", op));
            result.failed()
        }
        (None, _) => match read(&mut result, &opts.program, parse_expression) {
            Some(value) => {
                result.emit(&value);
                result.ok()
            }
            None => result.failed(),
        },
    }
}

/// Scans and parses `source`, reporting any diagnostics to `result`.
fn read<T, P>(result: &mut ExactResultBuilder, source: &str, parse: P) -> Option<T>
where
    P: FnOnce(Vec<Token>) -> (Option<T>, Vec<Diagnostic>),
{
    let ScanResult {
        tokens,
        diagnostics,
    } = scan(source);
    result.err(source, &diagnostics);
    if !diagnostics.is_empty() {
        return None;
    }

    let (value, diagnostics) = parse(tokens);
    result.err(source, &diagnostics);
    value
}

fn read_poly(result: &mut ExactResultBuilder, source: &str) -> Option<Polynomial<Fraction>> {
    read(result, source, parse_coefficients).map(Polynomial::new)
}

/// Evaluates a polynomial operation on two operands.
fn eval_poly_op(mut result: ExactResultBuilder, op: PolyOp, lhs: &str, rhs: &str) -> ExactResult {
    debug!("evaluating {:?} of {:?} and {:?}", op, lhs, rhs);
    let lhs = read_poly(&mut result, lhs);

    if op == PolyOp::Eval {
        let at = read(&mut result, rhs, parse_expression);
        return match (lhs, at) {
            (Some(lhs), Some(at)) => finish(result, lhs.checked_eval(&at)),
            _ => result.failed(),
        };
    }

    let rhs = read_poly(&mut result, rhs);
    let (lhs, rhs) = match (lhs, rhs) {
        (Some(lhs), Some(rhs)) => (lhs, rhs),
        _ => return result.failed(),
    };
    let value = match op {
        PolyOp::Div => lhs.checked_div_rem(&rhs).map(|(quo, _)| quo),
        PolyOp::Rem => lhs.checked_div_rem(&rhs).map(|(_, rem)| rem),
        PolyOp::Gcd => lhs.checked_gcd(&rhs),
        PolyOp::Compose => lhs.checked_compose(&rhs),
        PolyOp::Eval => unreachable!("evaluation takes a fraction operand"),
    };
    finish(result, value)
}

/// Emits a computed value, or reports why it could not be computed.
fn finish<E: Emit>(mut result: ExactResultBuilder, value: Result<E, MathError>) -> ExactResult {
    match value {
        Ok(value) => {
            result.emit(&value);
            result.ok()
        }
        Err(err) => {
            result.math_err(err);
            result.failed()
        }
    }
}
