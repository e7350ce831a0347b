//! # gramcalc
//!
//! gramcalc is an interpreter for a small family of arithmetic expression
//! grammars. It parses text with a precedence-aware recursive-descent parser
//! and evaluates the tree against a mutable execution context holding scalar
//! variables and named maps.
//!
//! ```
//! use gramcalc::{Grammar, run_block};
//!
//! let block = ["@defmap yx", "yx[1]=50", "yx[2]=yx[3]=4", "mm=8", "yx[1]*mm + yx[2]/yx[3]"];
//! assert_eq!(run_block(&block, &Grammar::full()).unwrap(), Some(401.0));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use log::trace;

pub use crate::{
    error::Error,
    interpreter::{
        context::ExecutionContext,
        parser::grammar::Grammar,
        value::core::{Reference, SemanticValue},
    },
    session::Session,
};
use crate::{
    ast::{Expr, Statement},
    error::{ParseError, RuntimeError},
    interpreter::{
        lexer::tokenize,
        parser::{self, core::ParseState},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of source text as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source positions to AST nodes for error reporting.
/// - Renders trees fully parenthesized for inspection.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code, each carrying the source position it refers to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the execution
/// context and semantic values.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Statement-by-statement evaluation with a persistent context.
pub mod session;

/// Parses one statement: a map declaration or an expression.
///
/// The whole input must form exactly one statement. Parsing is atomic: it
/// either returns a complete tree or fails.
///
/// # Errors
/// Returns a [`ParseError`] for unrecognized characters, malformed input,
/// empty input, excessive nesting or leftover tokens.
///
/// # Example
/// ```
/// use gramcalc::{Grammar, parse_statement};
///
/// assert!(parse_statement("@defmap zz", &Grammar::full()).is_ok());
/// assert!(parse_statement("-(2+3))", &Grammar::full()).is_err());
/// ```
pub fn parse_statement(source: &str, grammar: &Grammar) -> Result<Statement, ParseError> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();
    let mut state = ParseState::new(grammar, source.len());

    let statement = parser::statement::parse_statement(&mut iter, &mut state)?;
    parser::core::expect_end(&mut iter)?;

    trace!("parsed statement `{statement}`");
    Ok(statement)
}

/// Parses one expression. Unlike [`parse_statement`], `@defmap` is rejected.
///
/// # Errors
/// Returns a [`ParseError`] for unrecognized characters, malformed input,
/// empty input, excessive nesting or leftover tokens.
///
/// # Example
/// ```
/// use gramcalc::{Grammar, parse_expression};
///
/// for malformed in ["", "+", "(", ")", "2+", "2* *2"] {
///     assert!(parse_expression(malformed, &Grammar::full()).is_err());
/// }
/// ```
pub fn parse_expression(source: &str, grammar: &Grammar) -> Result<Expr, ParseError> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();
    let mut state = ParseState::new(grammar, source.len());

    let expr = parser::core::parse_expression(&mut iter, &mut state)?;
    parser::core::expect_end(&mut iter)?;

    trace!("parsed expression `{expr}`");
    Ok(expr)
}

/// Evaluates a statement against `context`.
///
/// # Returns
/// The semantic value of an expression statement, or `None` for a map
/// declaration.
///
/// # Errors
/// Returns a [`RuntimeError`] for invalid assignment targets, undeclared maps
/// and unset map keys.
pub fn evaluate(statement: &Statement,
                context: &mut ExecutionContext)
                -> Result<Option<SemanticValue>, RuntimeError> {
    context.eval_statement(statement)
}

/// Parses and evaluates an expression in a fresh context and reads its value.
///
/// # Errors
/// Returns the parse or runtime error.
///
/// # Example
/// ```
/// use gramcalc::{Grammar, calc_expression};
///
/// assert_eq!(calc_expression("2**3**2", &Grammar::full()).unwrap(), 512.0);
/// assert_eq!(calc_expression("(2+3) * -(7-4) + 11", &Grammar::basic()).unwrap(),
///            -4.0);
/// ```
pub fn calc_expression(source: &str, grammar: &Grammar) -> Result<f64, Error> {
    let mut context = ExecutionContext::new();
    let expr = parse_expression(source, grammar)?;
    let value = context.eval(&expr)?.read(&context)?;
    Ok(value)
}

/// Runs a block of statements in a fresh session.
///
/// # Returns
/// The value of the last statement that produced one, or `None` if none did.
///
/// # Errors
/// Returns the first parse or runtime error; later statements are not run.
pub fn run_block<S: AsRef<str>>(block: &[S], grammar: &Grammar) -> Result<Option<f64>, Error> {
    let mut session = Session::new(grammar.clone());
    for line in block {
        session.execute(line.as_ref())?;
    }
    Ok(session.last_value())
}
