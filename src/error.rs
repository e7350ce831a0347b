/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include unrecognized characters, unexpected tokens,
/// unbalanced delimiters and input left over after a complete statement.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: assigning
/// to something that is not a reference, and reading undeclared maps or
/// unset map keys.
pub mod runtime_error;

pub use parse_error::{LexError, ParseError};
pub use runtime_error::{AssignmentError, RuntimeError};

/// Any failure of a parse-then-evaluate call.
///
/// Session-level entry points return this so that callers can use `?` on both
/// phases and still tell them apart.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The text did not form a valid statement or expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The statement parsed but failed during evaluation.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
