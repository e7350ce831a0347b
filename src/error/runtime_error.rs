use thiserror::Error;

/// The target of `=` evaluated to a plain number instead of a reference.
///
/// Raised for `2 = 3`, `(c = d) = 3` or `(a + b) = 1`: these parse, because
/// a parenthesized expression is a syntactic primary, but only variables and
/// indexed map elements can be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Error at position {position}: Invalid assignment target; only variables and map elements can be assigned.")]
pub struct AssignmentError {
    /// Byte offset of the `=` token.
    pub position: usize,
}

/// Represents all errors that can occur during evaluation.
///
/// Division by zero and invalid powers are not errors; they produce IEEE
/// infinities and NaNs like any other arithmetic result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// Tried to assign to something that is not a reference.
    #[error(transparent)]
    Assignment(#[from] AssignmentError),
    /// Indexed a map that was never declared with `@defmap`.
    #[error("Error at position {position}: Map '{name}' not found.")]
    UnknownMap {
        /// The name of the map.
        name:     String,
        /// Byte offset of the indexed reference.
        position: usize,
    },
    /// Read a map element that was never written.
    #[error("Error at position {position}: Map element '{name}[{key}]' not found.")]
    MissingKey {
        /// The name of the map.
        name:     String,
        /// The key that was looked up.
        key:      f64,
        /// Byte offset of the indexed reference.
        position: usize,
    },
}
