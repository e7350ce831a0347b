/// Core evaluation logic.
///
/// Contains the expression and statement dispatch and the evaluation result
/// type.
pub mod core;

/// Unary operator evaluation.
///
/// Applies prefix signs to the value of their operand.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements the arithmetic operators with IEEE double semantics.
pub mod binary;

/// Assignment evaluation.
///
/// Resolves the target reference, computes the value and writes it.
pub mod assignment;
