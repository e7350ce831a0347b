/// Semantic values produced by evaluation.
///
/// Defines the plain number and reference variants, and the reads and writes
/// they perform against an execution context.
pub mod core;
