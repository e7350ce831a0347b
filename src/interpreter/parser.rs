/// Expression entry points and the assignment rule.
///
/// Contains the parse result type, the top of the expression grammar and the
/// end-of-input check shared by the string-level entry points.
pub mod core;

/// Binary operator parsing.
///
/// Walks the precedence table of a [`grammar::Grammar`], building
/// left- or right-associative operator chains level by level.
pub mod binary;

/// Unary operator and primary parsing.
///
/// Handles prefix signs, numbers, identifiers, indexed map references and
/// parenthesized expressions.
pub mod unary;

/// Statement parsing.
///
/// A statement is either a map declaration or an expression.
pub mod statement;

/// Grammar variants.
///
/// The precedence table and feature switches that select which of the
/// related expression grammars the parser accepts.
pub mod grammar;
