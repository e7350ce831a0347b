/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, producing semantic values and reading or
/// writing the execution context for variables and map elements.
///
/// # Responsibilities
/// - Evaluates AST nodes with IEEE double arithmetic.
/// - Resolves assignment targets and performs the writes.
/// - Reports runtime errors such as undeclared maps or unset keys.
pub mod evaluator;
/// The context module holds the state of one evaluation session.
///
/// # Responsibilities
/// - Stores scalar variables, reading unset ones as NaN.
/// - Stores named maps keyed by double values.
pub mod context;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to a number, identifier, operator, delimiter or
/// the `@defmap` keyword. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Reports lexical errors for unrecognized input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that encodes operator precedence and associativity.
///
/// # Responsibilities
/// - Converts tokens into expression and statement nodes.
/// - Follows a configurable precedence table so related grammar variants share
///   one implementation.
/// - Rejects malformed input as a whole, reporting the offending position.
pub mod parser;
/// The value module defines the results of evaluation.
///
/// # Responsibilities
/// - Distinguishes plain numbers from assignable references.
/// - Implements reads and writes of references against a context.
pub mod value;
