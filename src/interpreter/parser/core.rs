use std::iter::Peekable;

use log::trace;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_binary_level, grammar::Grammar, unary::parse_primary},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of parentheses, indexes, signs and right-recursive
/// operators one statement may contain.
pub const MAX_NESTING: usize = 128;

/// State shared by every rule while one source text is parsed.
#[derive(Debug)]
pub struct ParseState<'g> {
    /// The grammar variant to accept.
    pub grammar: &'g Grammar,
    end:         usize,
    depth:       usize,
}

impl<'g> ParseState<'g> {
    /// Starts a parse of a source text that is `end` bytes long.
    #[must_use]
    pub const fn new(grammar: &'g Grammar, end: usize) -> Self {
        Self { grammar,
               end,
               depth: 0 }
    }

    /// The error for running out of tokens. It points just past the last
    /// byte of the source.
    #[must_use]
    pub const fn end_of_input(&self) -> ParseError {
        ParseError::UnexpectedEndOfInput { position: self.end }
    }

    /// Runs `rule` one nesting level deeper.
    ///
    /// # Errors
    /// Returns `ParseError::NestingTooDeep` at `position` once
    /// [`MAX_NESTING`] levels are open, so hostile input is rejected before
    /// it can exhaust the stack.
    pub fn nested<T>(&mut self,
                     position: usize,
                     rule: impl FnOnce(&mut Self) -> ParseResult<T>)
                     -> ParseResult<T> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::NestingTooDeep { position,
                                                    limit: MAX_NESTING });
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence rule, assignment, and recursively descends through the
/// precedence table of the grammar.
///
/// Grammar: `expression := assignment`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `state`: The grammar variant and parse bookkeeping.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, state: &mut ParseState) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_assignment(tokens, state)
}

/// Parses an assignment or, failing that, a binary operator chain.
///
/// Assignment is right-associative: `a = b = 5` parses as `a = (b = 5)`.
///
/// Grammar:
/// ```text
///     assignment := primary "=" assignment
///                 | addsub
/// ```
///
/// When the next token can start a primary, the primary is parsed first. If
/// `=` follows, it becomes the assignment target; otherwise it is handed to
/// [`parse_binary_level`] as the already-parsed leftmost operand, so no token
/// is ever read twice. The target is only checked syntactically: `(c = d) = 3`
/// parses and fails at evaluation time because its target is not a reference.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `state`: The grammar variant and parse bookkeeping.
///
/// # Returns
/// An [`Expr::Assign`] node or the operator chain.
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, state: &mut ParseState) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let starts_primary = matches!(tokens.peek(),
                                  Some((Token::Number(_) | Token::Identifier(_) | Token::LParen, _)));

    if !(state.grammar.assignment && starts_primary) {
        return parse_binary_level(tokens, state, 0, None);
    }

    let primary = parse_primary(tokens, state)?;

    if let Some(&&(Token::Equals, position)) = tokens.peek() {
        tokens.next();
        trace!("assignment at {position}: target {primary}");
        let value = state.nested(position, |state| parse_assignment(tokens, state))?;
        return Ok(Expr::Assign { target: Box::new(primary),
                                 value: Box::new(value),
                                 position });
    }

    parse_binary_level(tokens, state, 0, Some(primary))
}

/// Requires that every token has been consumed.
///
/// # Errors
/// Returns `ParseError::UnexpectedTrailingTokens` pointing at the first
/// leftover token, as in `-(2+3))` or `1[2]`.
pub fn expect_end<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((token, position)) => {
            Err(ParseError::UnexpectedTrailingTokens { token:    token.clone(),
                                                       position: *position, })
        },
        None => Ok(()),
    }
}
