use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, ParseState, parse_expression},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix signs `+` (identity) and `-` (negation). Signs are
/// right-associative and chain freely, so `+-1` is parsed as `+(-(1))`.
///
/// If no sign is present, the function delegates to [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `state`: The grammar variant and parse bookkeeping.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, state: &mut ParseState) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let op = match tokens.peek() {
        Some((Token::Plus, _)) => UnaryOperator::Plus,
        Some((Token::Minus, _)) => UnaryOperator::Minus,
        _ => return parse_primary(tokens, state),
    };

    let &(_, position) = tokens.next().ok_or_else(|| state.end_of_input())?;
    let expr = state.nested(position, |state| parse_unary(tokens, state))?;
    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       position })
}

/// Parses a primary expression.
///
/// Primary expressions form the base of the expression grammar:
/// - numeric literals
/// - identifiers, when the grammar has variables
/// - indexed map references `name[expr]`, when the grammar has maps
/// - parenthesized expressions
///
/// Only a bare identifier can be indexed; `1[2]` and `(a)[1]` leave the `[`
/// unconsumed, which the caller reports as trailing input.
///
/// Grammar:
/// ```text
///     primary := IDENTIFIER "[" expression "]"
///              | atom
///     atom    := NUMBER | IDENTIFIER | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `state`: The grammar variant and parse bookkeeping.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, state: &mut ParseState) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let grammar = state.grammar;
    let (token, position) = tokens.next().ok_or_else(|| state.end_of_input())?;

    match token {
        Token::Number(value) => Ok(Expr::Number { value:    *value,
                                                  position: *position, }),
        Token::LParen => parse_grouping(tokens, state, *position),
        Token::Identifier(name) if grammar.maps && matches!(tokens.peek(), Some((Token::LBracket, _))) => {
            parse_index(tokens, state, name, *position)
        },
        Token::Identifier(name) if grammar.identifiers => Ok(Expr::Variable { name:     name.clone(),
                                                                               position: *position, }),
        tok => Err(ParseError::UnexpectedToken { token:    tok.clone(),
                                                 position: *position, }),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`, with the opening parenthesis already
/// consumed. The inner expression is returned as-is (no wrapper node), which
/// is what lets `(a) = 177` assign to `a`.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Errors
/// - `ExpectedClosingParen` if the next token is not `)`.
/// - `UnexpectedEndOfInput` if the input ends before `)`.
/// - `NestingTooDeep` if too many groupings are already open.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         state: &mut ParseState,
                         position: usize)
                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let expr = state.nested(position, |state| parse_expression(tokens, state))?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some(_) => Err(ParseError::ExpectedClosingParen { position }),
        None => Err(state.end_of_input()),
    }
}

/// Parses the `[ expression ]` part of an indexed map reference.
///
/// The map name has already been consumed and `[` is the next token.
///
/// # Errors
/// - `ExpectedClosingBracket` if the index is not followed by `]`.
/// - `UnexpectedEndOfInput` if the input ends before `]`.
fn parse_index<'a, I>(tokens: &mut Peekable<I>,
                      state: &mut ParseState,
                      name: &str,
                      position: usize)
                      -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let bracket = tokens.next().map_or(position, |(_, p)| *p);
    let index = state.nested(bracket, |state| parse_expression(tokens, state))?;
    match tokens.next() {
        Some((Token::RBracket, _)) => Ok(Expr::Index { name: name.to_string(),
                                                       index: Box::new(index),
                                                       position }),
        Some(_) => Err(ParseError::ExpectedClosingBracket { position: bracket }),
        None => Err(state.end_of_input()),
    }
}
