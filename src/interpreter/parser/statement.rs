use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, ParseState, parse_expression},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a map declaration (`@defmap name`), when the grammar has maps.
/// - an expression used as a statement.
///
/// The statement's position is taken from its first token.
///
/// Grammar:
/// ```text
///     statement := defmap | expression
///     defmap    := "@defmap" IDENTIFIER
/// ```
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, position)` pairs.
/// - `state`: The grammar variant and parse bookkeeping.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, state: &mut ParseState) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some(statement) = parse_defmap(tokens, state)? {
        return Ok(statement);
    }

    let position = tokens.peek().map_or(0, |(_, p)| *p);
    let expr = parse_expression(tokens, state)?;

    Ok(Statement::Expression { expr, position })
}

/// Parses a map declaration of the form `@defmap <identifier>`.
///
/// If the next token is not `@defmap`, or the grammar has no maps, this
/// function returns `Ok(None)` and does not consume any input. In the latter
/// case the expression parser then rejects `@defmap` as an unexpected token.
///
/// # Returns
/// - `Ok(Some(Statement::DefMap))` if a declaration is parsed,
/// - `Ok(None)` if no declaration is present.
///
/// # Errors
/// Returns a `ParseError` if the map name is missing or is not an identifier.
fn parse_defmap<'a, I>(tokens: &mut Peekable<I>, state: &ParseState) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if !state.grammar.maps {
        return Ok(None);
    }

    if let Some((Token::DefMap, position)) = tokens.peek() {
        tokens.next();

        return match tokens.next() {
            Some((Token::Identifier(name), _)) => Ok(Some(Statement::DefMap { name:     name.clone(),
                                                                              position: *position, })),
            Some((tok, p)) => Err(ParseError::ExpectedIdentifier { token:    tok.clone(),
                                                                   position: *p, }),
            None => Err(state.end_of_input()),
        };
    }

    Ok(None)
}
