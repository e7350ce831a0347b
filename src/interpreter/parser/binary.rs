use std::iter::Peekable;

use crate::{
    ast::Expr,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, ParseState},
            grammar::Associativity,
            unary::parse_unary,
        },
    },
};

/// Parses the binary operator chain of precedence level `level` and every
/// tighter level.
///
/// Level `0` is the loosest entry of the grammar's table. Past the last level
/// the operand is a unary expression. Each level follows one of two rules:
///
/// ```text
///     left  := left  (OP next)*       # left-associative, e.g. addsub
///     right := next  (OP right)?      # right-associative, e.g. power
/// ```
///
/// `seed` is a primary the caller already consumed while looking for an
/// assignment. It stands in for the leftmost unary operand, which is exact
/// because a primary is a unary expression without a sign.
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `state`: The grammar variant and parse bookkeeping.
/// - `level`: Index of the precedence level to parse.
/// - `seed`: Optional already-parsed leftmost operand.
///
/// # Returns
/// An `Expr::BinaryOp` tree, or the operand itself when no operator of this
/// level follows.
pub fn parse_binary_level<'a, I>(tokens: &mut Peekable<I>,
                                 state: &mut ParseState,
                                 level: usize,
                                 seed: Option<Expr>)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let grammar = state.grammar;
    let Some(row) = grammar.levels.get(level) else {
        return match seed {
            Some(primary) => Ok(primary),
            None => parse_unary(tokens, state),
        };
    };

    let mut left = parse_binary_level(tokens, state, level + 1, seed)?;

    while let Some(&&(ref token, position)) = tokens.peek()
          && let Some(op) = row.operator_for(token)
    {
        tokens.next();
        let right = match row.associativity {
            Associativity::Left => parse_binary_level(tokens, state, level + 1, None)?,
            Associativity::Right => {
                state.nested(position, |state| parse_binary_level(tokens, state, level, None))?
            },
        };
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                position };

        // The recursive call already absorbed the rest of a right-associative
        // chain.
        if row.associativity == Associativity::Right {
            break;
        }
    }

    Ok(left)
}
