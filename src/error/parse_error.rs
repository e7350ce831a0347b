use thiserror::Error;

use crate::interpreter::lexer::Token;

/// An input character sequence that matches no token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error at position {position}: Unrecognized input '{text}'.")]
pub struct LexError {
    /// The unrecognized text.
    pub text:     String,
    /// Byte offset of the text in the source.
    pub position: usize,
}

/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant carries the byte offset of the offending token. Running out
/// of tokens points just past the end of the source.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The source could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// Found an unexpected token while parsing.
    #[error("Error at position {position}: Unexpected token '{token}'.")]
    UnexpectedToken {
        /// The token encountered.
        token:    Token,
        /// Byte offset of the token.
        position: usize,
    },
    /// Reached the end of input unexpectedly, including empty input.
    #[error("Error at position {position}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The length of the source in bytes.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error at position {position}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// Byte offset of the opening parenthesis.
        position: usize,
    },
    /// A closing bracket `]` was expected but not found.
    #[error("Error at position {position}: Expected closing bracket ']' but none found.")]
    ExpectedClosingBracket {
        /// Byte offset of the opening bracket.
        position: usize,
    },
    /// `@defmap` was not followed by a map name.
    #[error("Error at position {position}: Expected identifier, found '{token}'.")]
    ExpectedIdentifier {
        /// The token found instead.
        token:    Token,
        /// Byte offset of the token.
        position: usize,
    },
    /// Parentheses, indexes, signs or right-associative operators were
    /// nested beyond the parser's limit.
    #[error("Error at position {position}: Expression nested more than {limit} levels deep.")]
    NestingTooDeep {
        /// Byte offset of the token that opened one level too many.
        position: usize,
        /// The maximum nesting depth.
        limit:    usize,
    },
    /// Found extra tokens after a complete statement or expression.
    #[error("Error at position {position}: Extra tokens after expression, starting at '{token}'.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    Token,
        /// Byte offset of the token.
        position: usize,
    },
}

impl ParseError {
    /// Returns the byte offset the error points at.
    ///
    /// # Example
    /// ```
    /// use gramcalc::{Grammar, parse_expression};
    ///
    /// let err = parse_expression("1 + )", &Grammar::full()).unwrap_err();
    /// assert_eq!(err.position(), 4);
    ///
    /// let err = parse_expression("2+", &Grammar::full()).unwrap_err();
    /// assert_eq!(err.position(), 2);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lex(LexError { position, .. })
            | Self::UnexpectedToken { position, .. }
            | Self::ExpectedClosingParen { position }
            | Self::ExpectedClosingBracket { position }
            | Self::ExpectedIdentifier { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::NestingTooDeep { position, .. }
            | Self::UnexpectedTrailingTokens { position, .. } => *position,
        }
    }
}
