use std::fmt;

use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Signs are not part of numerals; `-3` lexes as `Minus` followed by
/// `Number(3.0)` and the parser decides what the sign means.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `2.` or `.5`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// Identifier tokens; a letter followed by letters and digits, such as
    /// `a`, `mm` or `zxcv1`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `@defmap`
    #[token("@defmap")]
    DefMap,
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `=`
    #[token("=")]
    Equals,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::DefMap => write!(f, "@defmap"),
            Self::DoubleStar => write!(f, "**"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::Equals => write!(f, "="),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the slice is not a valid number, which logos reports as a
///   lexing error.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Collects the whole token stream of `source`.
///
/// Every token is paired with the byte offset where it starts. The offset is
/// the position reported by parse errors.
///
/// # Errors
/// Returns a [`LexError`] for the first character sequence that matches no
/// token, such as `$` or `@hello`.
///
/// # Example
/// ```
/// use gramcalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("zz[1] = 2.5").unwrap();
/// assert_eq!(tokens[0], (Token::Identifier("zz".to_string()), 0));
/// assert_eq!(tokens[4], (Token::Equals, 6));
/// assert!(tokenize("2 $ 3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start));
        } else {
            return Err(LexError { text:     lexer.slice().to_string(),
                                  position: lexer.span().start, });
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap()
                        .into_iter()
                        .map(|(token, _)| token)
                        .collect()
    }

    #[test]
    fn double_star_is_one_token() {
        assert_eq!(kinds("2**3"),
                   vec![Token::Number(2.0), Token::DoubleStar, Token::Number(3.0)]);
        assert_eq!(kinds("2* *3"),
                   vec![Token::Number(2.0), Token::Star, Token::Star, Token::Number(3.0)]);
    }

    #[test]
    fn numerals_have_no_sign() {
        assert_eq!(kinds("-3.5"), vec![Token::Minus, Token::Number(3.5)]);
        assert_eq!(kinds(".25"), vec![Token::Number(0.25)]);
        assert_eq!(kinds("7."), vec![Token::Number(7.0)]);
    }

    #[test]
    fn defmap_statement() {
        assert_eq!(kinds("@defmap yx"),
                   vec![Token::DefMap, Token::Identifier("yx".to_string())]);
    }

    #[test]
    fn whitespace_is_skipped_and_positions_are_byte_offsets() {
        let tokens = tokenize("  (3 +\t4)").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|(_, position)| *position).collect();
        assert_eq!(positions, vec![2, 3, 5, 7, 8]);
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("   ").unwrap().is_empty());
    }

    #[test]
    fn unrecognized_characters_are_lex_errors() {
        let err = tokenize("2$").unwrap_err();
        assert_eq!(err.text, "$");
        assert_eq!(err.position, 1);
        assert!(tokenize("@hello").is_err());
        assert!(tokenize("a_b").is_err());
    }
}
