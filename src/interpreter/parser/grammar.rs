use crate::{ast::BinaryOperator, interpreter::lexer::Token};

/// How operators of one precedence level group when chained.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` parses as `(a - b) - c`.
    Left,
    /// `a ** b ** c` parses as `a ** (b ** c)`.
    Right,
}

/// One row of the precedence table: the binary operators that bind equally
/// tightly, and how they chain.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecedenceLevel {
    /// The tokens recognized at this level and the operator each produces.
    pub operators:     Vec<(Token, BinaryOperator)>,
    /// Grouping of repeated operators at this level.
    pub associativity: Associativity,
}

impl PrecedenceLevel {
    /// `+` and `-`, left-associative.
    #[must_use]
    pub fn additive() -> Self {
        Self { operators:     vec![(Token::Plus, BinaryOperator::Add),
                                   (Token::Minus, BinaryOperator::Sub)],
               associativity: Associativity::Left, }
    }

    /// `*` and `/`, left-associative.
    #[must_use]
    pub fn multiplicative() -> Self {
        Self { operators:     vec![(Token::Star, BinaryOperator::Mul),
                                   (Token::Slash, BinaryOperator::Div)],
               associativity: Associativity::Left, }
    }

    /// `**`, right-associative.
    #[must_use]
    pub fn power() -> Self {
        Self { operators:     vec![(Token::DoubleStar, BinaryOperator::Pow)],
               associativity: Associativity::Right, }
    }

    /// Maps a token to the operator it produces at this level.
    ///
    /// # Example
    /// ```
    /// use gramcalc::{
    ///     ast::BinaryOperator,
    ///     interpreter::{lexer::Token, parser::grammar::PrecedenceLevel},
    /// };
    ///
    /// let level = PrecedenceLevel::additive();
    /// assert_eq!(level.operator_for(&Token::Minus), Some(BinaryOperator::Sub));
    /// assert_eq!(level.operator_for(&Token::Star), None);
    /// ```
    #[must_use]
    pub fn operator_for(&self, token: &Token) -> Option<BinaryOperator> {
        self.operators
            .iter()
            .find(|(candidate, _)| candidate == token)
            .map(|(_, op)| *op)
    }
}

/// A grammar variant: the binary precedence table plus the optional
/// statement-level features.
///
/// All variants share the same unary and primary rules:
///
/// ```text
///     unary   := ("+" | "-") unary | primary
///     primary := IDENTIFIER "[" expression "]" | atom
///     atom    := NUMBER | IDENTIFIER | "(" expression ")"
/// ```
///
/// The operand of the tightest binary level is `unary`, so a sign binds more
/// tightly than every binary operator (`-2**2` is `(-2)**2`).
#[derive(Debug, Clone, PartialEq)]
pub struct Grammar {
    /// Binary precedence levels, loosest first.
    pub levels:      Vec<PrecedenceLevel>,
    /// Whether bare identifiers are atoms.
    pub identifiers: bool,
    /// Whether `primary "=" assignment` is accepted.
    pub assignment:  bool,
    /// Whether `@defmap` statements and `name[index]` references are
    /// accepted.
    pub maps:        bool,
}

impl Grammar {
    /// Numbers, parentheses, signs, `+ -` and `* /`. There is no power
    /// level: `unary` feeds `muldiv` directly.
    #[must_use]
    pub fn basic() -> Self {
        Self { levels:      vec![PrecedenceLevel::additive(), PrecedenceLevel::multiplicative()],
               identifiers: false,
               assignment:  false,
               maps:        false, }
    }

    /// [`Grammar::basic`] plus a right-associative `**` level between
    /// `muldiv` and `unary`.
    #[must_use]
    pub fn arithmetic() -> Self {
        Self { levels: vec![PrecedenceLevel::additive(),
                            PrecedenceLevel::multiplicative(),
                            PrecedenceLevel::power()],
               ..Self::basic() }
    }

    /// [`Grammar::arithmetic`] plus variables, right-associative assignment,
    /// `@defmap` and indexed map references.
    #[must_use]
    pub fn full() -> Self {
        Self { identifiers: true,
               assignment: true,
               maps: true,
               ..Self::arithmetic() }
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::full()
    }
}
