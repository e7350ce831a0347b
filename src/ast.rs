use std::fmt;

/// An abstract syntax tree (AST) node representing an expression.
///
/// Each variant carries the byte offset of the token that introduced it, so
/// evaluation errors can point back into the source text.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The constant value.
        value:    f64,
        /// Byte offset in the source.
        position: usize,
    },
    /// Reference to a scalar variable by name.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Byte offset in the source.
        position: usize,
    },
    /// An element of a named map, such as `zz[1]`.
    Index {
        /// Name of the map.
        name:     String,
        /// The key expression.
        index:    Box<Self>,
        /// Byte offset in the source.
        position: usize,
    },
    /// A prefix sign applied to an operand.
    UnaryOp {
        /// The sign.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Byte offset in the source.
        position: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator.
        position: usize,
    },
    /// Assignment of a value to a reference; itself an expression yielding
    /// the assigned number.
    Assign {
        /// The expression that must evaluate to a reference.
        target:   Box<Self>,
        /// The assigned expression.
        value:    Box<Self>,
        /// Byte offset of the `=` token.
        position: usize,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use gramcalc::ast::Expr;
    ///
    /// let expr = Expr::Variable { name:     "x".to_string(),
    ///                             position: 5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Number { position, .. }
            | Self::Variable { position, .. }
            | Self::Index { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::Assign { position, .. } => *position,
        }
    }
}

/// Represents a top-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `@defmap name`: declares (or resets) an empty map.
    DefMap {
        /// The name of the map.
        name:     String,
        /// Byte offset in the source.
        position: usize,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr:     Expr,
        /// Byte offset in the source.
        position: usize,
    },
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`**`)
    Pow,
}

/// Represents a prefix sign.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Minus,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "**",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
        }
    }
}

/// Renders the expression fully parenthesized, so the tree shape chosen by
/// the parser is visible.
///
/// ```
/// use gramcalc::{Grammar, parse_expression};
///
/// let expr = parse_expression("2**3**2 - -a", &Grammar::full()).unwrap();
/// assert_eq!(expr.to_string(), "((2 ** (3 ** 2)) - (-a))");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::Index { name, index, .. } => write!(f, "{name}[{index}]"),
            Self::UnaryOp { op, expr, .. } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::Assign { target, value, .. } => write!(f, "({target} = {value})"),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DefMap { name, .. } => write!(f, "@defmap {name}"),
            Self::Expression { expr, .. } => write!(f, "{expr}"),
        }
    }
}
