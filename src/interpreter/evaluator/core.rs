use log::debug;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        context::ExecutionContext,
        value::core::{Reference, SemanticValue},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl ExecutionContext {
    /// Evaluates an expression and returns the resulting semantic value.
    ///
    /// This is the main entry point for expression evaluation. Variables and
    /// indexed map elements evaluate to references that are not read yet;
    /// every operator reads its operands and produces a plain number.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The [`SemanticValue`] of the expression.
    ///
    /// # Example
    /// ```
    /// use gramcalc::{Grammar, interpreter::context::ExecutionContext, parse_expression};
    ///
    /// let mut context = ExecutionContext::new();
    /// let expr = parse_expression("a = 3 + 4 * 5", &Grammar::full()).unwrap();
    ///
    /// let value = context.eval(&expr).unwrap();
    /// assert_eq!(value.read(&context).unwrap(), 23.0);
    /// assert_eq!(context.scalar("a"), 23.0);
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<SemanticValue> {
        match expr {
            Expr::Number { value, .. } => Ok(SemanticValue::Scalar(*value)),
            Expr::Variable { name, .. } => Ok(Reference::Variable(name.clone()).into()),
            Expr::Index { name,
                          index,
                          position, } => {
                let index = self.eval(index)?;
                Ok(Reference::Indexed { map:      name.clone(),
                                        index:    Box::new(index),
                                        position: *position, }.into())
            },
            Expr::UnaryOp { op, expr, .. } => self.eval_unary_op(*op, expr),
            Expr::BinaryOp { left, op, right, .. } => self.eval_binary_op(left, *op, right),
            Expr::Assign { target,
                           value,
                           position, } => self.eval_assignment(target, value, *position),
        }
    }

    /// Evaluates a single statement.
    ///
    /// Map declarations modify the context and yield no value, which is
    /// distinct from yielding zero. Expression statements yield the value of
    /// their expression.
    ///
    /// # Returns
    /// `Some(SemanticValue)` for expression statements, `None` for `@defmap`.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Option<SemanticValue>> {
        match statement {
            Statement::DefMap { name, .. } => {
                debug!("declaring map '{name}'");
                self.define_map(name);
                Ok(None)
            },
            Statement::Expression { expr, .. } => self.eval(expr).map(Some),
        }
    }
}
