use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        context::ExecutionContext,
        evaluator::core::EvalResult,
        value::core::SemanticValue,
    },
};

impl ExecutionContext {
    /// Evaluates a sign applied to an operand.
    ///
    /// The operand is read, so `+a` is a plain number rather than a reference
    /// to `a`.
    pub(crate) fn eval_unary_op(&mut self,
                                op: UnaryOperator,
                                expr: &Expr)
                                -> EvalResult<SemanticValue> {
        let operand = self.eval(expr)?.read(self)?;
        Ok(SemanticValue::Scalar(Self::eval_unary(op, operand)))
    }

    /// Applies a sign to a number.
    ///
    /// # Example
    /// ```
    /// use gramcalc::{ast::UnaryOperator, interpreter::context::ExecutionContext};
    ///
    /// assert_eq!(ExecutionContext::eval_unary(UnaryOperator::Plus, -3.0), -3.0);
    /// assert_eq!(ExecutionContext::eval_unary(UnaryOperator::Minus, -3.0), 3.0);
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
        match op {
            UnaryOperator::Plus => value,
            UnaryOperator::Minus => -value,
        }
    }
}
