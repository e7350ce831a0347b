use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        context::ExecutionContext,
        evaluator::core::EvalResult,
        value::core::SemanticValue,
    },
};

impl ExecutionContext {
    /// Evaluates both operands left to right, reads them and applies the
    /// operator.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr)
                                 -> EvalResult<SemanticValue> {
        let left = self.eval(left)?.read(self)?;
        let right = self.eval(right)?.read(self)?;
        Ok(SemanticValue::Scalar(Self::eval_binary(op, left, right)))
    }

    /// Applies a binary operator to two numbers.
    ///
    /// Arithmetic follows IEEE 754: division by zero gives an infinity or NaN
    /// and a negative base with a fractional exponent gives NaN. None of these
    /// are errors.
    ///
    /// # Example
    /// ```
    /// use gramcalc::{ast::BinaryOperator, interpreter::context::ExecutionContext};
    ///
    /// assert_eq!(ExecutionContext::eval_binary(BinaryOperator::Pow, 2.0, -2.0), 0.25);
    /// assert_eq!(ExecutionContext::eval_binary(BinaryOperator::Div, 1.0, 0.0),
    ///            f64::INFINITY);
    /// assert!(ExecutionContext::eval_binary(BinaryOperator::Pow, -8.0, 0.5).is_nan());
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
        match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => left / right,
            BinaryOperator::Pow => left.powf(right),
        }
    }
}
