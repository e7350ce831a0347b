use log::debug;

use crate::{
    ast::Expr,
    interpreter::{
        context::ExecutionContext,
        evaluator::core::EvalResult,
        value::core::SemanticValue,
    },
};

impl ExecutionContext {
    /// Evaluates `target = value`.
    ///
    /// The target is evaluated first and must be a reference. The value is
    /// then evaluated and read, written through the reference, and returned
    /// as a fresh plain number, so `a = b = 5` yields 5 and sets both names.
    ///
    /// # Errors
    /// - `RuntimeError::Assignment` if the target is a plain number, as in
    ///   `2 = 3` or `(c = d) = 3`.
    /// - Any error raised while evaluating either side or writing.
    pub(crate) fn eval_assignment(&mut self,
                                  target: &Expr,
                                  value: &Expr,
                                  position: usize)
                                  -> EvalResult<SemanticValue> {
        let reference = self.eval(target)?.into_reference(position)?;
        let number = self.eval(value)?.read(self)?;

        reference.write(number, self)?;
        debug!("assigned {reference} = {number}");

        Ok(SemanticValue::Scalar(number))
    }
}
