use std::fmt;

use ordered_float::OrderedFloat;

use crate::{
    error::{AssignmentError, RuntimeError},
    interpreter::{context::ExecutionContext, evaluator::core::EvalResult},
};

/// The result of evaluating an expression.
///
/// Either a plain number or a reference that can be read now and written
/// later. Only [`Reference`] has a `write` method, so assigning to a plain
/// number cannot be expressed without going through
/// [`SemanticValue::into_reference`], which reports it as an
/// [`AssignmentError`].
#[derive(Debug, Clone, PartialEq)]
pub enum SemanticValue {
    /// A computed or literal number.
    Scalar(f64),
    /// An assignable location.
    Reference(Reference),
}

/// An assignable location in an [`ExecutionContext`].
#[derive(Debug, Clone, PartialEq)]
pub enum Reference {
    /// A scalar variable.
    Variable(String),
    /// An element of a named map.
    Indexed {
        /// Name of the map.
        map:      String,
        /// The key, read each time the element is read or written.
        index:    Box<SemanticValue>,
        /// Byte offset of the reference, for error reporting.
        position: usize,
    },
}

impl From<f64> for SemanticValue {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Reference> for SemanticValue {
    fn from(reference: Reference) -> Self {
        Self::Reference(reference)
    }
}

impl SemanticValue {
    /// Reads the numeric value.
    ///
    /// # Errors
    /// Propagates the errors of [`Reference::read`].
    ///
    /// # Example
    /// ```
    /// use gramcalc::interpreter::{
    ///     context::ExecutionContext,
    ///     value::core::{Reference, SemanticValue},
    /// };
    ///
    /// let context = ExecutionContext::new();
    /// assert_eq!(SemanticValue::Scalar(2.5).read(&context).unwrap(), 2.5);
    ///
    /// let unset = SemanticValue::from(Reference::Variable("a".to_string()));
    /// assert!(unset.read(&context).unwrap().is_nan());
    /// ```
    pub fn read(&self, context: &ExecutionContext) -> EvalResult<f64> {
        match self {
            Self::Scalar(value) => Ok(*value),
            Self::Reference(reference) => reference.read(context),
        }
    }

    /// Converts the value into an assignment target.
    ///
    /// # Errors
    /// Returns an [`AssignmentError`] at `position` for a plain number.
    pub fn into_reference(self, position: usize) -> Result<Reference, AssignmentError> {
        match self {
            Self::Reference(reference) => Ok(reference),
            Self::Scalar(_) => Err(AssignmentError { position }),
        }
    }

    /// Whether the value can be assigned to.
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(_))
    }
}

impl Reference {
    /// Reads the current value of the location.
    ///
    /// Variables that were never assigned read as NaN. Map elements are
    /// stricter: the map must have been declared and the key written.
    ///
    /// # Errors
    /// - `RuntimeError::UnknownMap` if the map was never declared.
    /// - `RuntimeError::MissingKey` if the key was never written.
    pub fn read(&self, context: &ExecutionContext) -> EvalResult<f64> {
        match self {
            Self::Variable(name) => Ok(context.scalar(name)),
            Self::Indexed { map, index, position } => {
                let store = context.map(map)
                                   .ok_or_else(|| RuntimeError::UnknownMap { name:     map.clone(),
                                                                             position: *position, })?;
                let key = index.read(context)?;

                store.get(&OrderedFloat(key))
                     .copied()
                     .ok_or_else(|| RuntimeError::MissingKey { name: map.clone(),
                                                               key,
                                                               position: *position })
            },
        }
    }

    /// Stores `value` at the location, creating the variable or map element
    /// if absent.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownMap` if an indexed map was never
    /// declared.
    pub fn write(&self, value: f64, context: &mut ExecutionContext) -> EvalResult<()> {
        match self {
            Self::Variable(name) => {
                context.set_scalar(name, value);
                Ok(())
            },
            Self::Indexed { map, index, position } => {
                let unknown = || RuntimeError::UnknownMap { name:     map.clone(),
                                                            position: *position, };
                if context.map(map).is_none() {
                    return Err(unknown());
                }
                let key = index.read(context)?;

                context.map_mut(map)
                       .ok_or_else(unknown)?
                       .insert(OrderedFloat(key), value);
                Ok(())
            },
        }
    }
}

impl fmt::Display for SemanticValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(value) => write!(f, "{value}"),
            Self::Reference(reference) => write!(f, "{reference}"),
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable(name) => write!(f, "{name}"),
            Self::Indexed { map, index, .. } => write!(f, "{map}[{index}]"),
        }
    }
}
