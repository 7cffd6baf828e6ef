//! The evaluation capability a wait polls against.
//!
//! The evaluator only needs one thing from the outside world: evaluate an
//! expression against the current state of some live target and hand back
//! the value. Anything that can do that (a Chrome page, a scripted fake in
//! tests) implements [`EvaluationTarget`].

use crate::error::EvaluationError;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// A live object that can evaluate predicate expressions.
///
/// The target is shared and may be mutated by other flows between calls;
/// every evaluation must reflect its current state. Implementations should
/// map `undefined` results to [`Value::Null`].
#[async_trait]
pub trait EvaluationTarget: Send + Sync {
    /// Evaluates `expression` and returns its value.
    ///
    /// # Errors
    ///
    /// Returns `EvaluationError::Script` if the expression is malformed or
    /// throws, and `EvaluationError::Unavailable` if the target cannot be
    /// reached.
    async fn evaluate_expression(&self, expression: &str) -> Result<Value, EvaluationError>;
}

#[async_trait]
impl<T: EvaluationTarget + ?Sized> EvaluationTarget for Arc<T> {
    async fn evaluate_expression(&self, expression: &str) -> Result<Value, EvaluationError> {
        (**self).evaluate_expression(expression).await
    }
}

/// JavaScript truthiness of a JSON value.
///
/// `null`, `false`, `0` and `""` are falsy; everything else, including empty
/// arrays and objects, is truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
