use thiserror::Error;

/// The ways in which solving an equation can fail.
///
/// Validation failures are reported before any evaluation work happens, so a
/// structurally broken equation never mutates a stack. The remaining variants
/// abort an evaluation that is already underway.
///
/// # Examples
///
/// ```
/// use equation_solver::solver::error::EvaluationError;
/// use equation_solver::solver::solve;
///
/// match solve("5/0") {
///     Err(EvaluationError::DivisionByZero) => {}
///     other => panic!("expected a division by zero, got {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// The equation is structurally malformed: unbalanced brackets, a
    /// misplaced operator, or a character outside the supported set.
    ///
    /// The display text is the exact notice shown to users, so shells can
    /// print it as-is.
    #[error("Invalid equation")]
    InvalidExpression,

    /// A division was asked to divide by exactly zero, whether the divisor
    /// was written literally or computed.
    #[error("division by zero")]
    DivisionByZero,

    /// A numeric literal passed the deliberately lenient validator but could
    /// not be parsed, such as one with multiple decimal points.
    #[error("malformed number `{0}`")]
    MalformedNumber(String),

    /// A state the evaluator cannot reach as long as validation runs first.
    /// Reported as an error instead of a panic so callers survive it like
    /// any other failed evaluation.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(&'static str),
}
