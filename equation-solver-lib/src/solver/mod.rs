pub mod error;
pub mod evaluator;
mod operator;
pub mod validator;

use crate::debug;
use crate::solver::error::EvaluationError;

/// Solves the given arithmetic equation and formats the result.
///
/// The supported notation is decimal literals, the binary operators `+`,
/// `-`, `x` (multiply) and `/`, bracketed grouping, and a minus sign on the
/// very first literal. Space characters are stripped before anything else
/// looks at the text.
///
/// The result is rendered with `f64`'s `Display`, the shortest decimal
/// string that parses back to the same value.
///
/// # Arguments
///
/// * `equation`: The equation text, spaces allowed.
///
/// returns: The formatted numeric result.
///
/// # Examples
///
/// ```
/// use equation_solver::solver::solve;
///
/// let result = solve("3 + (2 x 4)").unwrap();
/// assert_eq!(result, "11");
/// ```
pub fn solve(equation: &str) -> Result<String, EvaluationError> {
    let value = evaluate(equation)?;
    Ok(value.to_string())
}

/// Evaluates the given arithmetic equation down to its numeric value.
///
/// This is the pipeline behind [`solve`]: normalize the text, check its
/// structure, then run the scan. Validation failures come back as
/// [`EvaluationError::InvalidExpression`] before any evaluation starts.
///
/// # Arguments
///
/// * `equation`: The equation text, spaces allowed.
///
/// returns: The numeric value of the equation.
///
/// # Examples
///
/// ```
/// use equation_solver::solver::evaluate;
///
/// let value = evaluate("8/2/2").unwrap();
/// assert_eq!(value, 2.0);
/// ```
pub fn evaluate(equation: &str) -> Result<f64, EvaluationError> {
    let normalized = normalize(equation);
    debug!(&normalized);
    if !validator::is_valid(&normalized) {
        return Err(EvaluationError::InvalidExpression);
    }
    evaluator::evaluate(&normalized)
}

/// Strips every space character. No other normalization is applied, so tabs
/// and other whitespace reach the validator and are rejected there.
fn normalize(equation: &str) -> String {
    equation.replace(' ', "")
}

#[macro_export]
#[cfg(debug_assertions)]
macro_rules! debug {
    ($( $args:expr ),*) => { dbg!( $( $args ),* ); }
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! debug {
    ($( $args:expr ),*) => {()}
}
