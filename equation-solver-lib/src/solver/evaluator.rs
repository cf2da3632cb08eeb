use crate::solver::error::EvaluationError;
use crate::solver::operator::BinaryOperator;

/// A pending entry on the operator stack: an operator waiting for its right
/// operand, or an open bracket waiting for its matching close.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Pending {
    Operator(BinaryOperator),
    OpenBracket,
}

/// Evaluates a normalized equation with a single left-to-right scan over two
/// stacks, one of operands and one of pending operators.
///
/// The scan assumes the text has already passed [`validator::is_valid`]; it
/// still guards every stack operation, so structurally broken input that
/// slips through comes back as an error rather than a panic. Numeric
/// literals start at a digit, except that a minus at position 0 is taken as
/// the sign of the first literal.
///
/// [`validator::is_valid`]: crate::solver::validator::is_valid
///
/// # Arguments
///
/// * `equation`: The normalized equation text.
///
/// returns: The numeric value of the equation.
///
/// # Examples
///
/// ```
/// use equation_solver::solver::evaluator::evaluate;
///
/// let value = evaluate("3+(2x4)").unwrap();
/// assert_eq!(value, 11.0);
/// ```
pub fn evaluate(equation: &str) -> Result<f64, EvaluationError> {
    let characters: Vec<char> = equation.chars().collect();
    let mut operators: Vec<Pending> = Vec::new();
    let mut operands: Vec<f64> = Vec::new();
    let mut i = 0;

    while i < characters.len() {
        let character = characters[i];
        if character.is_ascii_digit() || (i == 0 && character == '-') {
            let start = i;
            if character == '-' {
                i += 1;
            }
            while i < characters.len() && (characters[i].is_ascii_digit() || characters[i] == '.') {
                i += 1;
            }
            let literal: String = characters[start..i].iter().collect();
            let operand = literal
                .parse::<f64>()
                .map_err(|_| EvaluationError::MalformedNumber(literal))?;
            operands.push(operand);
        } else if let Some(operator) = BinaryOperator::from_symbol(character) {
            while let Some(&Pending::Operator(stacked)) = operators.last() {
                if !stacked.reduces_before(&operator) {
                    break;
                }
                reduce(&mut operators, &mut operands)?;
            }
            operators.push(Pending::Operator(operator));
            i += 1;
        } else if character == '(' {
            operators.push(Pending::OpenBracket);
            i += 1;
        } else if character == ')' {
            loop {
                match operators.last() {
                    Some(Pending::OpenBracket) => {
                        operators.pop();
                        break;
                    }
                    Some(Pending::Operator(_)) => reduce(&mut operators, &mut operands)?,
                    // Validation matches brackets already; the scan guards
                    // against an unmatched close on its own as well.
                    None => return Err(EvaluationError::InvalidExpression),
                }
            }
            i += 1;
        } else {
            // Only reachable when validation was skipped, or for a literal
            // led by a decimal point, which validation deliberately passes.
            return Err(EvaluationError::InvariantViolation(
                "unrecognized character in the evaluation scan",
            ));
        }
    }

    while !operators.is_empty() {
        reduce(&mut operators, &mut operands)?;
    }

    let result = operands.pop().ok_or(EvaluationError::InvariantViolation(
        "operand stack drained empty",
    ))?;
    if !operands.is_empty() {
        return Err(EvaluationError::InvariantViolation(
            "operand stack held more than one result",
        ));
    }
    Ok(result)
}

/// Pops one operator and two operands and pushes the operator applied to
/// them. The second operand comes off the stack first.
fn reduce(operators: &mut Vec<Pending>, operands: &mut Vec<f64>) -> Result<(), EvaluationError> {
    let operator = match operators.pop() {
        Some(Pending::Operator(operator)) => operator,
        Some(Pending::OpenBracket) => {
            return Err(EvaluationError::InvariantViolation(
                "open bracket left on the operator stack",
            ))
        }
        None => {
            return Err(EvaluationError::InvariantViolation(
                "operator stack drained empty",
            ))
        }
    };
    let operand_two = operands.pop().ok_or(EvaluationError::InvariantViolation(
        "operand stack underflow during reduction",
    ))?;
    let operand_one = operands.pop().ok_or(EvaluationError::InvariantViolation(
        "operand stack underflow during reduction",
    ))?;
    operands.push(operator.apply(operand_one, operand_two)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[parameterized(
    equation = {
    "42",
    "3+2",
    "8-3",
    "2+3x4",
    "3+(2x4)",
    "(2+3)x4",
    "8/2/2",
    "9-3-2",
    "2x2x2",
    "100/10/5/2",
    "((((5))))",
    "(5)x(3)",
    "-5+3",
    "-5x3",
    "-.5x4",
    "10/4",
    "5.",
    "0.5x8",
    },
    expected = {
    42.0,
    5.0,
    5.0,
    14.0,
    11.0,
    20.0,
    2.0,
    4.0,
    8.0,
    1.0,
    5.0,
    15.0,
    -2.0,
    -15.0,
    -2.0,
    2.5,
    5.0,
    4.0,
    }
    )]
    fn equations_evaluate_to_expected_values(equation: &str, expected: f64) {
        let actual = evaluate(equation).unwrap();
        assert_eq!(actual, expected)
    }

    #[test]
    fn equal_precedence_divisions_group_left_to_right() {
        // (8/2)/2, not 8/(2/2).
        assert_eq!(evaluate("8/2/2").unwrap(), 2.0)
    }

    #[test]
    fn reduction_applies_operands_in_push_order() {
        assert_eq!(evaluate("8-3").unwrap(), 5.0)
    }

    #[test]
    fn literal_division_by_zero_is_reported() {
        assert_eq!(evaluate("5/0"), Err(EvaluationError::DivisionByZero))
    }

    #[test]
    fn computed_division_by_zero_is_reported() {
        assert_eq!(evaluate("5/(2-2)"), Err(EvaluationError::DivisionByZero))
    }

    #[test]
    fn multiple_decimal_points_fail_at_the_number_parse() {
        assert_eq!(
            evaluate("1.2.3"),
            Err(EvaluationError::MalformedNumber("1.2.3".to_string()))
        )
    }

    #[test]
    fn leading_minus_without_digits_is_a_malformed_number() {
        assert_eq!(
            evaluate("-(2+3)"),
            Err(EvaluationError::MalformedNumber("-".to_string()))
        )
    }

    #[test]
    fn unmatched_close_bracket_is_caught_by_the_runtime_guard() {
        assert_eq!(evaluate("3+2)"), Err(EvaluationError::InvalidExpression))
    }

    #[test]
    fn literal_cannot_start_with_a_decimal_point() {
        assert!(matches!(
            evaluate(".5"),
            Err(EvaluationError::InvariantViolation(_))
        ))
    }

    #[test]
    fn empty_bracket_pair_leaves_no_result() {
        assert!(matches!(
            evaluate("()"),
            Err(EvaluationError::InvariantViolation(_))
        ))
    }

    #[test]
    fn operator_with_missing_operand_underflows_the_stack() {
        assert!(matches!(
            evaluate("3+()"),
            Err(EvaluationError::InvariantViolation(_))
        ))
    }

    #[test]
    fn adjacent_groups_leave_more_than_one_result() {
        assert!(matches!(
            evaluate("(3)(4)"),
            Err(EvaluationError::InvariantViolation(_))
        ))
    }

    #[test]
    fn unsupported_character_is_an_invariant_violation() {
        assert!(matches!(
            evaluate("3&2"),
            Err(EvaluationError::InvariantViolation(_))
        ))
    }

    #[test]
    fn unmatched_open_bracket_surfaces_in_the_drain() {
        // Validation rejects this; fed in directly, the drain reports it.
        assert!(matches!(
            evaluate("(3+2"),
            Err(EvaluationError::InvariantViolation(_))
        ))
    }
}
