use crate::solver::operator::BinaryOperator;

/// Checks the structural validity of a normalized (space-free) equation in a
/// single pass.
///
/// The check tracks bracket counts and whether an operand is expected next,
/// which rejects unbalanced brackets, misplaced operators and characters
/// outside the supported set. It does not check the shape of numeric
/// literals, so text like `1.2.3` passes here and fails later when the
/// evaluator parses it.
///
/// # Arguments
///
/// * `equation`: The normalized equation text.
///
/// returns: Whether the equation is structurally valid.
///
/// # Examples
///
/// ```
/// use equation_solver::solver::validator::is_valid;
///
/// assert!(is_valid("3+(2x4)"));
/// assert!(!is_valid("3++2"));
/// ```
pub fn is_valid(equation: &str) -> bool {
    let mut open_brackets: usize = 0;
    let mut close_brackets: usize = 0;
    let mut expect_operand = true;

    for (position, character) in equation.chars().enumerate() {
        if character.is_ascii_digit() || character == '.' {
            expect_operand = false;
        } else if BinaryOperator::from_symbol(character).is_some() {
            // A minus at the very start signs a negative literal rather than
            // acting as an operator, and leaves the operand still expected.
            if position == 0 && character == '-' {
                continue;
            }
            if expect_operand {
                return false;
            }
            expect_operand = true;
        } else if character == '(' {
            open_brackets += 1;
        } else if character == ')' {
            close_brackets += 1;
            if close_brackets > open_brackets {
                return false;
            }
            expect_operand = false;
        } else {
            return false;
        }
    }

    if open_brackets != close_brackets {
        return false;
    }

    // Ending while still expecting an operand covers the empty equation and
    // trailing operators alike.
    !expect_operand
}
