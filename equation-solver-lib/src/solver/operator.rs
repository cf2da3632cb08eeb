use crate::solver::error::EvaluationError;

/// A binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    /// Looks up the operator written with the given symbol.
    ///
    /// Multiplication is written `x`; `*` is not part of the notation and
    /// maps to `None` like any other unsupported character.
    pub fn from_symbol(symbol: char) -> Option<BinaryOperator> {
        match symbol {
            '+' => Some(BinaryOperator::Add),
            '-' => Some(BinaryOperator::Subtract),
            'x' => Some(BinaryOperator::Multiply),
            '/' => Some(BinaryOperator::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => 'x',
            BinaryOperator::Divide => '/',
        }
    }

    pub(crate) fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide => 2,
        }
    }

    /// Whether this operator, already on the operator stack, must be reduced
    /// before `incoming` is pushed. All four operators are left-associative,
    /// so an equal-precedence stacked operator reduces first.
    pub(crate) fn reduces_before(&self, incoming: &BinaryOperator) -> bool {
        self.precedence() >= incoming.precedence()
    }

    /// Applies the operator to two operands, left operand first.
    pub fn apply(&self, operand_one: f64, operand_two: f64) -> Result<f64, EvaluationError> {
        match self {
            BinaryOperator::Add => Ok(operand_one + operand_two),
            BinaryOperator::Subtract => Ok(operand_one - operand_two),
            BinaryOperator::Multiply => Ok(operand_one * operand_two),
            BinaryOperator::Divide => {
                if operand_two == 0.0 {
                    Err(EvaluationError::DivisionByZero)
                } else {
                    Ok(operand_one / operand_two)
                }
            }
        }
    }
}
