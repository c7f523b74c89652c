use crate::operator::errors::OperatorError;

/// One of the four binary operators a reduction step can apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operator {
    /// Number of operators, i.e. the base of the assignment enumeration
    pub const COUNT: usize = 4;

    /// All operators in ordinal order
    pub const ALL: [Operator; Operator::COUNT] = [
        Operator::Addition,
        Operator::Subtraction,
        Operator::Multiplication,
        Operator::Division,
    ];

    /// # Errors
    ///
    /// Returns `OperatorError::InvalidOrdinal` if `ordinal` is not in `0..=3`.
    pub fn from_ordinal(ordinal: usize) -> Result<Self, OperatorError> {
        Self::ALL
            .get(ordinal)
            .copied()
            .ok_or(OperatorError::InvalidOrdinal(ordinal))
    }

    pub fn ordinal(self) -> usize {
        match self {
            Operator::Addition => 0,
            Operator::Subtraction => 1,
            Operator::Multiplication => 2,
            Operator::Division => 3,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Addition => "+",
            Operator::Subtraction => "-",
            Operator::Multiplication => "*",
            Operator::Division => "/",
        }
    }

    /// Parse a display symbol back into an operator.
    ///
    /// Accepts the ASCII symbols plus `x`, `×` and `÷`.
    ///
    /// # Errors
    ///
    /// Returns `OperatorError::UnknownSymbol` for anything else.
    pub fn from_symbol(symbol: char) -> Result<Self, OperatorError> {
        match symbol {
            '+' => Ok(Operator::Addition),
            '-' => Ok(Operator::Subtraction),
            '*' | 'x' | '×' => Ok(Operator::Multiplication),
            '/' | '÷' => Ok(Operator::Division),
            other => Err(OperatorError::UnknownSymbol(other)),
        }
    }

    /// Apply the operator with IEEE-754 semantics.
    ///
    /// Division by zero is not special-cased: it produces an infinity or NaN
    /// that flows into later steps.
    #[inline]
    pub fn apply(self, l: f64, r: f64) -> f64 {
        match self {
            Operator::Addition => l + r,
            Operator::Subtraction => l - r,
            Operator::Multiplication => l * r,
            Operator::Division => l / r,
        }
    }
}
