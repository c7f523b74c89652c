use thiserror::Error;

use crate::operator::OperatorError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumerationError {
    #[error("{steps} reduction steps exceeds the supported maximum of {max}")]
    TooManySteps { steps: usize, max: usize },
    #[error("Operator decoding error: {0}")]
    Operator(#[from] OperatorError),
}
