use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperatorError {
    #[error("Operator ordinal {0} is outside 0..=3")]
    InvalidOrdinal(usize),
    #[error("Unknown operator symbol: {0}")]
    UnknownSymbol(char),
}
