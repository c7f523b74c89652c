use thiserror::Error;

use crate::enumeration::EnumerationError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Enumeration error: {0}")]
    Enumeration(#[from] EnumerationError),
    #[error("Search cancelled")]
    Cancelled,
    #[error("{len} inputs given but at most {max} are allowed")]
    TooManyInputs { len: usize, max: usize },
}
