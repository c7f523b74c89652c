use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Not a number: {0}")]
    InvalidNumber(String),
    #[error("Number must be finite: {0}")]
    NonFiniteNumber(String),
}
