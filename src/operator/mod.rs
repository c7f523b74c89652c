//! Arithmetic operators used by the search

mod display;
mod errors;
mod op;

pub use errors::OperatorError;
pub use op::Operator;
