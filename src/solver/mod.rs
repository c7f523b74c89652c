mod cancel;
mod config;
pub mod constants;
mod core;
mod errors;
mod evaluator;
mod solution;
mod strategy;

pub use cancel::Cancellation;
pub use config::SolverConfig;
pub use self::core::{ExpressionSolver, SearchStats};
pub use errors::SolverError;
pub use evaluator::{evaluate, reduce};
pub use solution::{Solution, Step};
pub use strategy::GroupingStrategy;
