//! ngame - A brute-force solver for the 24 game, generalised to any target
//!
//! Every ordering of the inputs is combined with every assignment of
//! `+ - * /` and every grouping order, and each expression that evaluates
//! exactly to the target is reported with its derivation.

pub mod enumeration;
pub mod operator;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use enumeration::EnumerationError;
pub use operator::{Operator, OperatorError};
pub use solver::{
    Cancellation, ExpressionSolver, GroupingStrategy, SearchStats, Solution, SolverConfig,
    SolverError, Step,
};
pub use utils::{UtilsError, parse_numbers, parse_numbers_lenient};

/// Find every expression over `input` that evaluates to `target`
///
/// This is a convenience function that uses the default clamped grouping
/// strategy and a sequential search.
///
/// # Errors
///
/// This function will return an error if the input is too long for its
/// operator assignments and grouping orders to be enumerated.
///
/// # Examples
///
/// ```
/// use ngame::calculate_solutions;
///
/// let solutions = calculate_solutions(24.0, &[4.0, 6.0]).unwrap_or_default();
/// assert_eq!(solutions.len(), 2);
/// assert_eq!(solutions[0].expression(), "(4 * 6)");
/// ```
pub fn calculate_solutions(target: f64, input: &[f64]) -> Result<Vec<Solution>, SolverError> {
    let solver = ExpressionSolver::new(SolverConfig::with_target(target));
    solver.solve(input)
}
