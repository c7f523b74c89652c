use crate::solver::constants::DEFAULT_TARGET;
use crate::solver::strategy::GroupingStrategy;

/// Configuration for the search
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Value an expression must reach exactly to count as a solution
    pub target: f64,
    pub strategy: GroupingStrategy,
    /// Evaluate operator assignments on the rayon pool
    pub parallel: bool,
    /// Reject inputs longer than this before searching
    pub max_inputs: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            strategy: GroupingStrategy::default(),
            parallel: false,
            max_inputs: None,
        }
    }
}

impl SolverConfig {
    pub fn with_target(target: f64) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }
}
