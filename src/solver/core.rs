use std::sync::atomic::AtomicBool;

use log::{debug, info};
use rayon::prelude::*;

use crate::enumeration::{MultisetPermutations, collect_assignments};
use crate::operator::Operator;
use crate::solver::cancel::Cancellation;
use crate::solver::config::SolverConfig;
use crate::solver::errors::SolverError;
use crate::solver::evaluator::{evaluate, reduce};
use crate::solver::solution::Solution;

/// Counters describing one completed search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub permutations: usize,
    pub assignments: usize,
    pub groupings: usize,
    pub evaluations: usize,
    pub solutions: usize,
}

/// Brute-force search over permutations, operator assignments and groupings
pub struct ExpressionSolver {
    config: SolverConfig,
}

impl ExpressionSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Every expression over `input` that evaluates exactly to the target.
    ///
    /// Solutions come out in enumeration order: input permutation first,
    /// then operator assignment, then grouping order.
    ///
    /// # Errors
    ///
    /// Returns an error if the input exceeds `max_inputs`, or is too long
    /// for its assignments and orders to be enumerated.
    pub fn solve(&self, input: &[f64]) -> Result<Vec<Solution>, SolverError> {
        self.solve_with_stats(input).map(|(solutions, _)| solutions)
    }

    /// # Errors
    ///
    /// See [`ExpressionSolver::solve`].
    pub fn solve_with_stats(
        &self,
        input: &[f64],
    ) -> Result<(Vec<Solution>, SearchStats), SolverError> {
        let cancel = AtomicBool::new(false);
        self.search(input, &cancel)
    }

    /// Like [`ExpressionSolver::solve`], checking `cancel` before each input permutation.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::Cancelled` once `cancel` reports cancellation, in
    /// addition to the errors of [`ExpressionSolver::solve`].
    pub fn solve_with_cancel<C: Cancellation + ?Sized>(
        &self,
        input: &[f64],
        cancel: &C,
    ) -> Result<Vec<Solution>, SolverError> {
        self.search(input, cancel).map(|(solutions, _)| solutions)
    }

    fn search<C: Cancellation + ?Sized>(
        &self,
        input: &[f64],
        cancel: &C,
    ) -> Result<(Vec<Solution>, SearchStats), SolverError> {
        if let Some(max) = self.config.max_inputs
            && input.len() > max
        {
            return Err(SolverError::TooManyInputs {
                len: input.len(),
                max,
            });
        }

        info!(
            "Searching {:?} for target {} ({:?} groupings)",
            input, self.config.target, self.config.strategy
        );

        let mut stats = SearchStats::default();

        match input {
            [] => {
                info!("Empty input has no expressions");
                return Ok((Vec::new(), stats));
            }
            [value] => {
                stats.permutations = 1;
                stats.evaluations = 1;
                let solutions = if self.matches_target(*value) {
                    vec![Solution::trivial(*value)]
                } else {
                    Vec::new()
                };
                stats.solutions = solutions.len();
                return Ok((solutions, stats));
            }
            _ => {}
        }

        let steps = input.len() - 1;
        let assignments = collect_assignments(steps)?;
        let orders = self.config.strategy.orders(steps)?;
        stats.assignments = assignments.len();
        stats.groupings = orders.len();

        let mut solutions = Vec::new();

        for permutation in MultisetPermutations::new(input) {
            if cancel.is_cancelled() {
                info!(
                    "Search cancelled after {} permutations",
                    stats.permutations
                );
                return Err(SolverError::Cancelled);
            }
            stats.permutations += 1;

            if self.config.parallel {
                let found: Vec<Vec<Solution>> = assignments
                    .par_iter()
                    .map(|operators| self.search_assignment(&permutation, operators, &orders))
                    .collect();
                solutions.extend(found.into_iter().flatten());
            } else {
                for operators in &assignments {
                    solutions.extend(self.search_assignment(&permutation, operators, &orders));
                }
            }
        }

        stats.evaluations = stats.permutations * stats.assignments * stats.groupings;
        stats.solutions = solutions.len();
        info!(
            "Evaluated {} expressions ({} permutations x {} assignments x {} groupings), {} matched",
            stats.evaluations,
            stats.permutations,
            stats.assignments,
            stats.groupings,
            stats.solutions
        );

        Ok((solutions, stats))
    }

    /// Try every grouping order for one permutation and operator assignment
    fn search_assignment(
        &self,
        permutation: &[f64],
        operators: &[Operator],
        orders: &[Vec<usize>],
    ) -> Vec<Solution> {
        let strategy = self.config.strategy;
        let mut buffer = Vec::with_capacity(permutation.len());
        let mut found = Vec::new();

        for order in orders {
            buffer.clear();
            buffer.extend_from_slice(permutation);

            let Some(value) = reduce(&mut buffer, operators, order, strategy) else {
                continue;
            };
            if !self.matches_target(value) {
                continue;
            }

            if let Some((value, steps)) = evaluate(permutation, operators, order, strategy) {
                let solution = Solution {
                    permutation: permutation.to_vec(),
                    operators: operators.to_vec(),
                    order: order.clone(),
                    steps,
                    value,
                };
                debug!("Found solution: {}", solution.expression());
                found.push(solution);
            }
        }

        found
    }

    /// Exact floating-point equality, no tolerance
    #[allow(clippy::float_cmp)]
    fn matches_target(&self, value: f64) -> bool {
        value == self.config.target
    }
}

impl Default for ExpressionSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
